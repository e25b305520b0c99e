// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! Native core of the liblearn extension boundary
//!
//! Compiled as a `cdylib`, this crate exposes the versioned function table
//! declared in `liblearn-abi` plus the process-wide initialization entry
//! point. The `rlib` half exists so the host shim's tests can drive the same
//! table in-process without loading a shared object.
//!
//! The core owns nothing that crosses the boundary: it reads caller-owned
//! buffers for the duration of a call, returns primitive values, and never
//! lets a panic unwind across the `extern "C"` surface.

pub mod ffi;
pub mod init;
pub mod ops;

pub use init::{init, initialized};
pub use ops::{add, count_bytes};
