// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! C ABI definitions for the liblearn native-extension boundary
//!
//! This crate provides the stable C ABI contract that the native core and the
//! host shim compile against. It defines the versioned function table, the
//! exported symbol names, the reserved sentinel error codes, and the limits
//! both sides agree on. Only primitive and POD types appear here; nothing in
//! this crate allocates or unwinds.

pub mod constants;
pub mod table;

pub use constants::*;
pub use table::*;
