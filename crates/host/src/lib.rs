// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! Host-side binding shim for the liblearn native core
//!
//! Loads the native module once, resolves and validates its function table
//! at load time, and forwards calls with marshaling and typed error
//! surfacing. The module state machine has exactly two states,
//! `unloaded -> loaded`; the transition happens once at first use and there
//! is no unload during the process lifetime.
//!
//! ```no_run
//! let sum = liblearn_host::sum(2, 3)?;
//! assert_eq!(sum, 5);
//!
//! let count = liblearn_host::on_bytes(b"hello")?;
//! assert_eq!(count, 5);
//! # Ok::<(), liblearn_host::Error>(())
//! ```

mod calls;
pub mod error;
pub mod loader;

use std::sync::OnceLock;

pub use error::{CallError, Error, LoadError};
pub use loader::{LoadOptions, NATIVE_PATH_ENV, NativeModule, default_module_path};

static MODULE: OnceLock<Result<NativeModule, LoadError>> = OnceLock::new();

/// Global module handle, loaded once at first use
///
/// Concurrent first callers perform the load exactly once; a load failure is
/// sticky and surfaces on every subsequent call.
pub fn module() -> Result<&'static NativeModule, Error> {
	match MODULE.get_or_init(NativeModule::load) {
		Ok(module) => Ok(module),
		Err(err) => Err(Error::Load(err.clone())),
	}
}

/// Wrapping sum of `a` and `b` through the global module
pub fn sum(a: i128, b: i128) -> Result<i64, Error> {
	Ok(module()?.sum(a, b)?)
}

/// Byte count of `data` through the global module
pub fn on_bytes(data: &[u8]) -> Result<u64, Error> {
	Ok(module()?.on_bytes(data)?)
}
