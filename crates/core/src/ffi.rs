// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! C-compatible export surface of the native core
//!
//! Return-code contract for fallible slots:
//! - `>= 0`: success value
//! - `< 0`: reserved sentinel error code
//!
//! No panic ever unwinds across this boundary. Fallible slots contain
//! panics and convert them to `ERR_PANIC`; initialization aborts the process
//! instead, since there is no way to signal failure before the boundary
//! exists.

use std::{
	panic::{AssertUnwindSafe, catch_unwind},
	process::abort,
	slice,
	sync::OnceLock,
};

use liblearn_abi::{
	CURRENT_ABI_VERSION, ERR_LENGTH_LIMIT, ERR_NULL_BUFFER, ERR_PANIC, FunctionTable,
	MAX_BUFFER_LEN,
};
use tracing::error;

use crate::{init, ops};

static FUNCTION_TABLE: OnceLock<FunctionTable> = OnceLock::new();

/// In-process handle to the same table the `cdylib` exports.
///
/// Used by hosts that link the core directly (tests, embedding) instead of
/// resolving [`liblearn_function_table`] through a loader.
pub fn table() -> &'static FunctionTable {
	FUNCTION_TABLE.get_or_init(|| FunctionTable {
		init: ffi_init,
		add: ffi_add,
		count_bytes: ffi_count_bytes,
	})
}

/// Get the ABI version this native core was built against
#[unsafe(no_mangle)]
pub extern "C" fn liblearn_abi_version() -> u32 {
	CURRENT_ABI_VERSION
}

/// Get the function table
///
/// Resolved by the host once at load time. The table is static; the returned
/// pointer stays valid for the process lifetime.
#[unsafe(no_mangle)]
pub extern "C" fn liblearn_function_table() -> *const FunctionTable {
	table() as *const _
}

/// Direct initialization entry point
///
/// Shares the one-time guard with the table's `init` slot; kept as a plain
/// symbol so a minimal host can initialize without resolving the table
/// first.
#[unsafe(no_mangle)]
pub extern "C" fn liblearn_init() {
	ffi_init();
}

extern "C" fn ffi_init() {
	if catch_unwind(init::init).is_err() {
		error!("panic during native core initialization - aborting");
		abort();
	}
}

extern "C" fn ffi_add(a: i64, b: i64) -> i64 {
	// Wrapping add is total; nothing here can panic.
	ops::add(a, b)
}

extern "C" fn ffi_count_bytes(data: *const u8, len: u64) -> i64 {
	let result = catch_unwind(AssertUnwindSafe(|| {
		if len > MAX_BUFFER_LEN || usize::try_from(len).is_err() {
			error!(len, "count_bytes length over limit");
			return ERR_LENGTH_LIMIT;
		}
		if data.is_null() {
			if len == 0 {
				return 0;
			}
			error!(len, "count_bytes called with null buffer and nonzero length");
			return ERR_NULL_BUFFER;
		}
		let bytes = unsafe { slice::from_raw_parts(data, len as usize) };
		ops::count_bytes(bytes) as i64
	}));

	result.unwrap_or_else(|e| {
		error!(?e, "Panic in count_bytes");
		ERR_PANIC
	})
}
