// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! The versioned function table the native core commits to exporting

/// Function table exported by the native core
///
/// This is the fixed set of entry points the boundary consists of. Once
/// published, a slot's signature never changes within a major version; new
/// capabilities are added as new slots together with an ABI version bump.
/// All function pointers must be valid (non-null).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FunctionTable {
	/// Establish the process-wide initialization state
	///
	/// Idempotent: the second and later calls are no-ops, and setup runs
	/// exactly once even under concurrent first callers. Must be invoked
	/// before any other slot is used. Cannot fail under normal conditions;
	/// if internal setup fails, the native core aborts the process instead
	/// of returning through an uninitialized boundary.
	pub init: extern "C" fn(),

	/// Add two integers
	///
	/// Pure and total over the full `i64` range: overflow wraps with
	/// two's-complement semantics. No error channel.
	///
	/// # Parameters
	/// - `a`: First operand
	/// - `b`: Second operand
	///
	/// # Returns
	/// - The wrapping sum of `a` and `b`
	pub add: extern "C" fn(a: i64, b: i64) -> i64,

	/// Count `len` bytes starting at `data`
	///
	/// The caller retains ownership of the buffer; the callee never frees
	/// or retains it.
	///
	/// # Parameters
	/// - `data`: Caller-owned buffer, or null when `len` is zero
	/// - `len`: Number of bytes readable at `data`
	///
	/// # Returns
	/// - The byte count on success
	/// - `ERR_NULL_BUFFER` when `data` is null and `len` is nonzero
	/// - `ERR_LENGTH_LIMIT` when `len` exceeds `MAX_BUFFER_LEN`
	/// - `ERR_PANIC` when the implementation panicked; the panic is
	///   contained at the boundary
	///
	/// # Safety
	/// - `data` must be valid for reads of `len` bytes, or null with
	///   `len == 0`
	/// - The buffer must not be mutated or freed while the call is in
	///   flight
	pub count_bytes: extern "C" fn(data: *const u8, len: u64) -> i64,
}
