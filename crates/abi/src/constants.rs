// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! Constants and version information for the liblearn ABI

/// Current ABI version
///
/// This version must be incremented when making breaking changes to the
/// function table. A slot's signature never changes within a major version;
/// new capabilities are added as new slots.
pub const CURRENT_ABI_VERSION: u32 = 1;

/// Minimum supported ABI version
///
/// Native modules reporting a version below this will not be loaded.
pub const MIN_ABI_VERSION: u32 = 1;

/// Maximum supported ABI version
///
/// Native modules reporting a version above this will not be loaded.
pub const MAX_ABI_VERSION: u32 = 1;

// ==================== Sentinel Error Codes ====================
// Reserved negative return values. Valid results are non-negative, so the
// two ranges cannot collide.

/// Buffer pointer was null while the declared length was nonzero
pub const ERR_NULL_BUFFER: i64 = -1;

/// Declared length exceeds `MAX_BUFFER_LEN`
pub const ERR_LENGTH_LIMIT: i64 = -2;

/// The native implementation panicked; the panic was contained at the boundary
pub const ERR_PANIC: i64 = -99;

/// Largest buffer length `count_bytes` accepts
///
/// Caps lengths so that every valid count is representable in the `i64`
/// result channel next to the reserved sentinel range.
pub const MAX_BUFFER_LEN: u64 = i64::MAX as u64;

// ==================== Standard Symbols ====================

/// Symbol name for querying the ABI version
pub const SYMBOL_ABI_VERSION: &[u8] = b"liblearn_abi_version\0";

/// Symbol name for obtaining the function table
pub const SYMBOL_FUNCTION_TABLE: &[u8] = b"liblearn_function_table\0";

/// Symbol name for the direct initialization entry point
pub const SYMBOL_INIT: &[u8] = b"liblearn_init\0";
