// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! Drives the real native function table in-process through the shim's call
//! surface. Loading the table through a shared object is covered separately
//! in `loader.rs`; the boundary semantics are identical either way.

use std::{ptr, thread};

use liblearn_abi::{ERR_LENGTH_LIMIT, ERR_NULL_BUFFER, FunctionTable, MAX_BUFFER_LEN};
use liblearn_host::{CallError, NativeModule};

fn module() -> NativeModule {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init();
	NativeModule::from_table(*liblearn_core::ffi::table())
}

#[test]
fn test_sum_scenarios() {
	let module = module();
	assert_eq!(module.sum(2, 3), Ok(5));
	assert_eq!(module.sum(-1, 1), Ok(0));
	assert_eq!(module.sum(0, 0), Ok(0));
}

#[test]
fn test_sum_wraps_on_overflow() {
	let module = module();
	assert_eq!(module.sum(i128::from(i64::MAX), 1), Ok(i64::MIN));
	assert_eq!(module.sum(i128::from(i64::MIN), -1), Ok(i64::MAX));
}

#[test]
fn test_sum_rejects_unrepresentable_inputs_before_the_boundary() {
	let module = module();
	let too_big = i128::from(i64::MAX) + 1;
	assert_eq!(
		module.sum(too_big, 0),
		Err(CallError::OutOfRange {
			value: too_big,
		})
	);
	assert_eq!(
		module.sum(0, too_big),
		Err(CallError::OutOfRange {
			value: too_big,
		})
	);
}

#[test]
fn test_on_bytes_counts_bytes() {
	let module = module();
	assert_eq!(module.on_bytes(b"hello"), Ok(5));
	assert_eq!(module.on_bytes(b""), Ok(0));
	assert_eq!(module.on_bytes(&vec![7u8; 65536]), Ok(65536));
}

#[test]
fn test_init_twice_behaves_like_once() {
	let first = module();
	let second = module();
	assert!(liblearn_core::initialized());
	assert_eq!(first.sum(2, 3), Ok(5));
	assert_eq!(second.sum(2, 3), Ok(5));
}

#[test]
fn test_concurrent_sum_is_consistent() {
	let module = module();
	thread::scope(|s| {
		for _ in 0..8 {
			s.spawn(|| {
				for _ in 0..1000 {
					assert_eq!(module.sum(2, 3), Ok(5));
					assert_eq!(module.on_bytes(b"hello"), Ok(5));
				}
			});
		}
	});
}

#[test]
fn test_count_bytes_slot_sentinels() {
	let table = *liblearn_core::ffi::table();
	(table.init)();

	assert_eq!((table.count_bytes)(ptr::null(), 0), 0);
	assert_eq!((table.count_bytes)(ptr::null(), 5), ERR_NULL_BUFFER);

	let data = b"x";
	assert_eq!((table.count_bytes)(data.as_ptr(), MAX_BUFFER_LEN + 1), ERR_LENGTH_LIMIT);
}

extern "C" fn stub_init() {}

extern "C" fn stub_add(a: i64, b: i64) -> i64 {
	a.wrapping_add(b)
}

extern "C" fn stub_count_fails(_data: *const u8, _len: u64) -> i64 {
	ERR_LENGTH_LIMIT
}

#[test]
fn test_on_bytes_surfaces_native_sentinel_as_typed_error() {
	let table = FunctionTable {
		init: stub_init,
		add: stub_add,
		count_bytes: stub_count_fails,
	};
	let module = NativeModule::from_table(table);
	assert_eq!(
		module.on_bytes(b"hello"),
		Err(CallError::Native {
			code: ERR_LENGTH_LIMIT,
		})
	);
}
