// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! Argument and result marshaling for the call surface
//!
//! Arguments are narrowed to the ABI's fixed-width types before the
//! boundary; results are checked against the reserved sentinel range after
//! it. Nothing here trusts a native result without checking it first.

use tracing::error;

use crate::{error::CallError, loader::NativeModule};

impl NativeModule {
	/// Wrapping sum of `a` and `b`
	///
	/// Validates that both inputs are representable in the native `i64`
	/// width before crossing the boundary; overflow of the sum itself wraps,
	/// matching the native contract.
	pub fn sum(&self, a: i128, b: i128) -> Result<i64, CallError> {
		let a = narrow(a)?;
		let b = narrow(b)?;
		Ok((self.table().add)(a, b))
	}

	/// Number of bytes in `data`, counted by the native core
	///
	/// The borrow pins the buffer for the duration of the call; the native
	/// side reads it and never retains or frees it.
	pub fn on_bytes(&self, data: &[u8]) -> Result<u64, CallError> {
		let code = (self.table().count_bytes)(data.as_ptr(), data.len() as u64);
		if code < 0 {
			error!(code, "count_bytes signaled failure");
			return Err(CallError::Native {
				code,
			});
		}
		Ok(code as u64)
	}
}

fn narrow(value: i128) -> Result<i64, CallError> {
	i64::try_from(value).map_err(|_| CallError::OutOfRange {
		value,
	})
}
