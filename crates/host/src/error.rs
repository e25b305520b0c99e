// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! Error taxonomy of the binding shim
//!
//! Load failures are fatal and surface at first use. Per-call failures are
//! raised host-side before crossing the boundary (`OutOfRange`) or mapped
//! from the reserved sentinel range after it (`Native`). No error crosses
//! the boundary as an unwind; only primitive sentinel values do.

use std::path::PathBuf;

/// Failure to locate, open, or validate the native module
///
/// Cloneable so the one-time load result can be handed to every caller of
/// the global module.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
	#[error("native module not found at {}", path.display())]
	NotFound {
		path: PathBuf,
	},

	#[error("failed to open native module {}: {message}", path.display())]
	Open {
		path: PathBuf,
		message: String,
	},

	#[error("native module is missing required symbol {symbol}")]
	MissingSymbol {
		symbol: &'static str,
	},

	#[error("native module returned a null function table")]
	NullFunctionTable,

	#[error("native module ABI version {found} outside supported range {min}..={max}")]
	AbiVersionMismatch {
		found: u32,
		min: u32,
		max: u32,
	},
}

/// Per-call failure
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CallError {
	#[error("value {value} is not representable in the native integer width")]
	OutOfRange {
		value: i128,
	},

	#[error("native call failed with sentinel code {code}")]
	Native {
		code: i64,
	},
}

/// Umbrella error for the host surface
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Load(#[from] LoadError),

	#[error(transparent)]
	Call(#[from] CallError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_load_error_display() {
		let err = LoadError::NotFound {
			path: PathBuf::from("/opt/liblearn/libliblearn_core.so"),
		};
		assert_eq!(err.to_string(), "native module not found at /opt/liblearn/libliblearn_core.so");

		let err = LoadError::AbiVersionMismatch {
			found: 7,
			min: 1,
			max: 1,
		};
		assert_eq!(err.to_string(), "native module ABI version 7 outside supported range 1..=1");
	}

	#[test]
	fn test_call_error_display() {
		let err = CallError::OutOfRange {
			value: i128::from(i64::MAX) + 1,
		};
		assert_eq!(
			err.to_string(),
			"value 9223372036854775808 is not representable in the native integer width"
		);

		let err = CallError::Native {
			code: -2,
		};
		assert_eq!(err.to_string(), "native call failed with sentinel code -2");
	}

	#[test]
	fn test_umbrella_error_is_transparent() {
		let err = Error::from(CallError::Native {
			code: -1,
		});
		assert_eq!(err.to_string(), "native call failed with sentinel code -1");
	}
}
