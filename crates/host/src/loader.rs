// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! Native module discovery and loading
//!
//! Resolves the shared object, opens it, validates the ABI contract, and
//! invokes initialization. Everything the boundary depends on is resolved
//! here, at load time: a missing symbol, a null table, or an out-of-range
//! ABI version fails the load instead of the first call.

use std::{
	env,
	path::{Path, PathBuf},
};

use libloading::Library;
use liblearn_abi::{
	FunctionTable, MAX_ABI_VERSION, MIN_ABI_VERSION, SYMBOL_ABI_VERSION, SYMBOL_FUNCTION_TABLE,
};
use tracing::{debug, error};

use crate::error::LoadError;

/// Environment variable overriding the full path of the native module
pub const NATIVE_PATH_ENV: &str = "LIBLEARN_NATIVE_PATH";

/// File stem of the native module under the discovery convention
pub const NATIVE_MODULE_STEM: &str = "liblearn_core";

/// Options controlling where the native module is looked up
///
/// Resolution order: explicit path, then the `LIBLEARN_NATIVE_PATH`
/// environment variable, then the default discovery convention.
#[derive(Debug, Default)]
pub struct LoadOptions {
	path: Option<PathBuf>,
}

impl LoadOptions {
	/// Create options that follow the discovery convention
	pub fn new() -> Self {
		Self {
			path: None,
		}
	}

	/// Load from an explicit path instead of the discovery convention
	pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.path = Some(path.into());
		self
	}

	fn resolve(&self) -> PathBuf {
		if let Some(path) = &self.path {
			return path.clone();
		}
		if let Some(path) = env::var_os(NATIVE_PATH_ENV) {
			return PathBuf::from(path);
		}
		default_module_path()
	}
}

/// Default discovery convention
///
/// The platform shared-object name (`libliblearn_core.so`,
/// `libliblearn_core.dylib`, `liblearn_core.dll`) in the directory of the
/// current executable.
pub fn default_module_path() -> PathBuf {
	let file = format!("{}{}{}", env::consts::DLL_PREFIX, NATIVE_MODULE_STEM, env::consts::DLL_SUFFIX);
	let dir = env::current_exe()
		.ok()
		.and_then(|exe| exe.parent().map(Path::to_path_buf))
		.unwrap_or_else(|| PathBuf::from("."));
	dir.join(file)
}

/// A loaded and validated native module
///
/// Holds the underlying library open for as long as the module lives; the
/// shim's state machine has no `loaded -> unloaded` transition, so a module
/// stored in the global handle stays loaded until process exit.
pub struct NativeModule {
	// Keeps the code the table points into mapped. None when the table was
	// linked in-process.
	_library: Option<Library>,
	table: FunctionTable,
}

impl NativeModule {
	/// Load following the discovery convention
	pub fn load() -> Result<Self, LoadError> {
		Self::load_with(LoadOptions::new())
	}

	/// Load with explicit options
	///
	/// Opens the library, resolves the version and table symbols, rejects
	/// ABI versions outside the supported range, and invokes the table's
	/// `init` slot before returning.
	pub fn load_with(options: LoadOptions) -> Result<Self, LoadError> {
		let path = options.resolve();
		if !path.is_file() {
			error!(path = %path.display(), "native module not found");
			return Err(LoadError::NotFound {
				path,
			});
		}

		let library = unsafe { Library::new(&path) }.map_err(|e| {
			error!(path = %path.display(), error = %e, "failed to open native module");
			LoadError::Open {
				path: path.clone(),
				message: e.to_string(),
			}
		})?;

		let abi_version: libloading::Symbol<extern "C" fn() -> u32> =
			unsafe { library.get(SYMBOL_ABI_VERSION) }.map_err(|_| LoadError::MissingSymbol {
				symbol: "liblearn_abi_version",
			})?;
		check_abi_version(abi_version())?;

		let function_table: libloading::Symbol<extern "C" fn() -> *const FunctionTable> =
			unsafe { library.get(SYMBOL_FUNCTION_TABLE) }.map_err(|_| LoadError::MissingSymbol {
				symbol: "liblearn_function_table",
			})?;
		let table_ptr = function_table();
		if table_ptr.is_null() {
			error!(path = %path.display(), "native module returned a null function table");
			return Err(LoadError::NullFunctionTable);
		}
		// The table is plain data (Copy); the library handle keeps the code
		// its slots point into mapped.
		let table = unsafe { *table_ptr };

		(table.init)();
		debug!(path = %path.display(), "native module loaded and initialized");

		Ok(Self {
			_library: Some(library),
			table,
		})
	}

	/// Wrap an in-process function table
	///
	/// For hosts that link the native core directly instead of loading a
	/// shared object. Invokes the table's `init` slot, which is idempotent.
	pub fn from_table(table: FunctionTable) -> Self {
		(table.init)();
		Self {
			_library: None,
			table,
		}
	}

	pub(crate) fn table(&self) -> &FunctionTable {
		&self.table
	}
}

fn check_abi_version(found: u32) -> Result<(), LoadError> {
	if found < MIN_ABI_VERSION || found > MAX_ABI_VERSION {
		error!(found, min = MIN_ABI_VERSION, max = MAX_ABI_VERSION, "unsupported ABI version");
		return Err(LoadError::AbiVersionMismatch {
			found,
			min: MIN_ABI_VERSION,
			max: MAX_ABI_VERSION,
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_check_abi_version_accepts_supported_range() {
		for version in MIN_ABI_VERSION..=MAX_ABI_VERSION {
			assert!(check_abi_version(version).is_ok());
		}
	}

	#[test]
	fn test_check_abi_version_rejects_out_of_range() {
		assert!(matches!(
			check_abi_version(0),
			Err(LoadError::AbiVersionMismatch {
				found: 0,
				..
			})
		));
		assert!(matches!(
			check_abi_version(MAX_ABI_VERSION + 1),
			Err(LoadError::AbiVersionMismatch {
				..
			})
		));
	}

	#[test]
	fn test_default_module_path_uses_platform_name() {
		let path = default_module_path();
		let file = path.file_name().unwrap().to_string_lossy();
		assert!(file.contains(NATIVE_MODULE_STEM));
		assert!(file.ends_with(env::consts::DLL_SUFFIX));
	}

	#[test]
	fn test_explicit_path_wins_resolution() {
		let options = LoadOptions::new().with_path("/tmp/custom.so");
		assert_eq!(options.resolve(), PathBuf::from("/tmp/custom.so"));
	}
}
