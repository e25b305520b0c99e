// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! End-to-end demonstration of the liblearn boundary
//!
//! Loads the native core through the host shim and calls both exported
//! operations. Build the shared object first, then point the loader at it:
//!
//! ```text
//! cargo build -p liblearn-core
//! LIBLEARN_NATIVE_PATH=target/debug/libliblearn_core.so cargo run -p liblearn-demo
//! ```

use std::process::ExitCode;

use tracing::debug;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let module = match liblearn_host::module() {
		Ok(module) => module,
		Err(err) => {
			eprintln!("failed to load the native module: {err}");
			eprintln!(
				"hint: build it with `cargo build -p liblearn-core` and point {} at the artifact",
				liblearn_host::NATIVE_PATH_ENV
			);
			return ExitCode::FAILURE;
		}
	};

	let sum = match module.sum(2, 3) {
		Ok(sum) => sum,
		Err(err) => {
			eprintln!("sum failed: {err}");
			return ExitCode::FAILURE;
		}
	};
	println!("sum(2, 3) = {sum}");

	let count = match module.on_bytes(b"hello") {
		Ok(count) => count,
		Err(err) => {
			eprintln!("on_bytes failed: {err}");
			return ExitCode::FAILURE;
		}
	};
	println!("on_bytes(b\"hello\") = {count}");

	debug!("demo finished");
	ExitCode::SUCCESS
}
