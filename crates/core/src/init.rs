// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 Liblearn

//! Process-wide initialization state
//!
//! A one-time-execution guard, not an unguarded boolean: setup runs exactly
//! once even when several host threads race on first use. The state is never
//! torn down within the process lifetime; teardown happens only at process
//! exit.

use std::sync::{
	Once,
	atomic::{AtomicBool, Ordering},
};

use tracing::debug;

static INIT: Once = Once::new();
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Establish the process-wide initialization state.
///
/// Idempotent: the second and later calls are no-ops. Concurrent first
/// callers block until the winning caller's setup has completed, so no
/// caller observes a partially initialized core.
pub fn init() {
	INIT.call_once(|| {
		INITIALIZED.store(true, Ordering::Release);
		debug!("liblearn native core initialized");
	});
}

/// Whether [`init`] has completed.
pub fn initialized() -> bool {
	INITIALIZED.load(Ordering::Acquire)
}
