// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::{Mutex, MutexGuard};

use crate::config::set_default_region;

mod region_code;
mod handle_tests;
mod api_tests;
mod concurrency_tests;
mod property_tests;

static DEFAULT_REGION_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that read or write the process-wide default region and
/// restores it to unknown when dropped.
pub(crate) struct DefaultRegionGuard {
    _lock: MutexGuard<'static, ()>,
}

impl DefaultRegionGuard {
    pub(crate) fn with(region: Option<&str>) -> Self {
        // a failed test must not poison the rest
        let lock = DEFAULT_REGION_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        set_default_region(region);
        Self { _lock: lock }
    }
}

impl Drop for DefaultRegionGuard {
    fn drop(&mut self) {
        set_default_region(None);
    }
}

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logger() {
    ONCE.call_once(|| {
        let mut builder: env_logger::Builder = colog::default_builder();
        // RUST_LOG, when set, narrows the trace level below
        builder
            .filter_level(log::LevelFilter::Trace)
            .parse_default_env()
            .is_test(true);
        let _ = builder.try_init();
    });
}
