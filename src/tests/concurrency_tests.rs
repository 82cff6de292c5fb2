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

use std::{sync::Arc, thread};

use crate::{
    config::{default_region, set_default_region},
    handle::PhoneNumberHandle,
    i18n::RegionCode,
};

use super::{DefaultRegionGuard, init_logger, region_code::RegionCode as Region};

const THREADS: usize = 8;

#[test]
fn shared_handle_yields_one_value_per_accessor() {
    init_logger();
    let number = Arc::new(PhoneNumberHandle::new("+1 404-384-1384 ext. 123", None));

    let results = (0..THREADS)
        .map(|_| {
            let number = Arc::clone(&number);
            thread::spawn(move || {
                (
                    number.is_valid(),
                    number.national().map(|text| text.as_ptr() as usize),
                    number.international().map(str::to_owned),
                    number.dasherized_international().map(str::to_owned),
                    number.area_code().map(str::to_owned),
                )
            })
        })
        .map(|join| join.join().expect("worker thread panicked"))
        .collect::<Vec<_>>();

    for result in &results {
        assert_eq!(results[0], *result);
    }
    let (valid, national, international, dasherized, area_code) = &results[0];
    assert!(valid);
    // Every thread observed the single memoized string.
    assert_eq!(number.national().map(|text| text.as_ptr() as usize), *national);
    assert_eq!(Some("+1 404-384-1384 ext. 123"), international.as_deref());
    assert_eq!(Some("1-404-384-1384"), dasherized.as_deref());
    assert_eq!(Some("404"), area_code.as_deref());
}

#[test]
fn handles_are_built_from_many_threads() {
    init_logger();
    let inputs = [
        "+14043841384",
        "+44 7400 123456",
        "+39 02 3661 8300",
        "+800 1234 5678",
        "+61 2 1234 5678",
        "+64 3 234 5678",
    ];
    thread::scope(|scope| {
        let workers = (0..THREADS)
            .map(|worker| {
                scope.spawn(move || {
                    inputs
                        .iter()
                        .cycle()
                        .skip(worker)
                        .take(inputs.len() * 4)
                        .map(|input| PhoneNumberHandle::new(*input, None))
                        .filter(PhoneNumberHandle::is_valid)
                        .count()
                })
            })
            .collect::<Vec<_>>();
        for worker in workers {
            assert_eq!(inputs.len() * 4, worker.join().expect("worker thread panicked"));
        }
    });
}

#[test]
fn default_region_is_never_torn() {
    let _guard = DefaultRegionGuard::with(Some(Region::us()));
    let allowed = [RegionCode::parse(Region::us()), RegionCode::parse(Region::gb())];

    thread::scope(|scope| {
        scope.spawn(|| {
            for round in 0..1000 {
                let region = if round % 2 == 0 { Region::gb() } else { Region::us() };
                set_default_region(Some(region));
            }
        });
        for _ in 0..THREADS / 2 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    let region = default_region();
                    assert!(allowed.contains(&region), "unexpected region {}", region);
                }
            });
        }
    });
}
