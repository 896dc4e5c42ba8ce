// Copyright 2015 Axel Rasmussen
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

use crate::binding::Binding;
use crate::option::{BoundOption, Opt};
use crate::predicates::*;

#[test]
fn test_between() {
    assert!(!between(1u64, 10u64)(&1));
    assert!(!between(1, 10)(&10));
    assert!(!between(-10, 10)(&-10));
    assert!(!between(-10i64, 10i64)(&10));
    assert!(!between(-10, 10)(&200));
    assert!(!between(-10.0, 10.0)(&200.0));
    assert!(!between(-10, 10)(&-200));
    assert!(between(1u32, 10u32)(&5));
    assert!(between(-10, 10)(&0));
    assert!(between(-10, 10)(&1));
    assert!(between(173.0, 345.0)(&333.0));
    assert!(between(173.0, 345.0)(&173.2));
}

#[test]
fn test_ibetween() {
    assert!(!ibetween(-10, 10)(&200));
    assert!(!ibetween(-10.0, 10.0)(&200.0));
    assert!(!ibetween(-10, 10)(&-200));
    assert!(!ibetween(1u64, 10u64)(&0));
    assert!(!ibetween(1u64, 10u64)(&103));
    assert!(ibetween(1u64, 10u64)(&1));
    assert!(ibetween(1, 10)(&10));
    assert!(ibetween(-10, 10)(&-10));
    assert!(ibetween(-10i64, 10i64)(&10));
    assert!(ibetween(1u32, 10u32)(&5));
    assert!(ibetween(-10, 10)(&0));
    assert!(ibetween(173.0, 345.0)(&333.0));
    assert!(ibetween(173.0, 345.0)(&173.2));
}

#[test]
fn test_greater_than() {
    assert!(!greater_than(155.0)(&155.0));
    assert!(!greater_than(-12)(&-14));
    assert!(!greater_than(10)(&10));
    assert!(!greater_than(1234)(&1234));
    assert!(greater_than(10)(&200));
    assert!(greater_than(10.0)(&200.0));
    assert!(greater_than(-10.0)(&200.0));
    assert!(greater_than(56.0)(&445.0));
}

#[test]
fn test_igreater_than() {
    assert!(!igreater_than(-12)(&-14));
    assert!(!igreater_than(0.0)(&-14.0));
    assert!(!igreater_than(1455)(&334));
    assert!(!igreater_than(-135.0f32)(&-334.0));
    assert!(igreater_than(10)(&10));
    assert!(igreater_than(155.0)(&155.0));
    assert!(igreater_than(10)(&200));
    assert!(igreater_than(10.0)(&200.0));
    assert!(igreater_than(-1342.0)(&200.0));
}

#[test]
fn test_less_than() {
    assert!(!less_than(155.0)(&155.0));
    assert!(!less_than(10)(&10));
    assert!(!less_than(10)(&200));
    assert!(!less_than(10.0)(&200.0));
    assert!(!less_than(-10.0)(&200.0));
    assert!(less_than(-12)(&-14));
    assert!(less_than(10.0)(&0.0));
    assert!(less_than(1234)(&123));
    assert!(less_than(0)(&-324));
    assert!(less_than(3.0f32)(&1.0));
}

#[test]
fn test_iless_than() {
    assert!(!iless_than(10)(&200));
    assert!(!iless_than(10.0)(&200.0));
    assert!(!iless_than(-10.0)(&200.0));
    assert!(!iless_than(-10.0)(&-9.95));
    assert!(!iless_than(1234.0)(&1234.2));
    assert!(!iless_than(234.234)(&234.25));
    assert!(iless_than(10)(&10));
    assert!(iless_than(155.0)(&155.0));
    assert!(iless_than(10)(&-200));
    assert!(iless_than(1234.2)(&1234.2));
}

#[test]
fn test_predicate_as_option_validator() {
    let level = Binding::new(0);
    let opt = Opt::new("--level")
        .bind("level", &level)
        .validate("[0; 100]", ibetween(0, 100));

    assert!(opt.assign("0").is_ok());
    assert!(opt.assign("100").is_ok());
    assert!(opt.assign("101").is_err());
    assert!(opt.assign("-1").is_err());
    assert_eq!(100, level.get());
}
