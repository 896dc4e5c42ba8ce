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

//! Stock validator predicates for numeric options. Each function returns a
//! closure suitable for `Opt::validate`. The `i`-prefixed variants include
//! their bounds; the others exclude them.

/// A predicate satisfied by values strictly between the two bounds.
pub fn between<T: PartialOrd + Copy + 'static>(lo: T, hi: T) -> impl Fn(&T) -> bool {
    move |v| lo < *v && *v < hi
}

/// A predicate satisfied by values between the two bounds, bounds included.
pub fn ibetween<T: PartialOrd + Copy + 'static>(lo: T, hi: T) -> impl Fn(&T) -> bool {
    move |v| lo <= *v && *v <= hi
}

/// A predicate satisfied by values strictly greater than the bound.
pub fn greater_than<T: PartialOrd + Copy + 'static>(bound: T) -> impl Fn(&T) -> bool {
    move |v| bound < *v
}

/// A predicate satisfied by values greater than or equal to the bound.
pub fn igreater_than<T: PartialOrd + Copy + 'static>(bound: T) -> impl Fn(&T) -> bool {
    move |v| bound <= *v
}

/// A predicate satisfied by values strictly less than the bound.
pub fn less_than<T: PartialOrd + Copy + 'static>(bound: T) -> impl Fn(&T) -> bool {
    move |v| bound > *v
}

/// A predicate satisfied by values less than or equal to the bound.
pub fn iless_than<T: PartialOrd + Copy + 'static>(bound: T) -> impl Fn(&T) -> bool {
    move |v| bound >= *v
}
