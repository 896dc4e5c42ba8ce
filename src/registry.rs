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

use crate::option::BoundOption;
use std::collections::HashMap;

/// A stable index into the registry's arena of bound option records. The
/// name map stores handles rather than owning references, so two names
/// aliasing one option is just two map entries with the same handle.
pub(crate) type Handle = usize;

/// Registry owns every declared option and flag record, resolves registered
/// names (primary and alternate) to them, and tracks the total number of
/// required marks accumulated at declaration time.
pub(crate) struct Registry {
    arena: Vec<Box<dyn BoundOption>>,
    names: HashMap<String, Handle>,
    option_order: Vec<Handle>,
    flag_order: Vec<Handle>,
    total_required: i64,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Registry {
            arena: Vec::new(),
            names: HashMap::new(),
            option_order: Vec::new(),
            flag_order: Vec::new(),
            total_required: 0,
        }
    }

    /// Adds one record to the arena and registers each of its names. Exactly
    /// one record is created per declaration, no matter how many names map to
    /// it. Re-declaring a literal name silently overwrites that name's map
    /// entry; the older record stays alive in the arena and remains
    /// reachable through any still-unique name it holds.
    pub(crate) fn insert(&mut self, record: Box<dyn BoundOption>) -> Handle {
        let handle = self.arena.len();

        self.names.insert(record.primary_name().to_owned(), handle);
        if let Some(alternate) = record.alternate_name() {
            self.names.insert(alternate.to_owned(), handle);
        }

        self.total_required += i64::from(record.required_marks());
        match record.is_flag() {
            false => self.option_order.push(handle),
            true => self.flag_order.push(handle),
        }

        self.arena.push(record);
        handle
    }

    /// Resolves a registered name to its bound option, or None if the name
    /// was never registered (or has been overwritten away).
    pub(crate) fn resolve(&self, name: &str) -> Option<&dyn BoundOption> {
        self.names.get(name).map(|&handle| &*self.arena[handle])
    }

    /// The sum of every record's required marks, accumulated at declaration
    /// time only. Monotonically increasing; removal is not supported.
    pub(crate) fn total_required(&self) -> i64 {
        self.total_required
    }

    /// Iterates the declared value options, in declaration order.
    pub(crate) fn options(&self) -> impl Iterator<Item = &dyn BoundOption> {
        self.option_order.iter().map(move |&h| &*self.arena[h])
    }

    /// Iterates the declared flags, in declaration order.
    pub(crate) fn flags(&self) -> impl Iterator<Item = &dyn BoundOption> {
        self.flag_order.iter().map(move |&h| &*self.arena[h])
    }
}
