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

use std::cell::RefCell;
use std::rc::Rc;

/// Binding is the write target for a declared option or flag: a shared,
/// interiorly-mutable cell which both the caller and the parsing engine hold
/// a handle to. The engine writes converted values into it during `parse`;
/// the caller reads the final value out afterwards with `get`.
///
/// Cloning a Binding clones the handle, not the value; all clones observe the
/// same storage. Bindings persist across `parse` calls, and re-parsing simply
/// overwrites whatever was bound before ("last write wins").
#[derive(Clone, Debug)]
pub struct Binding<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Binding<T> {
    /// Constructs a new Binding holding the given initial value. The initial
    /// value acts as the default: it is what `get` returns if no matching
    /// token ever assigns to this Binding.
    pub fn new(initial: T) -> Self {
        Binding {
            cell: Rc::new(RefCell::new(initial)),
        }
    }

    /// Overwrites the bound value.
    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }
}

impl<T: Clone> Binding<T> {
    /// Returns a copy of the currently bound value.
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Binding::new(T::default())
    }
}
