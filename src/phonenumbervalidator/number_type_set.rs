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

use std::fmt;

use strum::IntoEnumIterator;

use super::NumberType;

/// A set of [`NumberType`] values stored as a bitset.
///
/// Membership is checked once per number type per country on every call,
/// so it must stay O(1).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NumberTypeSet {
    bits: u16,
}

impl NumberTypeSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Set holding every defined [`NumberType`].
    pub fn all() -> Self {
        NumberType::iter().collect()
    }

    const fn bit(number_type: NumberType) -> u16 {
        1 << (number_type as u16)
    }

    pub fn insert(&mut self, number_type: NumberType) -> bool {
        let was_present = self.contains(number_type);
        self.bits |= Self::bit(number_type);
        !was_present
    }

    pub fn remove(&mut self, number_type: NumberType) -> bool {
        let was_present = self.contains(number_type);
        self.bits &= !Self::bit(number_type);
        was_present
    }

    pub const fn contains(&self, number_type: NumberType) -> bool {
        self.bits & Self::bit(number_type) != 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates members in declaration order of [`NumberType`].
    pub fn iter(&self) -> impl Iterator<Item = NumberType> + '_ {
        NumberType::iter().filter(move |number_type| self.contains(*number_type))
    }
}

impl FromIterator<NumberType> for NumberTypeSet {
    fn from_iter<T: IntoIterator<Item = NumberType>>(iter: T) -> Self {
        let mut set = Self::empty();
        for number_type in iter {
            set.insert(number_type);
        }
        set
    }
}

impl<const N: usize> From<[NumberType; N]> for NumberTypeSet {
    fn from(types: [NumberType; N]) -> Self {
        types.into_iter().collect()
    }
}

impl fmt::Debug for NumberTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Every defined number type, for callers that only care about the country.
pub fn any_type() -> NumberTypeSet {
    NumberTypeSet::all()
}
