// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The normalized roster: people keyed by identifier.

use indexmap::IndexMap;
use people_directory_domain::{Person, PersonId};
use std::sync::Arc;

/// The normalized mapping from person id to person.
///
/// A `Roster` is an immutable, shared snapshot. Cloning one is O(1) and
/// yields a handle to the *same* mapping, which [`Roster::same_as`] can
/// detect. Transitions that change nothing hand back such a clone;
/// transitions that change a record build a new mapping that still shares
/// every untouched record with the old one.
///
/// Iteration follows insertion order. That order is deterministic but
/// carries no meaning; sort before presenting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    people: Arc<IndexMap<PersonId, Arc<Person>>>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `other` is a handle to the very same mapping.
    ///
    /// This is the change-detection contract of the transition functions:
    /// a no-op transition returns a roster for which this is `true`.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.people, &other.people)
    }

    /// Looks up a person by id.
    #[must_use]
    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id).map(|person| &**person)
    }

    /// Returns whether a person with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// Returns the number of people in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns whether the roster holds nobody.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterates over all people in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.values().map(|person| &**person)
    }

    /// Iterates over all ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &PersonId> {
        self.people.keys()
    }

    /// Returns a new roster with `person` stored under its id.
    ///
    /// An existing entry keeps its position. Every other record is shared
    /// with `self`, not copied.
    #[must_use]
    pub(crate) fn with_person(&self, person: Person) -> Self {
        let mut people: IndexMap<PersonId, Arc<Person>> = (*self.people).clone();
        people.insert(person.id.clone(), Arc::new(person));
        Self {
            people: Arc::new(people),
        }
    }

    /// Returns whether `other` shares the stored record for `id` with `self`.
    #[must_use]
    pub fn shares_record(&self, other: &Self, id: &PersonId) -> bool {
        match (self.people.get(id), other.people.get(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Builds a fresh roster from an ordered batch of records.
///
/// Later records with a repeated id overwrite earlier ones (last write
/// wins) while keeping the slot of the first occurrence. Every record,
/// skills included, is copied, so the roster never aliases `people`.
#[must_use]
pub fn normalize(people: &[Person]) -> Roster {
    let mut map: IndexMap<PersonId, Arc<Person>> = IndexMap::with_capacity(people.len());
    for person in people {
        map.insert(person.id.clone(), Arc::new(person.clone()));
    }
    Roster {
        people: Arc::new(map),
    }
}

/// Returns every person in the roster.
///
/// The order is the roster's iteration order and is not guaranteed to
/// match whatever batch the roster was built from.
#[must_use]
pub fn denormalize(roster: &Roster) -> Vec<Person> {
    roster.iter().cloned().collect()
}
