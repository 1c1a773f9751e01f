// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Person, PersonId};
use std::collections::HashSet;

/// Validates that a person's basic field constraints are met.
///
/// Level, team and role are enforced by their types, so only the
/// free-form string fields need checking here. Uniqueness needs the
/// whole batch and is checked by [`validate_unique_ids`].
///
/// # Errors
///
/// Returns an error if:
/// - The person's id is blank
/// - The person's name is blank
pub fn validate_person(person: &Person) -> Result<(), DomainError> {
    if person.id.value().trim().is_empty() {
        return Err(DomainError::InvalidPersonId(String::from(
            "Person id cannot be empty",
        )));
    }

    if person.name.trim().is_empty() {
        return Err(DomainError::InvalidName(format!(
            "Name cannot be empty (person '{}')",
            person.id
        )));
    }

    Ok(())
}

/// Validates that no identifier appears twice in a batch of records.
///
/// Normalization tolerates duplicates (last write wins); this check exists
/// for callers that want to report them.
///
/// # Errors
///
/// Returns `DomainError::DuplicatePersonId` naming the first repeated id.
pub fn validate_unique_ids(people: &[Person]) -> Result<(), DomainError> {
    let mut seen: HashSet<&PersonId> = HashSet::with_capacity(people.len());
    for person in people {
        if !seen.insert(&person.id) {
            return Err(DomainError::DuplicatePersonId(
                person.id.value().to_string(),
            ));
        }
    }
    Ok(())
}
