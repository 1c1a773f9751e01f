// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The asynchronous source of people records.

use crate::error::SourceError;
use async_trait::async_trait;
use people_directory_domain::{Level, Person, PersonId, Role, Team};
use serde::{Deserialize, Serialize};

/// An external collaborator that delivers the roster.
///
/// Delivery is all or nothing: a fetch yields the full collection or an
/// error, never a partial batch. Timeouts, cancellation and superseding of
/// in-flight requests are the implementor's business.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    /// Fetches every person.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` when the source cannot deliver.
    async fn fetch_people(&self) -> Result<Vec<Person>, SourceError>;

    /// Applies `patch` to the stored record for `person_id` and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::PersonNotFound` for an unknown id, or
    /// `SourceError::Unavailable` when the source cannot be reached.
    async fn update_person(
        &self,
        person_id: &PersonId,
        patch: PersonPatch,
    ) -> Result<Person, SourceError>;
}

/// A partial update to a person. Unset fields are left as they are.
///
/// The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPatch {
    /// New display name.
    pub name: Option<String>,
    /// New team.
    pub team: Option<Team>,
    /// New role.
    pub role: Option<Role>,
    /// New level.
    pub level: Option<Level>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New skill list.
    pub skills: Option<Vec<String>>,
    /// New manager reference. `Some(None)` clears it.
    #[serde(
        default,
        with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub reports_to_id: Option<Option<PersonId>>,
}

impl PersonPatch {
    /// Returns `person` with every set field of this patch applied.
    #[must_use]
    pub fn apply_to(self, person: Person) -> Person {
        Person {
            id: person.id,
            name: self.name.unwrap_or(person.name),
            team: self.team.unwrap_or(person.team),
            role: self.role.unwrap_or(person.role),
            level: self.level.unwrap_or(person.level),
            is_active: self.is_active.unwrap_or(person.is_active),
            skills: self.skills.unwrap_or(person.skills),
            reports_to_id: self.reports_to_id.unwrap_or(person.reports_to_id),
        }
    }

    /// Returns whether the patch sets nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Distinguishes an absent field from an explicit `null`.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
