// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, ApiResult};
use crate::source::{PeopleSource, PersonPatch};
use people_directory::{Command, DirectoryState, DirectoryStore};
use people_directory_domain::{Person, PersonId, validate_person, validate_unique_ids};
use tracing::{info, warn};

/// Connects a [`DirectoryStore`] to a [`PeopleSource`].
///
/// The service is the only place that touches the asynchronous boundary.
/// A failed load leaves the last good roster in place; retrying means
/// calling [`DirectoryService::refresh`] again.
#[derive(Debug)]
pub struct DirectoryService<S> {
    store: DirectoryStore,
    source: S,
}

impl<S: PeopleSource> DirectoryService<S> {
    /// Creates a service with an empty store.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_store(source, DirectoryStore::new())
    }

    /// Creates a service around an existing store.
    #[must_use]
    pub const fn with_store(source: S, store: DirectoryStore) -> Self {
        Self { store, source }
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &DirectoryStore {
        &self.store
    }

    /// Returns the store for synchronous mutations.
    pub const fn store_mut(&mut self) -> &mut DirectoryStore {
        &mut self.store
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &DirectoryState {
        self.store.state()
    }

    /// Returns the source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Applies a command to the store, returning whether anything changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        self.store.dispatch(command)
    }

    /// Fetches the roster and replaces the store's roster with it.
    ///
    /// Returns the number of people now in the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails, leaving the store exactly as
    /// it was. Records with blank fields or repeated ids are still loaded.
    pub async fn refresh(&mut self) -> ApiResult<usize> {
        let people: Vec<Person> = match self.source.fetch_people().await {
            Ok(people) => people,
            Err(err) => {
                warn!(error = %err, "Failed to load roster");
                return Err(ApiError::Source(err));
            }
        };

        for person in &people {
            if let Err(err) = validate_person(person) {
                warn!(error = %err, "Loading a record with a blank field");
            }
        }
        if let Err(err) = validate_unique_ids(&people) {
            warn!(error = %err, "Duplicate ids in roster; keeping the last record for each");
        }

        self.store.load_roster(people);
        let count: usize = self.store.state().roster.len();
        info!(count, revision = self.store.revision(), "Roster refreshed");
        Ok(count)
    }

    /// Sends an update to the source, then reloads the roster.
    ///
    /// Returns the updated record as reported by the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the update or the reload fails. A failed update
    /// leaves the store untouched; a failed reload leaves the previous
    /// roster in place even though the source has already applied the
    /// update.
    pub async fn update_person(
        &mut self,
        person_id: &PersonId,
        patch: PersonPatch,
    ) -> ApiResult<Person> {
        let updated: Person = match self.source.update_person(person_id, patch).await {
            Ok(person) => person,
            Err(err) => {
                warn!(person_id = %person_id, error = %err, "Failed to update person");
                return Err(ApiError::Source(err));
            }
        };
        info!(person_id = %person_id, "Person updated at source");
        self.refresh().await?;
        Ok(updated)
    }
}
