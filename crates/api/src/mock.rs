// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-process stand-in for the people service.

use crate::config::{FailureMode, SourceConfig};
use crate::error::{ApiResult, SourceError};
use crate::source::{PeopleSource, PersonPatch};
use async_trait::async_trait;
use people_directory_domain::{Person, PersonId};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// The sample roster served by [`MockPeopleService::seeded`].
const SEED_JSON: &str = include_str!("../data/seed.json");

/// Parses the bundled sample roster.
///
/// # Errors
///
/// Returns `ApiError::InvalidData` if the bundled data does not parse.
pub fn seed_people() -> ApiResult<Vec<Person>> {
    Ok(serde_json::from_str(SEED_JSON)?)
}

/// A mock people service holding its records in memory.
///
/// Every request waits for the configured delay, then consults the
/// failure mode. Updates are kept, so a later fetch sees them.
#[derive(Debug)]
pub struct MockPeopleService {
    config: SourceConfig,
    people: Mutex<Vec<Person>>,
    failure_mode: Mutex<FailureMode>,
}

impl MockPeopleService {
    /// Creates a service serving `people`.
    #[must_use]
    pub fn new(people: Vec<Person>, config: SourceConfig) -> Self {
        let failure_mode: FailureMode = config.failure_mode;
        Self {
            config,
            people: Mutex::new(people),
            failure_mode: Mutex::new(failure_mode),
        }
    }

    /// Creates a service serving the bundled sample roster.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidData` if the bundled data does not parse.
    pub fn seeded(config: SourceConfig) -> ApiResult<Self> {
        Ok(Self::new(seed_people()?, config))
    }

    /// Changes when requests fail, effective from the next request.
    pub async fn set_failure_mode(&self, mode: FailureMode) {
        *self.failure_mode.lock().await = mode;
    }

    /// Returns the current failure mode.
    pub async fn failure_mode(&self) -> FailureMode {
        *self.failure_mode.lock().await
    }

    /// Waits out the simulated latency, then decides whether to fail.
    async fn simulate_request(&self, operation: &'static str) -> Result<(), SourceError> {
        let delay = self.config.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let mut mode = self.failure_mode.lock().await;
        let fail: bool = match *mode {
            FailureMode::Never => false,
            FailureMode::Always => true,
            FailureMode::FailNext(0) => {
                *mode = FailureMode::Never;
                false
            }
            FailureMode::FailNext(remaining) => {
                *mode = if remaining == 1 {
                    FailureMode::Never
                } else {
                    FailureMode::FailNext(remaining - 1)
                };
                true
            }
        };
        drop(mode);

        if fail {
            warn!(operation, "Injected people service failure");
            return Err(SourceError::Unavailable {
                reason: format!("{operation} failed"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PeopleSource for MockPeopleService {
    async fn fetch_people(&self) -> Result<Vec<Person>, SourceError> {
        self.simulate_request("fetch_people").await?;
        let people: Vec<Person> = self.people.lock().await.clone();
        debug!(count = people.len(), "Serving people");
        Ok(people)
    }

    async fn update_person(
        &self,
        person_id: &PersonId,
        patch: PersonPatch,
    ) -> Result<Person, SourceError> {
        self.simulate_request("update_person").await?;
        let mut people = self.people.lock().await;
        let Some(slot) = people.iter_mut().find(|p| p.id == *person_id) else {
            return Err(SourceError::PersonNotFound(person_id.value().to_string()));
        };
        let updated: Person = patch.apply_to(slot.clone());
        slot.clone_from(&updated);
        debug!(person_id = %person_id, "Updated person");
        Ok(updated)
    }
}
