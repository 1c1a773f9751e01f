// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::state::{DirectoryState, Transition};
use people_directory_domain::{Person, PersonId, SortMode, Team, TeamFilter};
use tracing::{debug, info};

/// Owns the current directory snapshot.
///
/// A store is created explicitly and handed to whoever needs it; there is
/// no global instance. Every mutation goes through [`DirectoryStore::dispatch`],
/// which replaces the snapshot only when the command changed something and
/// bumps the revision in the same step. Consumers compare revisions to
/// decide whether to re-derive their views.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    state: DirectoryState,
    revision: u64,
}

impl DirectoryStore {
    /// Creates a store with an empty roster and the initial view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store starting from an existing snapshot.
    #[must_use]
    pub const fn with_state(state: DirectoryState) -> Self {
        Self { state, revision: 0 }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &DirectoryState {
        &self.state
    }

    /// Returns an owned copy of the current snapshot.
    ///
    /// The roster inside is shared, so this is cheap.
    #[must_use]
    pub fn snapshot(&self) -> DirectoryState {
        self.state.clone()
    }

    /// Returns how many changes have been applied since creation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a command, returning whether the snapshot changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let name: &'static str = command.name();
        match apply(&self.state, command) {
            Transition::Changed(state) => {
                self.state = state;
                self.revision += 1;
                debug!(command = name, revision = self.revision, "Applied command");
                true
            }
            Transition::Unchanged => {
                debug!(command = name, revision = self.revision, "Command changed nothing");
                false
            }
        }
    }

    /// Replaces the roster wholesale. The view is left alone.
    pub fn load_roster(&mut self, people: Vec<Person>) -> bool {
        let count: usize = people.len();
        let changed: bool = self.dispatch(Command::LoadRoster { people });
        info!(
            records = count,
            people = self.state.roster.len(),
            "Loaded roster"
        );
        changed
    }

    /// Selects which team is shown.
    pub fn set_selected_team(&mut self, team: TeamFilter) -> bool {
        self.dispatch(Command::SetTeam { team })
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, search: &str) -> bool {
        self.dispatch(Command::SetSearch {
            search: search.to_string(),
        })
    }

    /// Chooses how the visible list is ordered.
    pub fn set_sort(&mut self, sort: SortMode) -> bool {
        self.dispatch(Command::SetSort { sort })
    }

    /// Flips whether inactive people are shown.
    pub fn toggle_show_inactive(&mut self) -> bool {
        self.dispatch(Command::ToggleShowInactive)
    }

    /// Promotes a person. Unknown ids and top-level people are ignored.
    pub fn promote(&mut self, person_id: &PersonId) -> bool {
        self.dispatch(Command::Promote {
            person_id: person_id.clone(),
        })
    }

    /// Moves a person to `team`. Unknown ids and same-team moves are ignored.
    pub fn move_to_team(&mut self, person_id: &PersonId, team: Team) -> bool {
        self.dispatch(Command::MoveToTeam {
            person_id: person_id.clone(),
            team,
        })
    }

    /// Flips a person's active flag. Unknown ids are ignored.
    pub fn toggle_active(&mut self, person_id: &PersonId) -> bool {
        self.dispatch(Command::ToggleActive {
            person_id: person_id.clone(),
        })
    }
}
