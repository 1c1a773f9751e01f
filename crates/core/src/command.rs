// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use people_directory_domain::{Person, PersonId, SortMode, Team, TeamFilter};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select which team is shown.
    SetTeam {
        /// The new team filter.
        team: TeamFilter,
    },
    /// Replace the search text.
    SetSearch {
        /// The raw search text.
        search: String,
    },
    /// Choose how the visible list is ordered.
    SetSort {
        /// The new sort mode.
        sort: SortMode,
    },
    /// Flip whether inactive people are shown.
    ToggleShowInactive,
    /// Promote a person by one level.
    Promote {
        /// The person to promote.
        person_id: PersonId,
    },
    /// Move a person to another team.
    MoveToTeam {
        /// The person to move.
        person_id: PersonId,
        /// The destination team.
        team: Team,
    },
    /// Flip a person's active flag.
    ToggleActive {
        /// The person to toggle.
        person_id: PersonId,
    },
    /// Replace the whole roster with a freshly loaded batch.
    LoadRoster {
        /// The loaded records.
        people: Vec<Person>,
    },
}

impl Command {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetTeam { .. } => "SetTeam",
            Self::SetSearch { .. } => "SetSearch",
            Self::SetSort { .. } => "SetSort",
            Self::ToggleShowInactive => "ToggleShowInactive",
            Self::Promote { .. } => "Promote",
            Self::MoveToTeam { .. } => "MoveToTeam",
            Self::ToggleActive { .. } => "ToggleActive",
            Self::LoadRoster { .. } => "LoadRoster",
        }
    }
}
