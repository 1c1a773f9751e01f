// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::roster::Roster;
use people_directory_domain::{SortMode, TeamFilter};

/// The view parameters chosen by the user.
///
/// Independent of the roster: loading new people never resets these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams {
    /// The selected team filter.
    pub selected_team: TeamFilter,
    /// Raw search text, as typed. Normalized only when matching.
    pub search: String,
    /// The ordering of the visible list.
    pub sort: SortMode,
    /// Whether inactive people are shown.
    pub show_inactive: bool,
}

impl ViewParams {
    /// Creates the initial view: all teams, no search, by name, inactive shown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_team: TeamFilter::All,
            search: String::new(),
            sort: SortMode::NameAsc,
            show_inactive: true,
        }
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete, immutable snapshot of the directory.
///
/// The roster and the view are orthogonal slices. Each command produces a
/// new snapshot; nothing is ever mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryState {
    /// The normalized roster.
    pub roster: Roster,
    /// The view parameters.
    pub view: ViewParams,
}

impl DirectoryState {
    /// Creates an empty directory with the initial view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this snapshot with `roster` swapped in.
    #[must_use]
    pub fn with_roster(&self, roster: Roster) -> Self {
        Self {
            roster,
            view: self.view.clone(),
        }
    }

    /// Returns a copy of this snapshot with `view` swapped in.
    #[must_use]
    pub fn with_view(&self, view: ViewParams) -> Self {
        Self {
            roster: self.roster.clone(),
            view,
        }
    }
}

/// The result of applying a command to a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The command produced a new snapshot.
    Changed(DirectoryState),
    /// The command changed nothing; the current snapshot stands.
    Unchanged,
}

impl Transition {
    /// Returns whether the command changed anything.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}
