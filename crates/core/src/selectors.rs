// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views over a snapshot.
//!
//! Each selector is a pure function of the snapshot and may be called any
//! number of times.

use crate::pipeline::{TeamGroup, apply_filters, apply_sort, group_by_team};
use crate::roster::denormalize;
use crate::state::DirectoryState;
use crate::stats::{TeamStatsTable, team_stats};
use people_directory_domain::{Person, PersonId};

/// Every person in the roster, in roster order.
#[must_use]
pub fn select_people(state: &DirectoryState) -> Vec<Person> {
    denormalize(&state.roster)
}

/// The people passing the current filters, in the current sort order.
#[must_use]
pub fn select_visible_people(state: &DirectoryState) -> Vec<Person> {
    let filtered: Vec<Person> = apply_filters(select_people(state), &state.view);
    apply_sort(filtered, state.view.sort)
}

/// The visible list split by team, covering every team.
#[must_use]
pub fn select_grouped_by_team(state: &DirectoryState) -> Vec<TeamGroup> {
    group_by_team(&select_visible_people(state))
}

/// Statistics for every team over the whole roster, ignoring the view.
#[must_use]
pub fn select_team_stats(state: &DirectoryState) -> TeamStatsTable {
    team_stats(state.roster.iter())
}

/// A single person by id.
#[must_use]
pub fn select_person<'a>(state: &'a DirectoryState, person_id: &PersonId) -> Option<&'a Person> {
    state.roster.get(person_id)
}
