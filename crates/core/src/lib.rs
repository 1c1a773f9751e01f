// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod pipeline;
mod reports;
mod roster;
mod selectors;
mod state;
mod stats;
mod store;
mod transitions;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use pipeline::{
    TeamGroup, apply_filters, apply_sort, compare_names, filter_by_active, filter_by_search,
    filter_by_team, group_by_team, matches_search, normalize_search,
};
pub use reports::{direct_reports, resolve_manager};
pub use roster::{Roster, denormalize, normalize};
pub use selectors::{
    select_grouped_by_team, select_people, select_person, select_team_stats,
    select_visible_people,
};
pub use state::{DirectoryState, Transition, ViewParams};
pub use stats::{TeamStats, TeamStatsTable, average_level, team_stats};
pub use store::DirectoryStore;
pub use transitions::{move_to_team, promote, toggle_active};
