// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-team aggregate statistics.

use people_directory_domain::{Person, Team};

/// Aggregate figures for a single team.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TeamStats {
    /// Number of people on the team.
    pub total: usize,
    /// Number of active people on the team.
    pub active: usize,
    /// Number of managers and directors on the team.
    pub managers: usize,
    /// Mean level, rounded to one decimal place. Zero for an empty team.
    pub avg_level: f64,
}

/// Statistics for every team, in the fixed team order.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStatsTable {
    entries: [(Team, TeamStats); 4],
}

impl TeamStatsTable {
    /// Returns the statistics for `team`.
    #[must_use]
    pub fn get(&self, team: Team) -> TeamStats {
        self.entries
            .iter()
            .find(|(t, _)| *t == team)
            .map(|(_, stats)| *stats)
            .unwrap_or_default()
    }

    /// Iterates over `(team, stats)` pairs in the fixed team order.
    pub fn iter(&self) -> impl Iterator<Item = (Team, TeamStats)> + '_ {
        self.entries.iter().copied()
    }
}

/// Returns the mean level of `people`, or 0 when there is nobody.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_level(people: &[&Person]) -> f64 {
    if people.is_empty() {
        return 0.0;
    }
    let total: u32 = people.iter().map(|p| u32::from(p.level.value())).sum();
    f64::from(total) / people.len() as f64
}

/// Rounds to one decimal place, halves away from zero.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes statistics for every team from the whole roster.
///
/// Callers pass the full, unfiltered roster: these figures describe the
/// organisation, not the current view.
#[must_use]
pub fn team_stats<'a, I>(people: I) -> TeamStatsTable
where
    I: IntoIterator<Item = &'a Person>,
{
    let people: Vec<&Person> = people.into_iter().collect();
    let entries: [(Team, TeamStats); 4] = Team::ALL.map(|team| {
        let members: Vec<&Person> = people.iter().copied().filter(|p| p.team == team).collect();
        let stats: TeamStats = TeamStats {
            total: members.len(),
            active: members.iter().filter(|p| p.is_active).count(),
            managers: members.iter().filter(|p| p.role.is_manager()).count(),
            avg_level: round_one_decimal(average_level(&members)),
        };
        (team, stats)
    });
    TeamStatsTable { entries }
}
