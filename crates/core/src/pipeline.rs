// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The derivation pipeline: filter, sort and group the visible list.
//!
//! Stages run in a fixed order. Filters come first, sorting second, and
//! grouping last so that each team keeps the sorted order.

use crate::state::ViewParams;
use people_directory_domain::{Person, SortMode, Team, TeamFilter};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The members of one team within the visible list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamGroup {
    /// The team.
    pub team: Team,
    /// Matching members, in visible-list order. May be empty.
    pub members: Vec<Person>,
}

/// Normalizes raw search text for matching: trimmed and lower-cased.
#[must_use]
pub fn normalize_search(search: &str) -> String {
    search.trim().to_lowercase()
}

/// Keeps only people on the selected team. `All` passes everyone through.
#[must_use]
pub fn filter_by_team(people: Vec<Person>, filter: TeamFilter) -> Vec<Person> {
    match filter {
        TeamFilter::All => people,
        TeamFilter::Only(team) => people.into_iter().filter(|p| p.team == team).collect(),
    }
}

/// Keeps only people whose name or any skill contains the search text.
///
/// Matching is a case-insensitive substring test. Blank search text
/// passes everyone through.
#[must_use]
pub fn filter_by_search(people: Vec<Person>, search: &str) -> Vec<Person> {
    let term: String = normalize_search(search);
    if term.is_empty() {
        return people;
    }
    people
        .into_iter()
        .filter(|person| matches_search(person, &term))
        .collect()
}

/// Returns whether `person` matches an already normalized search term.
#[must_use]
pub fn matches_search(person: &Person, term: &str) -> bool {
    person.name.to_lowercase().contains(term)
        || person
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(term))
}

/// Drops inactive people unless `show_inactive` is set.
#[must_use]
pub fn filter_by_active(people: Vec<Person>, show_inactive: bool) -> Vec<Person> {
    if show_inactive {
        return people;
    }
    people.into_iter().filter(|p| p.is_active).collect()
}

/// Applies the team, search and active filters, in that order.
#[must_use]
pub fn apply_filters(people: Vec<Person>, view: &ViewParams) -> Vec<Person> {
    let people: Vec<Person> = filter_by_team(people, view.selected_team);
    let people: Vec<Person> = filter_by_search(people, &view.search);
    filter_by_active(people, view.show_inactive)
}

/// Reduces a name to its base letters: decomposed, accents dropped,
/// lower-cased.
fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compares two display names the way a dictionary orders them.
///
/// Base letters decide first, so "Émile" sorts with the E's. Among names
/// with the same base letters the unaccented spelling comes first, then
/// the lower-case one. The raw strings break any remaining tie, so the
/// order is total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(&fold_name(b))
        .then_with(|| {
            let a: String = a.nfd().collect::<String>().to_lowercase();
            let b: String = b.nfd().collect::<String>().to_lowercase();
            a.cmp(&b)
        })
        .then_with(|| b.cmp(a))
}

/// Sorts people according to `sort`.
///
/// `LevelDesc` breaks level ties by ascending name, so both modes give a
/// deterministic order for any input.
#[must_use]
pub fn apply_sort(mut people: Vec<Person>, sort: SortMode) -> Vec<Person> {
    match sort {
        SortMode::NameAsc => people.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::LevelDesc => people.sort_by(|a, b| {
            b.level
                .cmp(&a.level)
                .then_with(|| compare_names(&a.name, &b.name))
        }),
    }
    people
}

/// Splits a sorted list into one group per team.
///
/// Every team in [`Team::ALL`] gets an entry, in that order, whether or
/// not anybody matched. Within a group the input order is preserved.
#[must_use]
pub fn group_by_team(people: &[Person]) -> Vec<TeamGroup> {
    Team::ALL
        .into_iter()
        .map(|team| TeamGroup {
            team,
            members: people.iter().filter(|p| p.team == team).cloned().collect(),
        })
        .collect()
}
