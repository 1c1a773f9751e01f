// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reporting-line lookups.
//!
//! `reports_to_id` is a plain identifier, resolved against the roster on
//! demand. A dangling reference resolves to nobody.

use crate::pipeline::compare_names;
use crate::roster::Roster;
use people_directory_domain::{Person, PersonId};

/// Returns the person `person` reports to, if they are in the roster.
#[must_use]
pub fn resolve_manager<'a>(roster: &'a Roster, person: &Person) -> Option<&'a Person> {
    person
        .reports_to_id
        .as_ref()
        .and_then(|manager_id| roster.get(manager_id))
}

/// Returns everyone whose manager reference is `manager_id`, by name.
///
/// The manager need not exist in the roster.
#[must_use]
pub fn direct_reports(roster: &Roster, manager_id: &PersonId) -> Vec<Person> {
    let mut reports: Vec<Person> = roster
        .iter()
        .filter(|p| p.reports_to_id.as_ref() == Some(manager_id))
        .cloned()
        .collect();
    reports.sort_by(|a, b| compare_names(&a.name, &b.name));
    reports
}
