// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DirectoryState, Roster, normalize};
use people_directory_domain::{Level, Person, PersonId, Role, Team};

pub fn level(value: u8) -> Level {
    Level::new(value).unwrap()
}

pub fn id(value: &str) -> PersonId {
    PersonId::new(value)
}

pub fn create_test_person(id: &str, name: &str, team: Team, role: Role, lvl: u8) -> Person {
    Person::new(id, name, team, role, level(lvl))
}

/// The six-person sample roster: two each on Platform, Product and Design,
/// nobody on Sales, and one inactive designer.
pub fn create_seed_people() -> Vec<Person> {
    vec![
        create_test_person("1", "Ava Chen", Team::Platform, Role::IndividualContributor, 3)
            .with_skills(&["react", "graphql"])
            .reporting_to("4"),
        create_test_person("2", "Noah Patel", Team::Product, Role::IndividualContributor, 2)
            .with_skills(&["ux", "research"])
            .reporting_to("5"),
        create_test_person("3", "Mia Gomez", Team::Design, Role::IndividualContributor, 4)
            .with_skills(&["figma", "design-systems"])
            .reporting_to("6")
            .with_active(false),
        create_test_person("4", "Liam Brooks", Team::Platform, Role::Manager, 5)
            .with_skills(&["leadership", "typescript"]),
        create_test_person("5", "Sophia Kim", Team::Product, Role::Manager, 5)
            .with_skills(&["strategy", "roadmaps"]),
        create_test_person("6", "Ethan Reed", Team::Design, Role::Director, 5)
            .with_skills(&["org-design", "hiring"]),
    ]
}

pub fn create_seed_roster() -> Roster {
    normalize(&create_seed_people())
}

pub fn create_seed_state() -> DirectoryState {
    DirectoryState::new().with_roster(create_seed_roster())
}

pub fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.name.as_str()).collect()
}
