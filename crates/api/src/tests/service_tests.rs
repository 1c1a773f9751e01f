// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, DirectoryService, FailureMode, MockPeopleService, PersonPatch, SourceConfig,
    SourceError,
};
use async_trait::async_trait;
use people_directory::{Command, DirectoryState, Roster, select_team_stats};
use people_directory_domain::{Level, Person, PersonId, Role, Team, TeamFilter};

fn create_test_service() -> DirectoryService<MockPeopleService> {
    DirectoryService::new(MockPeopleService::seeded(SourceConfig::immediate()).unwrap())
}

#[tokio::test]
async fn test_refresh_loads_roster() {
    let mut service: DirectoryService<MockPeopleService> = create_test_service();

    let count: usize = service.refresh().await.unwrap();

    assert_eq!(count, 6);
    assert_eq!(service.state().roster.len(), 6);
    assert_eq!(service.store().revision(), 1);
    assert_eq!(select_team_stats(service.state()).get(Team::Platform).total, 2);
}

#[tokio::test]
async fn test_failed_refresh_keeps_last_good_roster() {
    let mut service: DirectoryService<MockPeopleService> = create_test_service();
    service.refresh().await.unwrap();
    let before: DirectoryState = service.state().clone();

    service.source().set_failure_mode(FailureMode::Always).await;
    let result: Result<usize, ApiError> = service.refresh().await;

    assert!(matches!(
        result,
        Err(ApiError::Source(SourceError::Unavailable { .. }))
    ));
    assert!(service.state().roster.same_as(&before.roster));
    assert_eq!(service.store().revision(), 1);
}

#[tokio::test]
async fn test_failed_first_refresh_leaves_empty_roster() {
    let mut service: DirectoryService<MockPeopleService> = create_test_service();
    service
        .source()
        .set_failure_mode(FailureMode::FailNext(1))
        .await;

    assert!(service.refresh().await.is_err());
    assert!(service.state().roster.is_empty());

    // Retrying is just calling refresh again.
    assert_eq!(service.refresh().await.unwrap(), 6);
}

#[tokio::test]
async fn test_refresh_replaces_local_edits_but_keeps_view() {
    let mut service: DirectoryService<MockPeopleService> = create_test_service();
    service.refresh().await.unwrap();
    service.store_mut().toggle_active(&PersonId::new("1"));
    service.dispatch(Command::SetTeam {
        team: TeamFilter::Only(Team::Platform),
    });

    service.refresh().await.unwrap();

    let roster: &Roster = &service.state().roster;
    assert!(roster.get(&PersonId::new("1")).unwrap().is_active);
    assert_eq!(
        service.state().view.selected_team,
        TeamFilter::Only(Team::Platform)
    );
}

#[tokio::test]
async fn test_update_person_reloads_roster() {
    let mut service: DirectoryService<MockPeopleService> = create_test_service();
    service.refresh().await.unwrap();
    let patch: PersonPatch = PersonPatch {
        team: Some(Team::Sales),
        ..PersonPatch::default()
    };

    let updated: Person = service
        .update_person(&PersonId::new("1"), patch)
        .await
        .unwrap();

    assert_eq!(updated.team, Team::Sales);
    assert_eq!(
        service.state().roster.get(&PersonId::new("1")).unwrap().team,
        Team::Sales
    );
    assert_eq!(select_team_stats(service.state()).get(Team::Sales).total, 1);
}

#[tokio::test]
async fn test_update_unknown_person_leaves_store() {
    let mut service: DirectoryService<MockPeopleService> = create_test_service();
    service.refresh().await.unwrap();

    let result: Result<Person, ApiError> = service
        .update_person(&PersonId::new("99"), PersonPatch::default())
        .await;

    assert!(matches!(
        result,
        Err(ApiError::Source(SourceError::PersonNotFound(_)))
    ));
    assert_eq!(service.store().revision(), 1);
}

/// A source that delivers a fixed batch.
struct FixedSource {
    people: Vec<Person>,
}

#[async_trait]
impl crate::PeopleSource for FixedSource {
    async fn fetch_people(&self) -> Result<Vec<Person>, SourceError> {
        Ok(self.people.clone())
    }

    async fn update_person(
        &self,
        person_id: &PersonId,
        _patch: PersonPatch,
    ) -> Result<Person, SourceError> {
        Err(SourceError::PersonNotFound(person_id.value().to_string()))
    }
}

fn create_person(id: &str, name: &str) -> Person {
    Person::new(
        id,
        name,
        Team::Sales,
        Role::IndividualContributor,
        Level::new(2).unwrap(),
    )
}

#[tokio::test]
async fn test_blank_fields_do_not_block_loading() {
    let source: FixedSource = FixedSource {
        people: vec![
            create_person("1", "Zoe"),
            create_person("", "Anon"),
            create_person("2", "  "),
        ],
    };
    let mut service: DirectoryService<FixedSource> = DirectoryService::new(source);

    let count: usize = service.refresh().await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(service.store().revision(), 1);
    assert_eq!(
        service.state().roster.get(&PersonId::new("")).unwrap().name,
        "Anon"
    );
}

#[tokio::test]
async fn test_duplicate_ids_are_loaded_last_write_wins() {
    let source: FixedSource = FixedSource {
        people: vec![create_person("1", "Zoe"), create_person("1", "Zoe Park")],
    };
    let mut service: DirectoryService<FixedSource> = DirectoryService::new(source);

    assert_eq!(service.refresh().await.unwrap(), 1);
    assert_eq!(
        service.state().roster.get(&PersonId::new("1")).unwrap().name,
        "Zoe Park"
    );
}

#[test]
fn test_api_error_display() {
    let err: ApiError = ApiError::Source(SourceError::Unavailable {
        reason: String::from("fetch_people failed"),
    });
    assert_eq!(
        format!("{err}"),
        "People source unavailable: fetch_people failed"
    );

    let err: ApiError = ApiError::Source(SourceError::PersonNotFound(String::from("7")));
    assert_eq!(format!("{err}"), "Person with id '7' not found");
}
