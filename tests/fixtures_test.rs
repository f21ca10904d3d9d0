// tests/fixtures_test.rs
mod common;

use std::collections::HashSet;

use common::init_tracing;
use uuid::Uuid;

use championship_backend::models::matches::MatchStatus;
use championship_backend::tournament::fixtures::{FixtureGenerator, GROUP_STAGE_MATCHDAY};

#[test]
fn eight_group_draw_yields_three_fixtures_per_group() {
    init_tracing();
    let tournament_id = Uuid::new_v4();
    let groups: Vec<(Uuid, Vec<Uuid>)> = (0..8)
        .map(|_| {
            (
                Uuid::new_v4(),
                (0..3).map(|_| Uuid::new_v4()).collect::<Vec<_>>(),
            )
        })
        .collect();

    let fixtures = FixtureGenerator::generate(tournament_id, &groups);

    assert_eq!(fixtures.len(), 8 * 3);
    for (group_id, _) in &groups {
        let in_group = fixtures.iter().filter(|f| f.group_id == *group_id).count();
        assert_eq!(in_group, FixtureGenerator::fixture_count(3));
    }
}

#[test]
fn every_pair_meets_exactly_once() {
    init_tracing();
    let group_id = Uuid::new_v4();
    let teams: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();

    let fixtures = FixtureGenerator::generate_for_group(Uuid::new_v4(), group_id, &teams);

    assert_eq!(fixtures.len(), 15);
    let mut pairs = HashSet::new();
    for fixture in &fixtures {
        let mut pair = [fixture.home_team_id, fixture.away_team_id];
        pair.sort();
        assert!(pairs.insert(pair), "pair drawn twice: {:?}", pair);
    }
}

#[test]
fn generated_fixtures_are_blank_scheduled_slates() {
    init_tracing();
    let teams: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();

    let fixtures = FixtureGenerator::generate_for_group(Uuid::new_v4(), Uuid::new_v4(), &teams);

    for fixture in &fixtures {
        assert_eq!(fixture.status, MatchStatus::Scheduled);
        assert_eq!(fixture.matchday, GROUP_STAGE_MATCHDAY);
    }
}

#[test]
fn earlier_draw_position_hosts() {
    init_tracing();
    let teams: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();

    let fixtures = FixtureGenerator::generate_for_group(Uuid::new_v4(), Uuid::new_v4(), &teams);

    let position = |id: Uuid| teams.iter().position(|t| *t == id).unwrap();
    for fixture in &fixtures {
        assert!(position(fixture.home_team_id) < position(fixture.away_team_id));
    }
}
