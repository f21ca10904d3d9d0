use uuid::Uuid;

use crate::models::matches::{MatchStatus, NewFixture};

/// Every group-stage fixture is stamped with this matchday. Spreading a
/// group's round-robin over real matchdays (circle method) is not
/// implemented; a team can appear twice on the same matchday.
pub const GROUP_STAGE_MATCHDAY: i32 = 1;

/// Generates single round-robin fixtures per group.
///
/// Deterministic: the same grouped-teams input (including order) always
/// produces the same fixture list. Home/away falls out of draw position, not
/// a fairness rule.
pub struct FixtureGenerator;

impl FixtureGenerator {
    /// Generate fixtures for a sequence of (group, ordered teams) pairs.
    /// Groups never play across each other.
    pub fn generate(tournament_id: Uuid, groups: &[(Uuid, Vec<Uuid>)]) -> Vec<NewFixture> {
        groups
            .iter()
            .flat_map(|(group_id, team_ids)| {
                Self::generate_for_group(tournament_id, *group_id, team_ids)
            })
            .collect()
    }

    /// One match per unordered pair of distinct teams: n(n-1)/2 fixtures,
    /// earlier draw position at home. Fewer than 2 teams yields no fixtures.
    pub fn generate_for_group(
        tournament_id: Uuid,
        group_id: Uuid,
        team_ids: &[Uuid],
    ) -> Vec<NewFixture> {
        let mut fixtures = Vec::new();
        let team_count = team_ids.len();
        if team_count < 2 {
            return fixtures;
        }

        for i in 0..team_count {
            for j in (i + 1)..team_count {
                fixtures.push(NewFixture {
                    tournament_id,
                    group_id,
                    home_team_id: team_ids[i],
                    away_team_id: team_ids[j],
                    matchday: GROUP_STAGE_MATCHDAY,
                    status: MatchStatus::Scheduled,
                });
            }
        }

        fixtures
    }

    /// Number of fixtures a full single round-robin produces for a group.
    pub fn fixture_count(team_count: usize) -> usize {
        if team_count < 2 {
            return 0;
        }
        team_count * (team_count - 1) / 2
    }
}
