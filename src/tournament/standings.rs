use std::collections::HashMap;
use uuid::Uuid;

use crate::models::matches::Match;
use crate::models::standings::StandingRow;
use crate::models::team::Team;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StandingsError {
    #[error("Match {match_id} references team {team_id} outside the group")]
    UnknownTeamReference { match_id: Uuid, team_id: Uuid },
}

/// Computes a group's ranked table from its completed matches.
///
/// Pure function of its inputs: no side effects, no stored state, identical
/// output for identical input. Tie-break order is points, goal difference,
/// goals for; remaining ties keep input order. No head-to-head rule.
pub struct StandingsCalculator;

impl StandingsCalculator {
    /// Build the table for one group.
    ///
    /// `matches` must already be restricted to the group's COMPLETED matches.
    /// A match referencing a team outside `teams` is an error rather than
    /// being skipped, so a bad query cannot skew the table silently. An empty
    /// team set yields an empty table.
    pub fn compute(teams: &[Team], matches: &[Match]) -> Result<Vec<StandingRow>, StandingsError> {
        let mut rows: Vec<StandingRow> = teams.iter().map(StandingRow::zeroed).collect();
        let index: HashMap<Uuid, usize> = teams
            .iter()
            .enumerate()
            .map(|(position, team)| (team.id, position))
            .collect();

        for m in matches {
            // Matches without a full score pair carry no result yet.
            let (home_score, away_score) = match (m.home_score, m.away_score) {
                (Some(home), Some(away)) => (home, away),
                _ => continue,
            };

            let home = Self::row_index(&index, m.id, m.home_team_id)?;
            let away = Self::row_index(&index, m.id, m.away_team_id)?;

            rows[home].played += 1;
            rows[away].played += 1;

            rows[home].goals_for += home_score;
            rows[home].goals_against += away_score;
            rows[away].goals_for += away_score;
            rows[away].goals_against += home_score;

            if home_score > away_score {
                rows[home].won += 1;
                rows[home].points += 3;
                rows[away].lost += 1;
            } else if home_score < away_score {
                rows[away].won += 1;
                rows[away].points += 3;
                rows[home].lost += 1;
            } else {
                rows[home].drawn += 1;
                rows[away].drawn += 1;
                rows[home].points += 1;
                rows[away].points += 1;
            }
        }

        // Recomputed from the totals rather than accumulated per match.
        for row in rows.iter_mut() {
            row.goal_difference = row.goals_for - row.goals_against;
        }

        // sort_by is stable, so teams level on all three keys keep input order.
        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.goal_difference.cmp(&a.goal_difference))
                .then(b.goals_for.cmp(&a.goals_for))
        });

        Ok(rows)
    }

    fn row_index(
        index: &HashMap<Uuid, usize>,
        match_id: Uuid,
        team_id: Uuid,
    ) -> Result<usize, StandingsError> {
        index
            .get(&team_id)
            .copied()
            .ok_or(StandingsError::UnknownTeamReference { match_id, team_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::matches::MatchStatus;
    use chrono::Utc;

    fn team(name: &str) -> Team {
        Team {
            id: Uuid::new_v4(),
            tournament_id: Uuid::nil(),
            name: name.to_string(),
            pot: None,
            group_id: None,
            created_at: Utc::now(),
        }
    }

    fn completed(home: &Team, away: &Team, home_score: i32, away_score: i32) -> Match {
        Match {
            id: Uuid::new_v4(),
            tournament_id: Uuid::nil(),
            group_id: None,
            home_team_id: home.id,
            away_team_id: away.id,
            home_score: Some(home_score),
            away_score: Some(away_score),
            status: MatchStatus::Completed,
            matchday: Some(1),
            played_at: Some(Utc::now()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_team_set_yields_empty_table() {
        let table = StandingsCalculator::compute(&[], &[]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_single_result_with_bystander() {
        let a = team("A");
        let b = team("B");
        let c = team("C");
        let teams = vec![a.clone(), b.clone(), c.clone()];
        let matches = vec![completed(&a, &b, 3, 1)];

        let table = StandingsCalculator::compute(&teams, &matches).unwrap();

        assert_eq!(table[0].team, "A");
        assert_eq!(table[0].played, 1);
        assert_eq!(table[0].won, 1);
        assert_eq!(table[0].goals_for, 3);
        assert_eq!(table[0].goals_against, 1);
        assert_eq!(table[0].goal_difference, 2);
        assert_eq!(table[0].points, 3);

        // C has no results but a goal difference of 0, which outranks B's -2.
        assert_eq!(table[1].team, "C");
        assert_eq!(table[1].played, 0);
        assert_eq!(table[1].points, 0);

        assert_eq!(table[2].team, "B");
        assert_eq!(table[2].lost, 1);
        assert_eq!(table[2].goal_difference, -2);
        assert_eq!(table[2].points, 0);
    }

    #[test]
    fn test_goals_for_breaks_equal_goal_difference() {
        let a = team("A");
        let b = team("B");
        let c = team("C");
        let d = team("D");
        let teams = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        // A and C both win 1 game; A scores more in a wilder game.
        let matches = vec![completed(&a, &b, 4, 2), completed(&c, &d, 1, 0)];

        let table = StandingsCalculator::compute(&teams, &matches).unwrap();
        assert_eq!(table[0].team, "A");
        assert_eq!(table[1].team, "C");
        assert_eq!(table[0].goal_difference, table[1].goal_difference);
        assert!(table[0].goals_for > table[1].goals_for);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let a = team("A");
        let b = team("B");
        let teams = vec![a.clone(), b.clone()];
        let matches = vec![completed(&a, &b, 1, 1)];

        let table = StandingsCalculator::compute(&teams, &matches).unwrap();
        assert_eq!(table[0].team, "A");
        assert_eq!(table[1].team, "B");
        assert_eq!(table[0].points, 1);
        assert_eq!(table[1].points, 1);
    }

    #[test]
    fn test_points_total_matches_result_split() {
        let a = team("A");
        let b = team("B");
        let c = team("C");
        let teams = vec![a.clone(), b.clone(), c.clone()];
        let matches = vec![
            completed(&a, &b, 2, 0),
            completed(&b, &c, 1, 1),
            completed(&a, &c, 0, 3),
        ];

        let table = StandingsCalculator::compute(&teams, &matches).unwrap();
        let total_points: i32 = table.iter().map(|row| row.points).sum();
        // 2 decisive matches, 1 draw.
        assert_eq!(total_points, 3 * 2 + 2 * 1);

        for row in &table {
            assert_eq!(row.played, row.won + row.drawn + row.lost);
            assert_eq!(row.goal_difference, row.goals_for - row.goals_against);
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let a = team("A");
        let b = team("B");
        let c = team("C");
        let teams = vec![a.clone(), b.clone(), c.clone()];
        let matches = vec![completed(&a, &b, 2, 1), completed(&c, &a, 0, 0)];

        let first = StandingsCalculator::compute(&teams, &matches).unwrap();
        let second = StandingsCalculator::compute(&teams, &matches).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_order_does_not_change_table() {
        let a = team("A");
        let b = team("B");
        let c = team("C");
        let teams = vec![a.clone(), b.clone(), c.clone()];
        let mut matches = vec![
            completed(&a, &b, 2, 0),
            completed(&b, &c, 1, 1),
            completed(&a, &c, 0, 3),
        ];

        let forward = StandingsCalculator::compute(&teams, &matches).unwrap();
        matches.reverse();
        let backward = StandingsCalculator::compute(&teams, &matches).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_unknown_team_reference_is_rejected() {
        let a = team("A");
        let b = team("B");
        let outsider = team("X");
        let teams = vec![a.clone(), b.clone()];
        let matches = vec![completed(&a, &outsider, 1, 0)];

        let err = StandingsCalculator::compute(&teams, &matches).unwrap_err();
        assert_eq!(
            err,
            StandingsError::UnknownTeamReference {
                match_id: matches[0].id,
                team_id: outsider.id,
            }
        );
    }

    #[test]
    fn test_scoreless_match_is_skipped() {
        let a = team("A");
        let b = team("B");
        let teams = vec![a.clone(), b.clone()];
        let mut unscored = completed(&a, &b, 0, 0);
        unscored.home_score = None;
        unscored.away_score = None;

        let table = StandingsCalculator::compute(&teams, &[unscored]).unwrap();
        assert_eq!(table[0].played, 0);
        assert_eq!(table[1].played, 0);
    }
}
