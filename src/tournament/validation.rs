use std::collections::HashSet;
use uuid::Uuid;

use crate::models::draw::{CompleteDrawRequest, RunDrawRequest};
use crate::models::matches::{MatchStatus, MatchUpdateRequest};

const MAX_NAME_LENGTH: usize = 255;
const MAX_REASONABLE_SCORE: i32 = 50;
const MIN_POT: i32 = 1;
const MAX_POT: i32 = 3;

/// Centralized validation for tournament operations
pub struct TournamentValidator;

impl TournamentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a display name (tournament, group or team)
    pub fn validate_name(&self, name: &str) -> Result<(), sqlx::Error> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(sqlx::Error::Protocol("Name cannot be empty".into()));
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(sqlx::Error::Protocol(
                format!("Name too long (maximum {} characters)", MAX_NAME_LENGTH).into(),
            ));
        }

        if trimmed.contains('\0') {
            return Err(sqlx::Error::Protocol("Name contains invalid characters".into()));
        }

        Ok(())
    }

    /// Validate the two sides of a fixture
    pub fn validate_match_teams(&self, home_team_id: Uuid, away_team_id: Uuid) -> Result<(), sqlx::Error> {
        if home_team_id.is_nil() || away_team_id.is_nil() {
            return Err(sqlx::Error::Protocol("Nil UUID not allowed for team ID".into()));
        }

        if home_team_id == away_team_id {
            return Err(sqlx::Error::Protocol(
                "A match needs two distinct teams".into(),
            ));
        }

        Ok(())
    }

    /// Validate a partial match update.
    /// Scores come as a pair or not at all, and only on a completed match.
    pub fn validate_match_update(&self, request: &MatchUpdateRequest) -> Result<(), sqlx::Error> {
        match (request.home_score, request.away_score) {
            (None, None) => {}
            (Some(home), Some(away)) => {
                self.validate_scores(home, away)?;
                if request.status != Some(MatchStatus::Completed) {
                    return Err(sqlx::Error::Protocol(
                        "Scores can only be set when the match is marked COMPLETED".into(),
                    ));
                }
            }
            _ => {
                return Err(sqlx::Error::Protocol(
                    "Home and away scores must be provided together".into(),
                ));
            }
        }

        if request.status == Some(MatchStatus::Completed) && request.home_score.is_none() {
            return Err(sqlx::Error::Protocol(
                "A COMPLETED match needs both scores".into(),
            ));
        }

        Ok(())
    }

    /// Validate a score pair
    pub fn validate_scores(&self, home_score: i32, away_score: i32) -> Result<(), sqlx::Error> {
        if home_score < 0 || away_score < 0 {
            return Err(sqlx::Error::Protocol(
                format!("Scores cannot be negative: {} - {}", home_score, away_score).into(),
            ));
        }

        if home_score > MAX_REASONABLE_SCORE || away_score > MAX_REASONABLE_SCORE {
            return Err(sqlx::Error::Protocol(
                format!(
                    "Score too high: {} - {} (max {})",
                    home_score, away_score, MAX_REASONABLE_SCORE
                )
                .into(),
            ));
        }

        Ok(())
    }

    /// Validate a finished draw before anything is written
    pub fn validate_complete_draw(&self, request: &CompleteDrawRequest) -> Result<(), sqlx::Error> {
        if request.groups.is_empty() {
            return Err(sqlx::Error::Protocol("At least one group required".into()));
        }

        let mut group_names = HashSet::new();
        for group in &request.groups {
            self.validate_name(&group.name)?;
            if !group_names.insert(group.name.trim()) {
                return Err(sqlx::Error::Protocol(
                    format!("Duplicate group name: {}", group.name).into(),
                ));
            }
        }

        if request.teams.is_empty() {
            return Err(sqlx::Error::Protocol("At least one team required".into()));
        }

        let mut team_names = HashSet::new();
        for team in &request.teams {
            self.validate_name(&team.name)?;
            if !team_names.insert(team.name.trim()) {
                return Err(sqlx::Error::Protocol(
                    format!("Duplicate team name: {}", team.name).into(),
                ));
            }

            if !(MIN_POT..=MAX_POT).contains(&team.pot) {
                return Err(sqlx::Error::Protocol(
                    format!("Pot {} for team {} out of range", team.pot, team.name).into(),
                ));
            }

            // The original client dropped teams with a bad index on the floor;
            // reject instead so no team silently ends up groupless.
            if team.group_index >= request.groups.len() {
                return Err(sqlx::Error::Protocol(
                    format!(
                        "Team {} assigned to group index {} but only {} groups exist",
                        team.name,
                        team.group_index,
                        request.groups.len()
                    )
                    .into(),
                ));
            }
        }

        Ok(())
    }

    /// Validate pots for a server-side draw: every pot must hold exactly one
    /// team per group so the round-robin assignment fills each group evenly.
    pub fn validate_draw_pots(&self, request: &RunDrawRequest) -> Result<(), sqlx::Error> {
        let group_count = request.groups.len();
        if group_count < 2 {
            return Err(sqlx::Error::Protocol("At least two groups required".into()));
        }

        for group_name in &request.groups {
            self.validate_name(group_name)?;
        }

        if request.pots.is_empty() {
            return Err(sqlx::Error::Protocol("At least one pot required".into()));
        }

        if request.pots.len() > MAX_POT as usize {
            return Err(sqlx::Error::Protocol(
                format!("At most {} pots supported, got {}", MAX_POT, request.pots.len()).into(),
            ));
        }

        let mut seen = HashSet::new();
        for (pot_number, pot) in request.pots.iter().enumerate() {
            if pot.len() != group_count {
                return Err(sqlx::Error::Protocol(
                    format!(
                        "Pot {} holds {} teams but there are {} groups",
                        pot_number + 1,
                        pot.len(),
                        group_count
                    )
                    .into(),
                ));
            }
            for name in pot {
                self.validate_name(name)?;
                if !seen.insert(name.trim()) {
                    return Err(sqlx::Error::Protocol(
                        format!("Duplicate team name across pots: {}", name).into(),
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Default for TournamentValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draw::{DrawGroupEntry, DrawTeamEntry};

    fn draw_request() -> CompleteDrawRequest {
        CompleteDrawRequest {
            teams: vec![
                DrawTeamEntry { name: "Alpha".into(), pot: 1, group_index: 0 },
                DrawTeamEntry { name: "Beta".into(), pot: 2, group_index: 1 },
            ],
            groups: vec![
                DrawGroupEntry { name: "Group A".into() },
                DrawGroupEntry { name: "Group B".into() },
            ],
        }
    }

    #[test]
    fn test_names_are_checked() {
        let validator = TournamentValidator::new();
        assert!(validator.validate_name("Group A").is_ok());
        assert!(validator.validate_name("   ").is_err());
        assert!(validator.validate_name(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_match_teams_must_differ() {
        let validator = TournamentValidator::new();
        let id = Uuid::new_v4();
        assert!(validator.validate_match_teams(id, Uuid::new_v4()).is_ok());
        assert!(validator.validate_match_teams(id, id).is_err());
        assert!(validator.validate_match_teams(Uuid::nil(), id).is_err());
    }

    #[test]
    fn test_one_sided_score_is_rejected() {
        let validator = TournamentValidator::new();
        let request = MatchUpdateRequest {
            home_score: Some(2),
            away_score: None,
            status: Some(MatchStatus::Completed),
        };
        assert!(validator.validate_match_update(&request).is_err());
    }

    #[test]
    fn test_scores_require_completed_status() {
        let validator = TournamentValidator::new();
        let request = MatchUpdateRequest {
            home_score: Some(2),
            away_score: Some(1),
            status: Some(MatchStatus::Live),
        };
        assert!(validator.validate_match_update(&request).is_err());

        let completed = MatchUpdateRequest {
            home_score: Some(2),
            away_score: Some(1),
            status: Some(MatchStatus::Completed),
        };
        assert!(validator.validate_match_update(&completed).is_ok());
    }

    #[test]
    fn test_completed_without_scores_is_rejected() {
        let validator = TournamentValidator::new();
        let request = MatchUpdateRequest {
            home_score: None,
            away_score: None,
            status: Some(MatchStatus::Completed),
        };
        assert!(validator.validate_match_update(&request).is_err());
    }

    #[test]
    fn test_status_only_update_is_allowed() {
        let validator = TournamentValidator::new();
        let request = MatchUpdateRequest {
            home_score: None,
            away_score: None,
            status: Some(MatchStatus::Postponed),
        };
        assert!(validator.validate_match_update(&request).is_ok());
    }

    #[test]
    fn test_negative_and_absurd_scores() {
        let validator = TournamentValidator::new();
        assert!(validator.validate_scores(-1, 0).is_err());
        assert!(validator.validate_scores(0, 51).is_err());
        assert!(validator.validate_scores(3, 1).is_ok());
    }

    #[test]
    fn test_complete_draw_accepts_well_formed_request() {
        let validator = TournamentValidator::new();
        assert!(validator.validate_complete_draw(&draw_request()).is_ok());
    }

    #[test]
    fn test_out_of_range_group_index_is_rejected() {
        let validator = TournamentValidator::new();
        let mut request = draw_request();
        request.teams[1].group_index = 5;
        assert!(validator.validate_complete_draw(&request).is_err());
    }

    #[test]
    fn test_pot_out_of_range_is_rejected() {
        let validator = TournamentValidator::new();
        let mut request = draw_request();
        request.teams[0].pot = 4;
        assert!(validator.validate_complete_draw(&request).is_err());
    }

    #[test]
    fn test_pot_size_must_match_group_count() {
        let validator = TournamentValidator::new();
        let request = RunDrawRequest {
            pots: vec![vec!["A".into(), "B".into(), "C".into()]],
            groups: vec!["Group A".into(), "Group B".into()],
        };
        assert!(validator.validate_draw_pots(&request).is_err());

        let balanced = RunDrawRequest {
            pots: vec![vec!["A".into(), "B".into()]],
            groups: vec!["Group A".into(), "Group B".into()],
        };
        assert!(validator.validate_draw_pots(&balanced).is_ok());
    }
}
