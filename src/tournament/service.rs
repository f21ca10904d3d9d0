use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{GroupQueries, MatchQueries, TeamQueries, TournamentQueries};
use crate::models::draw::{
    CompleteDrawRequest, DrawEvent, DrawGroupEntry, DrawOutcome, DrawTeamEntry, RunDrawRequest,
    RunDrawResponse,
};
use crate::models::group::{GroupStandingsResponse, GroupWithTeams};
use crate::models::matches::{
    CreateMatchRequest, Match, MatchStatus, MatchUpdateRequest, MatchWithTeams,
};
use crate::models::standings::StandingRow;
use crate::models::tournament::{
    CreateTournamentRequest, Tournament, TournamentDetail, TournamentStatus,
    UpdateTournamentRequest,
};
use crate::tournament::draw::GroupDraw;
use crate::tournament::fixtures::FixtureGenerator;
use crate::tournament::standings::{StandingsCalculator, StandingsError};
use crate::tournament::validation::TournamentValidator;

#[derive(Debug, thiserror::Error)]
pub enum TournamentServiceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Standings(#[from] StandingsError),
}

/// Main tournament service orchestrating queries, the draw and the
/// pure computation cores
pub struct TournamentService {
    pool: PgPool,
    tournaments: TournamentQueries,
    groups: GroupQueries,
    teams: TeamQueries,
    matches: MatchQueries,
    validator: TournamentValidator,
}

impl TournamentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: pool.clone(),
            tournaments: TournamentQueries::new(pool.clone()),
            groups: GroupQueries::new(pool.clone()),
            teams: TeamQueries::new(pool.clone()),
            matches: MatchQueries::new(pool),
            validator: TournamentValidator::new(),
        }
    }

    pub async fn create_tournament(
        &self,
        request: CreateTournamentRequest,
    ) -> Result<Tournament, sqlx::Error> {
        self.validator.validate_name(&request.name)?;

        let tournament = self
            .tournaments
            .create(request.name.trim(), request.description.as_deref())
            .await?;

        tracing::info!("Created tournament '{}' ({})", tournament.name, tournament.id);
        Ok(tournament)
    }

    pub async fn update_tournament(
        &self,
        tournament_id: Uuid,
        request: UpdateTournamentRequest,
    ) -> Result<Option<Tournament>, sqlx::Error> {
        if let Some(name) = &request.name {
            self.validator.validate_name(name)?;
        }
        self.tournaments.update(tournament_id, &request).await
    }

    /// One tournament with its teams, groups and matches resolved.
    pub async fn get_tournament_detail(
        &self,
        tournament_id: Uuid,
    ) -> Result<Option<TournamentDetail>, sqlx::Error> {
        let tournament = match self.tournaments.find(tournament_id).await? {
            Some(tournament) => tournament,
            None => return Ok(None),
        };

        Ok(Some(self.assemble_detail(tournament).await?))
    }

    pub async fn list_tournament_details(&self) -> Result<Vec<TournamentDetail>, sqlx::Error> {
        let mut details = Vec::new();
        for tournament in self.tournaments.list().await? {
            details.push(self.assemble_detail(tournament).await?);
        }
        Ok(details)
    }

    async fn assemble_detail(
        &self,
        tournament: Tournament,
    ) -> Result<TournamentDetail, sqlx::Error> {
        let teams = self.teams.list_for_tournament(tournament.id).await?;
        let groups = self.groups.list_for_tournament(tournament.id).await?;
        let matches = self.matches.list_for_tournament(tournament.id).await?;

        let groups_with_teams = groups
            .into_iter()
            .map(|group| {
                let members = teams
                    .iter()
                    .filter(|team| team.group_id == Some(group.id))
                    .cloned()
                    .collect();
                GroupWithTeams { group, teams: members }
            })
            .collect();

        Ok(TournamentDetail {
            tournament,
            teams,
            groups: groups_with_teams,
            matches,
        })
    }

    /// Commit a finished draw: create the groups, create the teams with
    /// their assignments, generate every group's round-robin fixtures and
    /// move the tournament into its group phase. All in one transaction;
    /// racing draws resolve to whichever commit lands last.
    pub async fn complete_draw(
        &self,
        tournament_id: Uuid,
        request: CompleteDrawRequest,
    ) -> Result<DrawOutcome, sqlx::Error> {
        self.validator.validate_complete_draw(&request)?;

        if self.tournaments.find(tournament_id).await?.is_none() {
            return Err(sqlx::Error::RowNotFound);
        }

        let mut tx = self.pool.begin().await?;

        let mut created_groups = Vec::with_capacity(request.groups.len());
        for group in &request.groups {
            let created = self
                .groups
                .insert_tx(&mut tx, tournament_id, group.name.trim())
                .await?;
            created_groups.push(created);
        }

        // Draw order within each group is the request order.
        let mut members_per_group: Vec<Vec<Uuid>> = vec![Vec::new(); created_groups.len()];
        for team in &request.teams {
            let group_id = created_groups[team.group_index].id;
            let created = self
                .teams
                .insert_tx(&mut tx, tournament_id, team.name.trim(), Some(team.pot), Some(group_id))
                .await?;
            members_per_group[team.group_index].push(created.id);
        }

        let grouped: Vec<(Uuid, Vec<Uuid>)> = created_groups
            .iter()
            .map(|group| group.id)
            .zip(members_per_group)
            .collect();
        let fixtures = FixtureGenerator::generate(tournament_id, &grouped);
        for fixture in &fixtures {
            self.matches.insert_fixture_tx(&mut tx, fixture).await?;
        }

        self.tournaments
            .set_status_tx(&mut tx, tournament_id, TournamentStatus::GroupPhase)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Draw completed for tournament {}: {} groups, {} teams, {} fixtures",
            tournament_id,
            created_groups.len(),
            request.teams.len(),
            fixtures.len()
        );

        Ok(DrawOutcome {
            groups_created: created_groups.len(),
            teams_created: request.teams.len(),
            fixtures_created: fixtures.len(),
        })
    }

    /// Run the seeded draw server-side, then commit it through the same path
    /// as a client-supplied draw. The returned events let a display layer
    /// replay the reveal one team at a time.
    pub async fn run_draw(
        &self,
        tournament_id: Uuid,
        request: RunDrawRequest,
    ) -> Result<RunDrawResponse, sqlx::Error> {
        self.validator.validate_draw_pots(&request)?;

        let group_count = request.groups.len();
        let mut rng = rand::thread_rng();
        let events: Vec<DrawEvent> =
            GroupDraw::start(&request.pots, group_count, &mut rng).collect();

        let mut groups: Vec<Vec<String>> = vec![Vec::new(); group_count];
        for event in &events {
            groups[event.group_index].push(event.team.clone());
        }

        let completion = CompleteDrawRequest {
            teams: events
                .iter()
                .map(|event| DrawTeamEntry {
                    name: event.team.clone(),
                    pot: event.pot as i32,
                    group_index: event.group_index,
                })
                .collect(),
            groups: request
                .groups
                .iter()
                .map(|name| DrawGroupEntry { name: name.clone() })
                .collect(),
        };

        let outcome = self.complete_draw(tournament_id, completion).await?;

        Ok(RunDrawResponse { events, groups, outcome })
    }

    /// A group's table, recomputed in full from the current completed-match
    /// set on every call.
    pub async fn get_group_standings(
        &self,
        group_id: Uuid,
    ) -> Result<Option<GroupStandingsResponse>, TournamentServiceError> {
        let group = match self.groups.find(group_id).await? {
            Some(group) => group,
            None => return Ok(None),
        };

        let teams = self.teams.list_for_group(group_id).await?;
        let completed = self.matches.completed_for_group(group_id).await?;
        let standings = StandingsCalculator::compute(&teams, &completed)?;

        Ok(Some(GroupStandingsResponse { group, teams, standings }))
    }

    pub async fn create_match(&self, request: CreateMatchRequest) -> Result<Match, sqlx::Error> {
        self.validator
            .validate_match_teams(request.home_team_id, request.away_team_id)?;
        self.matches.create(&request).await
    }

    pub async fn list_matches(&self) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
        self.matches.list_with_teams().await
    }

    /// Apply a result/status update to one match. A transition to COMPLETED
    /// stamps the completion time and triggers a standings recompute for the
    /// match's group; there is no incremental update path.
    pub async fn update_match(
        &self,
        match_id: Uuid,
        request: MatchUpdateRequest,
    ) -> Result<Match, TournamentServiceError> {
        self.validator.validate_match_update(&request)?;

        let updated = self
            .matches
            .apply_update(match_id, &request)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        if updated.status == MatchStatus::Completed {
            if let Some(group_id) = updated.group_id {
                match self.recompute_group_table(group_id).await {
                    Ok(table) => {
                        if let Some(leader) = table.first() {
                            tracing::info!(
                                "Standings recomputed for group {}: {} leads with {} points",
                                group_id,
                                leader.team,
                                leader.points
                            );
                        }
                    }
                    Err(e) => {
                        tracing::error!(
                            "Standings recompute failed for group {} after match {}: {}",
                            group_id,
                            match_id,
                            e
                        );
                    }
                }
            }
        }

        Ok(updated)
    }

    async fn recompute_group_table(
        &self,
        group_id: Uuid,
    ) -> Result<Vec<StandingRow>, TournamentServiceError> {
        let teams = self.teams.list_for_group(group_id).await?;
        let completed = self.matches.completed_for_group(group_id).await?;
        Ok(StandingsCalculator::compute(&teams, &completed)?)
    }
}
