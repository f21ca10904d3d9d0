pub mod group_queries;
pub mod match_queries;
pub mod team_queries;
pub mod tournament_queries;

pub use group_queries::GroupQueries;
pub use match_queries::MatchQueries;
pub use team_queries::TeamQueries;
pub use tournament_queries::TournamentQueries;
