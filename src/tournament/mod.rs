pub mod draw;
pub mod fixtures;
pub mod service;
pub mod standings;
pub mod validation;

pub use draw::{DrawSequence, GroupDraw};
pub use fixtures::FixtureGenerator;
pub use service::{TournamentService, TournamentServiceError};
pub use standings::{StandingsCalculator, StandingsError};
pub use validation::TournamentValidator;
