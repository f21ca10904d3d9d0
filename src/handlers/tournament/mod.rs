pub mod draw_handler;
pub mod group_handler;
pub mod match_handler;
pub mod tournament_handler;
