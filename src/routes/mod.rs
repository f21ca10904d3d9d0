use actix_web::web;

pub mod backend_health;
pub mod groups;
pub mod matches;
pub mod tournaments;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/tournaments")
            .service(tournaments::create_tournament)
            .service(tournaments::list_tournaments)
            .service(tournaments::get_tournament)
            .service(tournaments::update_tournament)
            .service(tournaments::complete_draw)
            .service(tournaments::run_draw),
    );

    cfg.service(web::scope("/groups").service(groups::get_group_standings));

    cfg.service(
        web::scope("/matches")
            .service(matches::list_matches)
            .service(matches::create_match)
            .service(matches::update_match),
    );
}
