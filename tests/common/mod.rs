use chrono::Utc;
use once_cell::sync::Lazy;
use uuid::Uuid;

use championship_backend::models::matches::{Match, MatchStatus};
use championship_backend::models::team::Team;
use championship_backend::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    // Set TEST_LOG to see the bunyan output while debugging a test run.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber("test".into(), "debug".into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber("test".into(), "debug".into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn team(name: &str) -> Team {
    Team {
        id: Uuid::new_v4(),
        tournament_id: Uuid::nil(),
        name: name.to_string(),
        pot: None,
        group_id: None,
        created_at: Utc::now(),
    }
}

pub fn completed_match(home: &Team, away: &Team, home_score: i32, away_score: i32) -> Match {
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
