//! Integration tests for the SQLite repositories, run against a real
//! temporary database with migrations applied.

use std::sync::Arc;

use chrono::NaiveDate;
use stride_core::badges::BadgeCatalogTrait;
use stride_core::events::NoOpEventSink;
use stride_core::goals::{GoalRepositoryTrait, GoalService, GoalServiceTrait, NewGoal};
use stride_core::settings::{SettingsRepositoryTrait, SettingsUpdate};
use stride_core::streaks::StreakService;
use stride_core::users::UserProgressRepositoryTrait;
use stride_storage_sqlite::badges::BadgeRepository;
use stride_storage_sqlite::goals::GoalRepository;
use stride_storage_sqlite::settings::SettingsRepository;
use stride_storage_sqlite::users::UserProgressRepository;
use stride_storage_sqlite::{init, spawn_writer, DbPool, WriteHandle};
use tempfile::TempDir;

struct TestDb {
    // Keeps the temp directory alive for the duration of the test.
    _dir: TempDir,
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

fn setup_db() -> TestDb {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("stride-test.db");
    let pool = init(db_path.to_str().unwrap()).expect("db init");
    let writer = spawn_writer(pool.clone());
    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_user_progress_round_trip() {
    let db = setup_db();
    let users = UserProgressRepository::new(db.pool.clone(), db.writer.clone());

    users.create_user("user-1", "Avery").await.unwrap();

    let progress = users.get_progress("user-1").unwrap();
    assert_eq!(progress.streak_count, 0);
    assert_eq!(progress.points, 0);
    assert!(progress.badge_ids.is_empty());

    users.save_counters("user-1", 3, 120).await.unwrap();
    users.award_badge("user-1", "badge-7day").await.unwrap();

    let progress = users.get_progress("user-1").unwrap();
    assert_eq!(progress.streak_count, 3);
    assert_eq!(progress.points, 120);
    assert_eq!(progress.badge_ids, vec!["badge-7day"]);
}

#[tokio::test]
async fn test_awarding_same_badge_twice_violates_unique_index() {
    let db = setup_db();
    let users = UserProgressRepository::new(db.pool.clone(), db.writer.clone());

    users.create_user("user-1", "Avery").await.unwrap();
    users.award_badge("user-1", "badge-7day").await.unwrap();

    let err = users.award_badge("user-1", "badge-7day").await.unwrap_err();
    assert!(
        err.to_string().contains("Unique constraint violation")
            || err.to_string().contains("UNIQUE"),
        "unexpected error: {}",
        err
    );
}

#[tokio::test]
async fn test_badge_catalog_is_seeded() {
    let db = setup_db();
    let catalog = BadgeRepository::new(db.pool.clone());

    let badge = catalog.resolve_badge("badge-7day").unwrap().unwrap();
    assert_eq!(badge.id, "badge-7day");
    assert_eq!(badge.name, "7-Day Streak");

    assert!(catalog.resolve_badge("badge-nonsense").unwrap().is_none());

    let all = catalog.list_badges().unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn test_goal_crud_and_completions() {
    let db = setup_db();
    let users = UserProgressRepository::new(db.pool.clone(), db.writer.clone());
    let goals = GoalRepository::new(db.pool.clone(), db.writer.clone());

    users.create_user("user-1", "Avery").await.unwrap();

    let goal = goals
        .insert_new_goal(NewGoal {
            id: None,
            user_id: "user-1".to_string(),
            title: "Meditate".to_string(),
            description: Some("10 minutes".to_string()),
        })
        .await
        .unwrap();

    assert!(!goal.id.is_empty());
    assert_eq!(goals.list_goals_for_user("user-1").unwrap().len(), 1);

    let today = day(2026, 3, 14);
    assert!(!goals.completion_exists(&goal.id, today).unwrap());

    goals.record_completion(&goal.id, today).await.unwrap();
    assert!(goals.completion_exists(&goal.id, today).unwrap());
    assert_eq!(goals.list_completions(&goal.id).unwrap().len(), 1);

    // Unique index is the backstop behind the service-level gate.
    let err = goals.record_completion(&goal.id, today).await.unwrap_err();
    assert!(
        err.to_string().contains("Unique constraint violation")
            || err.to_string().contains("UNIQUE"),
        "unexpected error: {}",
        err
    );

    let deleted = goals.delete_goal(goal.id.clone()).await.unwrap();
    assert_eq!(deleted, 1);
    assert!(goals.list_goals_for_user("user-1").unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_goal_honors_supplied_id() {
    let db = setup_db();
    let users = UserProgressRepository::new(db.pool.clone(), db.writer.clone());
    let goals = GoalRepository::new(db.pool.clone(), db.writer.clone());

    users.create_user("user-1", "Avery").await.unwrap();

    let goal = goals
        .insert_new_goal(NewGoal {
            id: Some("goal-imported".to_string()),
            user_id: "user-1".to_string(),
            title: "Journal".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(goal.id, "goal-imported");
    assert_eq!(goals.get_goal("goal-imported").unwrap().title, "Journal");
}

#[tokio::test]
async fn test_full_completion_flow_awards_seven_day_badge() {
    let db = setup_db();
    let users = Arc::new(UserProgressRepository::new(
        db.pool.clone(),
        db.writer.clone(),
    ));
    let catalog = Arc::new(BadgeRepository::new(db.pool.clone()));
    let goal_repo = Arc::new(GoalRepository::new(db.pool.clone(), db.writer.clone()));
    let events = Arc::new(NoOpEventSink);

    users.create_user("user-1", "Avery").await.unwrap();
    // Six qualifying days already behind them.
    users.save_counters("user-1", 6, 0).await.unwrap();

    let streaks = Arc::new(StreakService::new(
        users.clone(),
        catalog.clone(),
        events.clone(),
    ));
    let service = GoalService::new(goal_repo.clone(), streaks, events);

    let goal = service
        .create_goal(NewGoal {
            id: None,
            user_id: "user-1".to_string(),
            title: "Run 5k".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let receipt = service
        .complete_goal("user-1", &goal.id, day(2026, 3, 14))
        .await
        .unwrap();

    assert_eq!(receipt.new_streak, 7);
    assert_eq!(receipt.bonus_xp, 50);
    assert_eq!(
        receipt.badge_awarded.as_ref().map(|b| b.id.as_str()),
        Some("badge-7day")
    );

    let progress = users.get_progress("user-1").unwrap();
    assert_eq!(progress.streak_count, 7);
    assert_eq!(progress.points, 50);
    assert_eq!(progress.badge_ids, vec!["badge-7day"]);

    // Same goal, same day: the gate rejects before the engine runs.
    let err = service
        .complete_goal("user-1", &goal.id, day(2026, 3, 14))
        .await
        .unwrap_err();
    assert!(err.is_already_completed());
    assert_eq!(users.get_progress("user-1").unwrap().streak_count, 7);
}

#[tokio::test]
async fn test_settings_round_trip() {
    let db = setup_db();
    let settings_repo = SettingsRepository::new(db.pool.clone(), db.writer.clone());

    let defaults = settings_repo.get_settings().unwrap();
    assert_eq!(defaults.timezone, "UTC");
    assert!(defaults.reminders_enabled);

    settings_repo
        .update_settings(&SettingsUpdate {
            timezone: Some("America/New_York".to_string()),
            reminders_enabled: Some(false),
            onboarding_completed: Some(true),
        })
        .await
        .unwrap();

    let updated = settings_repo.get_settings().unwrap();
    assert_eq!(updated.timezone, "America/New_York");
    assert!(!updated.reminders_enabled);
    assert!(updated.onboarding_completed);
}
