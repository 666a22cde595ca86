use wellbeing_companion::database::init::{connect, ensure_schema};
use wellbeing_companion::database::kv::{flush, get_value, load_snapshot};
use wellbeing_companion::database::store::{KeyValueStore, MemoryStore};

#[tokio::test]
async fn snapshot_flush_round_trip() {
    let pool = connect("sqlite::memory:").await.unwrap();
    ensure_schema(&pool).await.unwrap();

    let mut store = load_snapshot(&pool, "lena").await.unwrap();
    assert!(store.is_empty());
    store.set("userExp", "10".to_string());
    store.set("hasVisitedProfile", "true".to_string());
    assert_eq!(flush(&pool, "lena", &mut store).await.unwrap(), 2);
    assert_eq!(flush(&pool, "lena", &mut store).await.unwrap(), 0);

    store.set("userExp", "60".to_string());
    store.remove("hasVisitedProfile");
    assert_eq!(flush(&pool, "lena", &mut store).await.unwrap(), 2);

    let reloaded = load_snapshot(&pool, "lena").await.unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get("userExp").as_deref(), Some("60"));
    assert_eq!(get_value(&pool, "lena", "hasVisitedProfile").await.unwrap(), None);
}

#[tokio::test]
async fn users_do_not_see_each_other() {
    let pool = connect("sqlite::memory:").await.unwrap();
    ensure_schema(&pool).await.unwrap();
    let mut a = load_snapshot(&pool, "a").await.unwrap();
    a.set("userExp", "25".to_string());
    flush(&pool, "a", &mut a).await.unwrap();

    assert!(load_snapshot(&pool, "b").await.unwrap().is_empty());
    assert_eq!(get_value(&pool, "a", "userExp").await.unwrap().as_deref(), Some("25"));
}

#[tokio::test]
async fn app_state_persists_what_commands_change() {
    use chrono::NaiveDate;
    use wellbeing_companion::handler::dispatch;
    use wellbeing_companion::{AppState, Config};

    let config = Config::from_lookup(|key| (key == "DATABASE_URL").then(|| "sqlite::memory:".to_string())).unwrap();
    let mut state = AppState::load(&config).await.unwrap();
    let now = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(8, 0, 0).unwrap();
    dispatch(&mut state.engine, "login", now);

    assert!(state.persist().await.unwrap() > 0);
    assert_eq!(
        get_value(&state.db, "local", "userExp").await.unwrap().as_deref(),
        Some("10")
    );
}

#[tokio::test]
async fn failed_flush_is_retried_in_full() {
    let pool = connect("sqlite::memory:").await.unwrap();
    let mut store = MemoryStore::new();
    store.set("userExp", "10".to_string());
    store.set("unlockedBadges", r#"{"first_login":true}"#.to_string());

    // No table yet, so the write fails.
    assert!(flush(&pool, "lena", &mut store).await.is_err());
    assert!(store.has_changes());

    ensure_schema(&pool).await.unwrap();
    assert_eq!(flush(&pool, "lena", &mut store).await.unwrap(), 2);
    assert!(!store.has_changes());
    assert_eq!(get_value(&pool, "lena", "userExp").await.unwrap().as_deref(), Some("10"));
    assert_eq!(
        get_value(&pool, "lena", "unlockedBadges").await.unwrap().as_deref(),
        Some(r#"{"first_login":true}"#)
    );
}

#[tokio::test]
async fn queued_notifications_survive_a_restart() {
    use chrono::NaiveDate;
    use wellbeing_companion::badges::catalog::FIRST_LOGIN;
    use wellbeing_companion::handler::dispatch;
    use wellbeing_companion::{AppState, Config};

    let path = std::env::temp_dir().join(format!("wellbeing-restart-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    let config = Config::from_lookup(|key| (key == "DATABASE_URL").then(|| url.clone())).unwrap();

    let mut state = AppState::load(&config).await.unwrap();
    let now = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(9, 0, 0).unwrap();
    dispatch(&mut state.engine, "login", now);
    assert_eq!(state.engine.pending_notifications().len(), 1);
    state.persist().await.unwrap();
    state.db.close().await;

    let mut restarted = AppState::load(&config).await.unwrap();
    let toast = restarted.engine.consume_notification().unwrap();
    assert_eq!(toast.badge_id, FIRST_LOGIN);
    assert_eq!(restarted.engine.consume_notification(), None);
    assert_eq!(restarted.engine.exp(), 10);
    restarted.db.close().await;
    let _ = std::fs::remove_file(&path);
}
