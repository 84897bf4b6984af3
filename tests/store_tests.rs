use salonbook::db::kv::{KeyValueStore, MemoryStore};
use salonbook::db::migrate::{current_version, latest_version};
use salonbook::db::pool::DbPool;
use salonbook::db::repository::{KEY_APPOINTMENTS, Repository};
use salonbook::models::{ExceptionDate, Service, ServiceCategory, ServiceIcon, WeekSchedule};

mod common;
use common::{appt, appt_for, d, sample_context};

fn service() -> Service {
    Service {
        id: "cut".into(),
        name: "Haircut".into(),
        icon: ServiceIcon::Scissors,
        duration_minutes: 45,
        price_eur: 25.0,
        category: ServiceCategory::Haircuts,
    }
}

#[test]
fn memory_store_get_set_remove() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "1").unwrap();
    store.set("k", "2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn sqlite_store_get_set_remove() {
    let mut pool = DbPool::in_memory().unwrap();
    assert_eq!(pool.get("k").unwrap(), None);

    pool.set("k", "[]").unwrap();
    pool.set("k", "[1]").unwrap();
    assert_eq!(pool.get("k").unwrap().as_deref(), Some("[1]"));

    pool.remove("k").unwrap();
    assert_eq!(pool.get("k").unwrap(), None);
}

#[test]
fn fresh_database_is_fully_migrated() {
    let pool = DbPool::in_memory().unwrap();
    assert_eq!(current_version(&pool.conn).unwrap(), latest_version());
}

#[test]
fn missing_keys_load_defaults() {
    let repo = Repository::new(MemoryStore::new());
    assert!(repo.appointments().unwrap().is_empty());
    assert!(repo.employees().unwrap().is_empty());
    assert_eq!(repo.week_schedule().unwrap(), WeekSchedule::default());
    assert!(!repo.week_schedule().unwrap().sunday.is_open);
}

#[test]
fn context_round_trips_through_both_stores() {
    let mut ctx = sample_context();
    ctx.services.push(service());
    ctx.exceptions.push(ExceptionDate::day_off(d("2025-12-25")));

    let mut memory = Repository::new(MemoryStore::new());
    memory.save_context(&ctx).unwrap();
    assert_eq!(memory.context().unwrap(), ctx);

    let mut sqlite = Repository::new(DbPool::in_memory().unwrap());
    sqlite.save_context(&ctx).unwrap();
    assert_eq!(sqlite.context().unwrap(), ctx);
}

#[test]
fn appointments_round_trip_and_use_the_wire_format() {
    let mut walk_in = appt("w1", "2025-03-03", "10:00", 45);
    walk_in.is_walk_in = true;
    walk_in.service_id = Some("cut".into());
    let booked = appt_for("b1", "e1", "2025-03-03", "11:00", 30);

    let mut repo = Repository::new(DbPool::in_memory().unwrap());
    repo.save_appointments(&[walk_in.clone(), booked.clone()]).unwrap();

    assert_eq!(repo.appointments().unwrap(), vec![walk_in, booked]);

    let raw = repo.store().get(KEY_APPOINTMENTS).unwrap().unwrap();
    assert!(raw.contains(r#""isWalkIn":true"#));
    assert!(raw.contains(r#""duration":"45""#));
    assert!(raw.contains(r#""time":"10:00""#));
    assert!(raw.contains(r#""stylist":"anyone""#));
    assert!(raw.contains(r#""stylist":"e1""#));
    assert!(raw.contains(r#""serviceId":"cut""#));
}

#[test]
fn numeric_durations_are_accepted_on_load() {
    let mut store = MemoryStore::new();
    store
        .set(
            KEY_APPOINTMENTS,
            r#"[{"id":"a","title":"T","stylist":"anyone","time":"09:00","duration":30,"date":"2025-03-03"}]"#,
        )
        .unwrap();
    let repo = Repository::new(store);
    let loaded = repo.appointments().unwrap();
    assert_eq!(loaded[0].duration, 30);
    assert!(!loaded[0].is_walk_in);
}

#[test]
fn corrupted_values_are_reported() {
    let mut store = MemoryStore::new();
    store.set(KEY_APPOINTMENTS, "not json").unwrap();
    let repo = Repository::new(store);
    assert!(repo.appointments().is_err());
}
