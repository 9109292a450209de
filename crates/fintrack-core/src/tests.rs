use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    seed::initial_transactions,
    session::UserSession,
    storage::{load_user_data, save_user_data, user_data_key, KeyValueStorage, MemoryStorage},
    time::FixedClock,
    CoreError, ScheduleStatus,
};
use fintrack_domain::{
    Category, NewTransaction, ScheduleDraft, TransactionKind, UserData, UserProfile,
    SALARY_MARKER,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn clock(y: i32, m: u32, d: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock::new(date(y, m, d)))
}

fn salaried_profile(name: &str, amount: f64, day: u32) -> UserProfile {
    let mut profile = UserProfile::new(name);
    profile.monthly_salary = Some(amount);
    profile.salary_day = Some(day);
    profile
}

fn rent_draft(day: u32) -> ScheduleDraft {
    ScheduleDraft {
        description: "Rent".into(),
        amount: 900.0,
        kind: TransactionKind::Expense,
        category: Category::Rent,
        day_of_month: day,
    }
}

#[test]
fn open_seeds_and_persists_new_users() {
    let storage = Arc::new(MemoryStorage::new());

    let session = UserSession::open(storage.clone(), clock(2024, 6, 10), "alice").expect("open");

    assert!(session.open_report().seeded);
    assert_eq!(session.open_report().created, 0);
    assert_eq!(session.transactions(), initial_transactions().as_slice());
    assert_eq!(session.goals().len(), 2);
    assert_eq!(session.profile().name, "alice");
    assert!(storage
        .get(&user_data_key("alice"))
        .expect("get")
        .is_some());
}

#[test]
fn open_rejects_blank_user() {
    let storage = Arc::new(MemoryStorage::new());
    let err = UserSession::open(storage, clock(2024, 6, 10), "   ").err();
    assert!(matches!(err, Some(CoreError::Validation(_))));
}

#[test]
fn open_materializes_due_salary_once() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    save_user_data(
        storage.as_ref(),
        "bob",
        &UserData::empty(salaried_profile("bob", 3000.0, 5)),
    )
    .expect("save");

    let session = UserSession::open(storage.clone(), clock(2024, 6, 10), "bob").expect("open");
    assert_eq!(session.open_report().created, 1);
    let credit = &session.transactions()[0];
    assert_eq!(credit.description, SALARY_MARKER);
    assert_eq!(credit.date, date(2024, 6, 10));
    assert_eq!(
        session.profile().last_auto_update,
        Some(date(2024, 6, 10))
    );

    let reopened = UserSession::open(storage.clone(), clock(2024, 6, 20), "bob").expect("reopen");
    assert_eq!(reopened.open_report().created, 0);
    assert_eq!(reopened.transactions().len(), 1);

    let stored = load_user_data(storage.as_ref(), "bob")
        .expect("load")
        .expect("present");
    assert_eq!(stored.transactions.len(), 1);
}

#[test]
fn salary_waits_for_its_day() {
    let storage = Arc::new(MemoryStorage::new());
    let mut session =
        UserSession::register(storage, clock(2024, 6, 3), "carol", UserProfile::new("carol"))
            .expect("register");

    let created = session.set_salary(2500.0, Some(15)).expect("salary");

    assert_eq!(created, 0);
    assert!(session.transactions().is_empty());
    assert_eq!(session.profile().monthly_salary, Some(2500.0));
    assert_eq!(session.profile().salary_day, Some(15));
}

#[test]
fn register_refuses_existing_user() {
    let storage = Arc::new(MemoryStorage::new());
    UserSession::register(storage.clone(), clock(2024, 6, 3), "dave", UserProfile::new("dave"))
        .expect("first register");

    let err = UserSession::register(storage, clock(2024, 6, 3), "dave", UserProfile::new("dave"))
        .err();
    assert!(matches!(err, Some(CoreError::InvalidOperation(_))));
}

#[test]
fn adding_a_past_due_recurring_item_materializes_it_immediately() {
    let storage = Arc::new(MemoryStorage::new());
    let mut session =
        UserSession::register(storage, clock(2024, 6, 12), "erin", UserProfile::new("erin"))
            .expect("register");

    let (id, created) = session.add_recurring(rent_draft(1)).expect("add recurring");

    assert_eq!(created, 1);
    assert_eq!(session.transactions()[0].description, "Rent (Auto)");
    assert_eq!(session.transactions()[0].amount, 900.0);
    assert!(session.transactions()[0].id.starts_with(&format!("auto-{id}-")));

    let snapshots = session.schedule_snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].status, ScheduleStatus::Materialized);
}

#[test]
fn removing_a_recurring_item_keeps_history() {
    let storage = Arc::new(MemoryStorage::new());
    let mut session =
        UserSession::register(storage, clock(2024, 6, 12), "finn", UserProfile::new("finn"))
            .expect("register");
    let (id, _) = session.add_recurring(rent_draft(1)).expect("add");

    let removed = session.remove_recurring(&id).expect("remove");
    assert_eq!(removed.description, "Rent");

    assert!(session.profile().recurring_transactions.is_empty());
    assert_eq!(session.transactions().len(), 1);
    assert!(matches!(
        session.remove_recurring(&id),
        Err(CoreError::ScheduleNotFound(_))
    ));
}

#[test]
fn transactions_goals_and_budgets_write_through() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let mut session =
        UserSession::register(storage.clone(), clock(2024, 6, 12), "gina", UserProfile::new("gina"))
            .expect("register");

    let txn_id = session
        .add_transaction(NewTransaction {
            amount: 12.5,
            kind: TransactionKind::Expense,
            category: Category::Food,
            description: "Lunch".into(),
            date: date(2024, 6, 11),
        })
        .expect("add transaction");
    let goal_id = session.add_goal("Bike", 800.0).expect("add goal");
    session.update_goal_amount(&goal_id, 200.0).expect("fund goal");
    session.set_budget(Category::Food, 300.0).expect("budget");

    let stored = load_user_data(storage.as_ref(), "gina")
        .expect("load")
        .expect("present");
    assert!(stored.transaction(&txn_id).is_some());
    assert_eq!(stored.goal(&goal_id).map(|g| g.current_amount), Some(200.0));
    assert_eq!(stored.budgets.get(&Category::Food), Some(&300.0));

    session.delete_transaction(&txn_id).expect("delete");
    session.remove_goal(&goal_id).expect("remove goal");
    assert!(session.remove_budget(Category::Food).expect("remove budget"));
    assert!(!session.remove_budget(Category::Food).expect("remove budget again"));

    let stored = load_user_data(storage.as_ref(), "gina")
        .expect("load")
        .expect("present");
    assert!(stored.transactions.is_empty());
    assert!(stored.saving_goals.is_empty());
    assert!(stored.budgets.is_empty());
}

#[test]
fn delete_account_removes_document() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let session = UserSession::open(storage.clone(), clock(2024, 6, 12), "hank").expect("open");
    assert!(UserSession::exists(storage.as_ref(), "hank").expect("exists"));

    session.delete_account().expect("delete account");

    assert!(!UserSession::exists(storage.as_ref(), "hank").expect("exists"));
}

#[test]
fn reconcile_picks_up_a_new_month() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    save_user_data(
        storage.as_ref(),
        "ivy",
        &UserData::empty(salaried_profile("ivy", 1000.0, 1)),
    )
    .expect("save");
    UserSession::open(storage.clone(), clock(2024, 6, 30), "ivy").expect("june");

    let mut july = UserSession::open(storage.clone(), clock(2024, 7, 1), "ivy").expect("july");
    assert_eq!(july.open_report().created, 1);
    assert_eq!(july.transactions().len(), 2);
    assert_eq!(july.reconcile().expect("reconcile"), 0);
}

#[test]
fn disabling_salary_keeps_booked_credits() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    save_user_data(
        storage.as_ref(),
        "jo",
        &UserData::empty(salaried_profile("jo", 2000.0, 1)),
    )
    .expect("save");
    let mut june = UserSession::open(storage.clone(), clock(2024, 6, 5), "jo").expect("june");
    assert_eq!(june.open_report().created, 1);

    assert_eq!(june.set_salary(0.0, None).expect("disable"), 0);
    assert_eq!(june.profile().monthly_salary, None);
    assert_eq!(june.transactions().len(), 1);
    assert_eq!(june.transactions()[0].description, SALARY_MARKER);

    let mut july = UserSession::open(storage.clone(), clock(2024, 7, 2), "jo").expect("july");
    assert_eq!(july.open_report().created, 0);
    assert_eq!(july.reconcile().expect("reconcile"), 0);
    let credits = july
        .transactions()
        .iter()
        .filter(|txn| txn.description == SALARY_MARKER)
        .count();
    assert_eq!(credits, 1);
}

#[test]
fn unreadable_rows_do_not_block_reconciliation() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let document = r#"{
        "transactions": [
            {"id": "bad", "amount": 5, "type": "EXPENSE", "category": "FOOD", "description": "Lunch", "date": "06/01/2024"},
            {"id": "good", "amount": 9, "type": "EXPENSE", "category": "FOOD", "description": "Dinner", "date": "2024-06-02"}
        ],
        "profile": {"name": "kim", "currency": "EUR", "monthlyGoal": 0, "monthlySalary": 1000}
    }"#;
    storage
        .set(&user_data_key("kim"), document.as_bytes())
        .expect("store");

    let session = UserSession::open(storage.clone(), clock(2024, 6, 10), "kim").expect("open");

    assert_eq!(session.open_report().created, 1);
    assert_eq!(session.transactions().len(), 2);
    assert_eq!(session.transactions()[0].description, SALARY_MARKER);
    assert_eq!(session.transactions()[1].id, "good");
    assert!(session.open_report().warnings[0].contains("transaction bad"));

    let reopened = UserSession::open(storage, clock(2024, 6, 11), "kim").expect("reopen");
    assert_eq!(reopened.open_report().created, 0);
    assert!(reopened.open_report().warnings.is_empty());
}
