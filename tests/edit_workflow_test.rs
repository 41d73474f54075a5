use std::sync::Arc;
use std::time::Duration;

use applicant_dashboard::{
    models::ApplicantRecord,
    services::ApplicantService,
    storage::{KeyValueMedium, MemoryMedium, RecordStore},
    workflow::{CloseOutcome, EditPhase, SubmitOutcome},
    Dashboard, Error,
};
use tokio_test::{assert_err, assert_ok};

fn setup() -> (Dashboard, ApplicantService, Arc<MemoryMedium>) {
    let medium = Arc::new(MemoryMedium::new());
    let records = Arc::new(RecordStore::new(medium.clone(), "applicantsData"));
    let service = ApplicantService::new(records, Duration::ZERO, Duration::ZERO);
    (Dashboard::new(service.clone()), service, medium)
}

fn find(all: &[ApplicantRecord], id: i64) -> ApplicantRecord {
    all.iter()
        .find(|a| a.id == id)
        .cloned()
        .expect("applicant present")
}

#[tokio::test]
async fn empty_store_is_seeded_once() {
    let (_, service, medium) = setup();
    assert!(medium.get("applicantsData").unwrap().is_none());

    let first = service.fetch_all().await;
    let ids: Vec<i64> = first.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![231, 232, 233, 234, 235]);

    let persisted = medium.get("applicantsData").unwrap().expect("seeded");
    let second = service.fetch_all().await;
    assert_eq!(second, first);
    assert_eq!(medium.get("applicantsData").unwrap().unwrap(), persisted);
}

#[tokio::test]
async fn invalid_email_blocks_submit_without_writing() {
    let (mut dashboard, _, medium) = setup();
    dashboard.load().await;
    let before = medium.get("applicantsData").unwrap();

    assert_ok!(dashboard.select_for_edit(232));
    assert_ok!(dashboard.change_field("email", "not-an-email"));

    let outcome = dashboard.submit().await;
    match outcome {
        SubmitOutcome::Invalid(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors["email"], "Email is invalid");
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert_eq!(dashboard.phase(), EditPhase::Editing);
    assert!(dashboard.is_dirty());
    assert_eq!(dashboard.errors()["email"], "Email is invalid");
    assert_eq!(medium.get("applicantsData").unwrap(), before);
}

#[tokio::test]
async fn valid_phone_change_is_persisted() {
    let (mut dashboard, service, _) = setup();
    dashboard.load().await;
    let original = find(dashboard.applicants(), 233);

    assert_ok!(dashboard.select_for_edit(233));
    assert_ok!(dashboard.change_field("phone", "+1 555 000 1111"));
    let outcome = dashboard.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Saved(ref a) if a.id == 233));
    assert_eq!(dashboard.phase(), EditPhase::Closed);
    assert!(dashboard.store().editing().is_none());

    let stored = find(&service.fetch_all().await, 233);
    assert_eq!(stored.phone, "+1 555 000 1111");
    assert!(stored.last_modified > original.last_modified);
    assert_eq!(find(dashboard.applicants(), 233), stored);
}

#[tokio::test]
async fn cancel_discard_resumes_dirty_edit() {
    let (mut dashboard, _, _) = setup();
    dashboard.load().await;

    assert_ok!(dashboard.select_for_edit(234));
    assert_ok!(dashboard.change_field("name", "Emily W."));
    assert_eq!(dashboard.request_close(), CloseOutcome::ConfirmationRequired);
    assert_eq!(dashboard.phase(), EditPhase::ConfirmingDiscard);

    assert!(dashboard.cancel_discard());
    assert_eq!(dashboard.phase(), EditPhase::Editing);
    assert!(dashboard.is_dirty());
    assert_eq!(dashboard.draft().unwrap().name, "Emily W.");
}

#[tokio::test]
async fn update_of_unknown_id_is_rejected_without_change() {
    let (_, service, medium) = setup();
    let all = service.fetch_all().await;
    let before = medium.get("applicantsData").unwrap();

    let mut ghost = all[0].clone();
    ghost.id = 9999;
    let err = assert_err!(service.apply_update(ghost).await);
    assert!(matches!(err, Error::RecordNotFound(9999)));

    assert_eq!(medium.get("applicantsData").unwrap(), before);
    assert_eq!(service.fetch_all().await, all);
}

#[tokio::test]
async fn applied_update_round_trips_except_stamp() {
    let (_, service, _) = setup();
    let mut carlos = find(&service.fetch_all().await, 235);
    carlos.skills = vec!["Kanban".into(), "Scrum".into()];
    carlos.summary = "Delivery lead".into();
    carlos.status = "In Review".parse().unwrap();

    let saved = assert_ok!(service.apply_update(carlos.clone()).await);
    let stored = find(&service.fetch_all().await, 235);

    assert_eq!(stored, saved);
    assert!(stored.last_modified > carlos.last_modified);
    let mut restamped = carlos.clone();
    restamped.last_modified = stored.last_modified;
    assert_eq!(stored, restamped);
}

#[tokio::test]
async fn close_without_changes_never_asks() {
    let (mut dashboard, _, _) = setup();
    dashboard.load().await;

    for id in [231, 232, 233] {
        assert_ok!(dashboard.select_for_edit(id));
        assert_eq!(dashboard.request_close(), CloseOutcome::Closed);
        assert_eq!(dashboard.phase(), EditPhase::Closed);
    }
}

#[tokio::test]
async fn failed_save_can_be_retried() {
    let (mut dashboard, service, _) = setup();
    dashboard.load().await;

    assert_ok!(dashboard.select_for_edit(231));
    assert_ok!(dashboard.change_field("noticePeriod", "2 Months"));

    // drop 231 from the persisted collection behind the dashboard's back
    let mut persisted = service.store().load();
    let removed = persisted.remove(0);
    assert_ok!(service.store().save(&persisted));

    assert!(matches!(dashboard.submit().await, SubmitOutcome::Failed(_)));
    assert_eq!(dashboard.phase(), EditPhase::Editing);
    assert!(dashboard.submit_error().is_some());
    assert_eq!(dashboard.draft().unwrap().notice_period, "2 Months");

    persisted.insert(0, removed);
    assert_ok!(service.store().save(&persisted));

    assert!(matches!(dashboard.submit().await, SubmitOutcome::Saved(_)));
    assert_eq!(dashboard.phase(), EditPhase::Closed);
    assert_eq!(find(dashboard.applicants(), 231).notice_period, "2 Months");
}

#[tokio::test]
async fn unreachable_storage_still_serves_and_accepts_edits() {
    let (mut dashboard, service, medium) = setup();
    medium.set_offline(true);

    assert_eq!(dashboard.load().await, 5);
    assert_ok!(dashboard.select_for_edit(232));
    assert_ok!(dashboard.change_field("languageSkills", "English (Native), German"));
    assert!(matches!(dashboard.submit().await, SubmitOutcome::Saved(_)));

    assert!(service.store().is_degraded());
    let stored = find(&service.fetch_all().await, 232);
    assert_eq!(stored.language_skills, vec!["English (Native)", "German"]);

    medium.set_offline(false);
    assert!(medium.get("applicantsData").unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn timed_out_submit_can_be_resubmitted() {
    let medium = Arc::new(MemoryMedium::new());
    let records = Arc::new(RecordStore::new(medium, "applicantsData"));
    let service = ApplicantService::new(records, Duration::ZERO, Duration::from_millis(300));
    let mut dashboard = Dashboard::new(service.clone());
    dashboard.load().await;

    assert_ok!(dashboard.select_for_edit(233));
    assert_ok!(dashboard.change_field("phone", "+1 555 000 1111"));
    assert_err!(tokio::time::timeout(Duration::from_millis(10), dashboard.submit()).await);

    assert_eq!(dashboard.phase(), EditPhase::Editing);
    assert_ok!(dashboard.change_field("phone", "+1 555 000 2222"));
    assert!(matches!(dashboard.submit().await, SubmitOutcome::Saved(_)));
    assert_eq!(find(dashboard.applicants(), 233).phone, "+1 555 000 2222");
    assert_eq!(find(&service.fetch_all().await, 233).phone, "+1 555 000 2222");
}
