//! E2E: configuration problems surface as typed errors and warnings.

use chrono::NaiveDate;
use ids_sim_core::{
    aggregate, parse_events, parse_stats, run_training, BaselineLoader, EventCatalog, Sampler,
    SimError,
};

const EVENTS: &str = "2\nLogins:D:0:10:2\nTime online:C:0:1440:3\n";

fn catalog() -> EventCatalog {
    let (declared, rows) = parse_events(EVENTS).unwrap();
    EventCatalog::from_rows(declared, &rows).unwrap()
}

#[test]
fn mean_above_maximum_is_fatal_and_recorded() {
    let catalog = catalog();
    let (declared, rows) = parse_stats("2\nLogins:12:1\nTime online:150.5:25.5\n").unwrap();
    let mut loader = BaselineLoader::advisory(&catalog);

    let err = loader.load(declared, &rows).unwrap_err();
    assert!(matches!(err, SimError::OutOfRange { ref event, .. } if event == "Logins"));
    assert_eq!(
        loader.warnings(),
        &["'Logins' has a mean (12) above its maximum value (10)".to_string()]
    );
}

#[test]
fn stats_for_unknown_event_is_rejected() {
    let catalog = catalog();
    let (declared, rows) = parse_stats("2\nLogins:4:1\nLogouts:4:1\n").unwrap();
    let err = BaselineLoader::advisory(&catalog)
        .load(declared, &rows)
        .unwrap_err();
    assert!(matches!(err, SimError::UnknownEvent(ref name) if name == "Logouts"));
}

#[test]
fn declared_count_must_match_catalog() {
    let catalog = catalog();
    let (declared, rows) = parse_stats("1\nLogins:4:1\n").unwrap();
    let err = BaselineLoader::advisory(&catalog)
        .load(declared, &rows)
        .unwrap_err();
    assert!(matches!(err, SimError::Format(_)));
}

#[test]
fn advisory_warnings_do_not_block_loading() {
    let catalog = catalog();
    let (declared, rows) = parse_stats("2\nLogins:4:0\nTime online:150.5:25\n").unwrap();
    let mut loader = BaselineLoader::advisory(&catalog);
    let baseline = loader.load(declared, &rows).unwrap();

    assert_eq!(baseline.len(), 2);
    // Logins: stddev 0. Time online: integral stddev on a continuous event.
    assert_eq!(loader.warnings().len(), 2);

    let mut strict = BaselineLoader::strict(&catalog);
    strict.load(declared, &rows).unwrap();
    assert!(strict.warnings().is_empty());
}

#[test]
fn empty_training_period_is_rejected() {
    let catalog = catalog();
    let (declared, rows) = parse_stats("2\nLogins:4:1\nTime online:150.5:25.5\n").unwrap();
    let baseline = BaselineLoader::advisory(&catalog).load(declared, &rows).unwrap();

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let err = run_training(&mut Sampler::seeded(1), &catalog, &baseline, start, 0).unwrap_err();
    assert!(matches!(err, SimError::EmptyInput));
    assert!(matches!(aggregate(&[]), Err(SimError::EmptyInput)));
}
