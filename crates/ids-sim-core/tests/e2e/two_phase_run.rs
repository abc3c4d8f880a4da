//! E2E: train on configured stats, write reports, detect against shifted stats.

use chrono::NaiveDate;
use ids_sim_core::{
    parse_events, parse_stats, run_detection, run_training, AnomalyStatus, BaselineLoader,
    EventCatalog, JsonFileSink, ReportFiles, Sampler,
};

const EVENTS: &str = "3\nLogins:D:0::2\nTime online:C:0:1440:3\nEmails sent:D:0::1\n";
const STATS: &str = "3\nLogins:4:1.5\nTime online:150.5:25.5\nEmails sent:10:3\n";
const SHIFTED: &str = "3\nLogins:40:1\nTime online:150.5:25.5\nEmails sent:10:3\n";

fn catalog() -> EventCatalog {
    let (declared, rows) = parse_events(EVENTS).unwrap();
    EventCatalog::from_rows(declared, &rows).unwrap()
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

fn temp_dir(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("ids_sim_e2e_{}_{}", tag, uuid::Uuid::new_v4()))
}

#[test]
fn training_and_detection_write_all_reports() {
    let catalog = catalog();
    let (declared, rows) = parse_stats(STATS).unwrap();
    let baseline = BaselineLoader::advisory(&catalog).load(declared, &rows).unwrap();

    let (declared, rows) = parse_stats(SHIFTED).unwrap();
    let live = BaselineLoader::advisory(&catalog).load(declared, &rows).unwrap();

    let mut sampler = Sampler::seeded(99);
    let training = run_training(&mut sampler, &catalog, &baseline, start(), 200).unwrap();
    let detection = run_detection(
        &mut sampler,
        &catalog,
        &live,
        &training.reference_baseline(),
        start(),
        14,
    )
    .unwrap();

    // Logins sits ~24 sigma above the reference, weighted ×2, against a threshold of 12.
    assert_eq!(detection.flagged(), 14);
    assert!(detection
        .verdicts
        .iter()
        .all(|v| v.status == AnomalyStatus::Flagged && v.score > v.threshold));

    let dir = temp_dir("reports");
    let mut sink = JsonFileSink::new(&dir, ReportFiles::default());
    training.emit(&mut sink).unwrap();
    detection.emit(&mut sink).unwrap();

    let read = |name: &str| -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(dir.join(name)).unwrap()).unwrap()
    };

    let logs = read("logs.json");
    assert_eq!(logs.as_array().unwrap().len(), 200);
    assert_eq!(logs[0]["date"], "2024-04-01");
    assert!(logs[0]["Logins"].is_i64());

    let analysis = read("analysis_results.json");
    let online_mean = analysis["Time online"]["mean"].as_f64().unwrap();
    assert!((online_mean - 150.5).abs() < 10.0, "mean {}", online_mean);

    let live_logs = read("live_daily_events.json");
    assert_eq!(live_logs.as_array().unwrap().len(), 14);

    let alerts = read("alerts.json");
    assert_eq!(alerts.as_array().unwrap().len(), 14);
    assert_eq!(alerts[0]["status"], "FLAGGED");
    assert_eq!(alerts[0]["threshold"], 12.0);
    assert_eq!(alerts[13]["date"], "2024-04-14");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unchanged_stats_are_mostly_normal() {
    let catalog = catalog();
    let (declared, rows) = parse_stats(STATS).unwrap();
    let baseline = BaselineLoader::advisory(&catalog).load(declared, &rows).unwrap();

    let mut sampler = Sampler::seeded(5);
    let training = run_training(&mut sampler, &catalog, &baseline, start(), 200).unwrap();
    let detection = run_detection(
        &mut sampler,
        &catalog,
        &baseline,
        &training.reference_baseline(),
        start(),
        50,
    )
    .unwrap();

    assert_eq!(detection.verdicts.len(), 50);
    assert!(detection.flagged() < 25, "{} flagged", detection.flagged());
}

#[test]
fn detection_only_needs_a_reference_baseline() {
    let catalog = catalog();
    let (declared, rows) = parse_stats(STATS).unwrap();
    let baseline = BaselineLoader::strict(&catalog).load(declared, &rows).unwrap();

    let mut sampler = Sampler::seeded(1);
    let detection = run_detection(&mut sampler, &catalog, &baseline, &baseline, start(), 0).unwrap();
    assert!(detection.verdicts.is_empty());
    assert_eq!(detection.flagged(), 0);
}
