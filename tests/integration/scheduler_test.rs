use std::time::Duration;

use comfort_monitor::core::comfort::{
    evaluate, poll_once, LiveReader, PollingScheduler, PublishedState, SchedulerState,
    SensorOutcome, SensorReader, Severity, SyntheticReader, Thresholds,
};

use super::support::{entity_body, SlowBroker, StubBroker};

fn live_reader(base_url: &str) -> SensorReader {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    SensorReader::Live(LiveReader::with_client(
        client,
        base_url,
        "EnvSensor:comfort001",
        "skillhub",
        "/",
    ))
}

/// Every snapshot must be internally consistent.
fn assert_coherent(state: &PublishedState, thresholds: &Thresholds) {
    let Some(classification) = &state.classification else {
        assert_eq!(state.cycle, 0);
        assert!(state.produced_at.is_none());
        assert!(state.reading.is_none());
        return;
    };

    assert!(state.cycle > 0);
    assert!(state.produced_at.is_some());
    match state.reading {
        Some(reading) => {
            assert_eq!(
                &evaluate(&SensorOutcome::Reading(reading), thresholds),
                classification
            );
        }
        None => assert_eq!(classification.severity, Severity::Unavailable),
    }
}

#[tokio::test]
async fn test_broker_500_publishes_unavailable_now() {
    let broker = StubBroker::respond("500 Internal Server Error", "");
    let mut reader = live_reader(&broker.base_url);

    let before = chrono::Utc::now();
    let state = poll_once(&mut reader, &Thresholds::default()).await;
    let after = chrono::Utc::now();

    let classification = state.classification.unwrap();
    assert_eq!(classification.severity, Severity::Unavailable);
    assert_eq!(classification.status_text, "device not found");
    assert!(classification.out_of_range.is_empty());
    assert!(state.reading.is_none());

    let produced_at = state.produced_at.unwrap();
    assert!(produced_at >= before && produced_at <= after);
}

#[test]
fn test_pending_until_first_cycle_completes() {
    let broker = StubBroker::respond_after(
        "200 OK",
        &entity_body(22.0, 50.0, 55.0),
        Duration::from_millis(500),
    );
    let mut scheduler = PollingScheduler::with_reader(
        live_reader(&broker.base_url),
        Thresholds::default(),
        Duration::from_secs(2),
    )
    .unwrap();

    let first = scheduler.latest();
    assert!(first.is_pending());
    assert_eq!(*first, PublishedState::pending());

    let published = scheduler.wait_for_update().unwrap();
    assert_eq!(published.cycle, 1);
    let classification = published.classification.as_ref().unwrap();
    assert_eq!(classification.severity, Severity::Ok);
    assert_eq!(classification.status_text, "excellent for study/focus");

    let last = scheduler.shutdown();
    assert_eq!(last.cycle, 1);
}

#[test]
fn test_scheduler_keeps_publishing_during_outage() {
    let reader = SensorReader::Synthetic(SyntheticReader::new(1.0, Some(11)));
    let mut scheduler =
        PollingScheduler::with_reader(reader, Thresholds::default(), Duration::from_millis(20))
            .unwrap();

    let first = scheduler.wait_for_update().unwrap();
    let second = scheduler.wait_for_update().unwrap();

    assert!(second.cycle > first.cycle);
    assert!(second.produced_at.unwrap() >= first.produced_at.unwrap());
    for state in [&first, &second] {
        assert_eq!(
            state.classification.as_ref().unwrap().severity,
            Severity::Unavailable
        );
    }

    scheduler.shutdown();
}

#[test]
fn test_shutdown_stops_and_retains_last_state() {
    let reader = SensorReader::Synthetic(SyntheticReader::new(0.0, Some(5)));
    let mut scheduler =
        PollingScheduler::with_reader(reader, Thresholds::default(), Duration::from_millis(10))
            .unwrap();
    let handle = scheduler.handle();

    scheduler.wait_for_update().unwrap();
    let last = scheduler.shutdown();

    assert_eq!(handle.scheduler_state(), SchedulerState::Stopped);
    assert_eq!(handle.latest(), last);
    assert!(last.reading.is_some());

    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(handle.latest().cycle, last.cycle);
}

#[test]
fn test_concurrent_readers_see_whole_snapshots() {
    let thresholds = Thresholds::default();
    let reader = SensorReader::Synthetic(SyntheticReader::new(0.3, Some(99)));
    let scheduler =
        PollingScheduler::with_reader(reader, thresholds.clone(), Duration::from_millis(2))
            .unwrap();

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let handle = scheduler.handle();
            let thresholds = thresholds.clone();
            std::thread::spawn(move || {
                let mut last_cycle = 0;
                for _ in 0..2_000 {
                    let state = handle.latest();
                    assert_coherent(&state, &thresholds);
                    assert!(state.cycle >= last_cycle);
                    last_cycle = state.cycle;
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
    scheduler.shutdown();
}

#[test]
fn test_slow_cycles_never_overlap() {
    let cycle_time = Duration::from_millis(250);
    let broker = SlowBroker::start(&entity_body(22.0, 50.0, 55.0), cycle_time);
    let mut scheduler = PollingScheduler::with_reader(
        live_reader(&broker.base_url),
        Thresholds::default(),
        Duration::from_millis(100),
    )
    .unwrap();

    let published: Vec<_> = (0..4)
        .map(|_| scheduler.wait_for_update().unwrap())
        .collect();
    scheduler.shutdown();

    assert_eq!(broker.max_in_flight(), 1);

    for (i, state) in published.iter().enumerate() {
        assert_eq!(state.cycle, i as u64 + 1);
        assert_eq!(
            state.classification.as_ref().unwrap().severity,
            Severity::Ok
        );
    }

    // Spacing follows the slow cycle, not the 100 ms interval
    let min_gap = Duration::from_millis(200);
    let arrivals = broker.arrivals();
    assert!(arrivals.len() >= 4, "arrivals: {:?}", arrivals);
    for pair in arrivals.windows(2) {
        assert!(pair[1] - pair[0] >= min_gap, "arrivals: {:?}", arrivals);
    }
    for pair in published.windows(2) {
        let gap = pair[1].produced_at.unwrap() - pair[0].produced_at.unwrap();
        assert!(gap.to_std().unwrap() >= min_gap);
    }
}

#[test]
fn test_zero_interval_rejected() {
    let reader = SensorReader::Synthetic(SyntheticReader::new(0.0, None));
    assert!(PollingScheduler::with_reader(reader, Thresholds::default(), Duration::ZERO).is_err());
}
