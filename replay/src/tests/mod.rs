use std::sync::{Arc, Mutex};
use motion::*;
use crate::*;

const RECORDING: &str = "\
ax,ay,az,gx,gy,gz,mx,my,mz
0.0,0.0,1.0,0.0,0.0,0.0,0.2,-0.1,0.4
0.0,0.0,1.0,0.0,0.0,0.0,0.2,-0.1,0.4
0.0,0.3,1.0,0.0,0.0,0.0,0.2,-0.1,0.4
0.0,0.3,1.0,0.0,0.0,5.0,0.2,-0.1,0.4
";

#[test]
fn test_reads_rows_in_order() {
    let mut sensor = ReplaySensor::from_reader(RECORDING.as_bytes());
    assert_eq!(sensor.len(), 4);

    let first = sensor.read_sample().unwrap();
    assert_eq!(first.acc, math::Vector::new(0.0, 0.0, 1.0));
    assert_eq!(first.mag, math::Vector::new(0.2, -0.1, 0.4));

    sensor.read_sample().unwrap();
    let third = sensor.read_sample().unwrap();
    assert_eq!(third.acc.y, 0.3);
    assert_eq!(sensor.len(), 1);
}

#[test]
fn test_malformed_rows_are_bus_errors() {
    let recording = "\
ax,ay,az,gx,gy,gz,mx,my,mz
0.0,0.0,1.0,0.0,0.0,0.0,0.2,-0.1,0.4
0.0,oops,1.0,0.0,0.0,0.0,0.2,-0.1,0.4
0.0,0.0,1.0,0.0,0.0,0.0,0.2,-0.1,0.4
";
    let mut sensor = ReplaySensor::from_reader(recording.as_bytes());
    assert_eq!(sensor.len(), 3);

    assert!(sensor.read_sample().is_ok());
    assert_eq!(sensor.read_sample(), Err(ReplayError::Malformed { row: 2 }));
    assert_eq!(sensor.read_gyro(), Err(ReplayError::Malformed { row: 2 }));
    assert!(sensor.read_sample().is_ok());
}

#[test]
fn test_exhaustion_sets_finished() {
    let mut sensor = ReplaySensor::from_reader(RECORDING.as_bytes());
    let finished = sensor.finished();

    for _ in 0..4 {
        sensor.read_sample().unwrap();
    }
    assert!(!finished.is_set());
    assert_eq!(sensor.read_sample(), Err(ReplayError::Exhausted));
    assert!(finished.is_set());
    assert!(sensor.is_empty());
}

#[test]
fn test_replay_feeds_metrics() {
    let detection = MotionDetection::new(ReplaySensor::from_reader(RECORDING.as_bytes()));
    let metrics = Arc::new(SharedMetrics::new());
    let kinds = Arc::new(Mutex::new(Vec::new()));

    let sink = metrics.clone();
    let seen = kinds.clone();
    detection.register_callback(move |event| {
        seen.lock().unwrap().push(event.kind);
        sink.update(event);
    });
    detection.init(Config::new(0.1, 0)).unwrap();
    detection.start().unwrap();

    let outcomes: Vec<TickOutcome> = (0..5).map(|_| detection.tick()).collect();
    assert_eq!(outcomes, vec![
        TickOutcome::Primed,
        TickOutcome::Quiet,
        TickOutcome::Fired(GestureType::UpToDown),
        TickOutcome::Fired(GestureType::RightToLeft),
        TickOutcome::BusError,
    ]);

    assert_eq!(*kinds.lock().unwrap(), vec![GestureType::UpToDown, GestureType::RightToLeft]);
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.get(GestureType::UpToDown).count, 1);
    assert_eq!(snapshot.get(GestureType::RightToLeft).count, 1);
    assert_eq!(snapshot.get(GestureType::Loop).count, 0);
}

#[test]
fn test_parse_config_arguments() {
    let args: Vec<String> = ["replay", "walk.csv", "0.25", "3"].iter().map(|s| s.to_string()).collect();
    assert_eq!(parse_config(&args), Some(Config::new(0.25, 3)));

    let args: Vec<String> = ["replay", "walk.csv"].iter().map(|s| s.to_string()).collect();
    assert_eq!(parse_config(&args), Some(Config::default()));

    let args: Vec<String> = ["replay", "walk.csv", "fast"].iter().map(|s| s.to_string()).collect();
    assert_eq!(parse_config(&args), None);
}
