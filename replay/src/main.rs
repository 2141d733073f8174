use std::{env, fs::File, path::Path, process, sync::Arc, thread, time::{Duration, Instant}};
use motion::{Config, GestureEvent, MotionDetection, SharedMetrics};

mod recording;
use recording::*;

#[cfg(test)]
mod tests;

/// How often the metrics get printed while the recording plays.
static REPORT_INTERVAL: Duration = Duration::from_secs(1);

fn usage() -> ! {
    eprintln!("Usage: replay <recording.csv> [threshold] [debounce_ticks]");
    process::exit(2);
}

fn parse_config(args: &[String]) -> Option<Config> {
    let defaults = Config::default();
    let threshold = match args.get(2) {
        Some(arg) => arg.parse().ok()?,
        None => defaults.threshold,
    };
    let debounce_ticks = match args.get(3) {
        Some(arg) => arg.parse().ok()?,
        None => defaults.debounce_ticks,
    };
    Some(Config::new(threshold, debounce_ticks))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }
    let Some(config) = parse_config(&args) else {
        usage();
    };

    let path = Path::new(&args[1]);
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::error!("Could not open {}: {}", path.display(), err);
            process::exit(1);
        }
    };
    let sensor = ReplaySensor::from_reader(file);
    let finished = sensor.finished();
    log::info!("Replaying {} rows from {}", sensor.len(), path.display());

    let metrics = Arc::new(SharedMetrics::new());
    let detection = Arc::new(MotionDetection::new(sensor));

    let sink = metrics.clone();
    detection.register_callback(move |event: &GestureEvent| {
        log::info!("{} gesture, accelerometer {:?} -> {:?}", event.kind, event.start.acc, event.end.acc);
        sink.update(event);
    });

    if let Err(err) = detection.init(config) {
        log::error!("Failed to initialize motion detection: {}", err);
        process::exit(1);
    }

    let worker = match motion::spawn(detection.clone()) {
        Ok(worker) => worker,
        Err(err) => {
            log::error!("Failed to spawn motion detection thread: {}", err);
            process::exit(1);
        }
    };
    if let Err(err) = detection.start() {
        log::error!("Failed to start motion detection: {}", err);
        process::exit(1);
    }

    let mut last_report = Instant::now();
    while !finished.is_set() {
        thread::sleep(motion::TICK_PERIOD);
        if last_report.elapsed() >= REPORT_INTERVAL {
            print!("{}", metrics.snapshot());
            last_report = Instant::now();
        }
    }
    worker.shutdown();

    print!("{}", metrics.snapshot());
    let stats = detection.stats();
    println!(
        "ticks={}, bus_errors={}, fired={}, suppressed={}",
        stats.ticks, stats.bus_errors, stats.fired, stats.suppressed
    );
}
