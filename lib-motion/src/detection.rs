use core::{cell::RefCell, fmt::Debug, sync::atomic::{AtomicBool, AtomicU8, Ordering}, time::Duration};
use alloc::boxed::Box;
use critical_section::Mutex;
use crate::*;

/// Time between two ticks of the sampling loop.
///
pub const TICK_PERIOD: Duration = Duration::from_millis(10);

/// Receives every gesture the sampling loop emits. Runs on the sampling loop itself, so it should
/// return quickly.
///
pub type Callback = Box<dyn FnMut(&GestureEvent) + Send>;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status
{
    /// Never successfully initialized.
    Created = 0,
    Stopped = 1,
    Running = 2,
}

impl Status {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Status::Stopped,
            2 => Status::Running,
            _ => Status::Created,
        }
    }
}

/// What a single tick of the sampling loop did.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome
{
    /// The loop is not running, the sensor was not touched.
    Idle,

    /// First sample since start, nothing to compare it against yet.
    Primed,

    /// Reading the sensor failed; the previous sample is kept for the next tick.
    BusError,

    /// Nothing moved enough.
    Quiet,

    /// A gesture was recognized but swallowed by the debounce window.
    Suppressed(GestureType),

    /// A gesture was recognized and handed to the callback.
    Fired(GestureType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectorStats
{
    /// Ticks executed while running, including failed ones.
    pub ticks: u64,
    pub bus_errors: u64,
    pub fired: u64,
    pub suppressed: u64,
}

/// State carried from one tick to the next.
///
struct Tracker
{
    config: Config,
    prev: Option<MotionSample>,

    /// Remaining ticks during which gestures are suppressed.
    debounce: u32,

    stats: DetectorStats,
}

impl Tracker
{
    const fn new() -> Self {
        Tracker {
            config: Config::disabled(),
            prev: None,
            debounce: 0,
            stats: DetectorStats { ticks: 0, bus_errors: 0, fired: 0, suppressed: 0 },
        }
    }

    fn advance<E: Debug>(&mut self, reading: Result<MotionSample, E>) -> (TickOutcome, Option<GestureEvent>) {
        self.stats.ticks += 1;

        let curr = match reading {
            Ok(sample) => sample,
            Err(err) => {
                log::warn!("Skipping tick, failed to read sensor: {:?}", err);
                self.stats.bus_errors += 1;
                self.debounce = self.debounce.saturating_sub(1);
                return (TickOutcome::BusError, None);
            }
        };

        let Some(prev) = self.prev.replace(curr) else {
            self.debounce = self.debounce.saturating_sub(1);
            return (TickOutcome::Primed, None);
        };

        let kind = classify(&prev, &curr, &self.config);

        if self.debounce > 0 {
            self.debounce -= 1;
            return match kind {
                Some(kind) => {
                    log::trace!("Suppressed {} gesture, {} ticks of debounce left", kind, self.debounce);
                    self.stats.suppressed += 1;
                    (TickOutcome::Suppressed(kind), None)
                },
                None => (TickOutcome::Quiet, None),
            };
        }

        match kind {
            Some(kind) => {
                log::debug!("Detected {} gesture", kind);
                self.debounce = self.config.debounce_ticks;
                self.stats.fired += 1;
                let event = GestureEvent { kind, start: prev, end: curr };
                (TickOutcome::Fired(kind), Some(event))
            },
            None => (TickOutcome::Quiet, None),
        }
    }
}

/// The sampling loop. Owns the sensor, the detection state and the callback slot; every method
/// takes `&self` so a single instance can be shared between the context driving [`Self::run`]
/// and the contexts controlling it.
///
/// Lifecycle: `Created --init--> Stopped --start--> Running --stop--> Stopped`.
///
pub struct MotionDetection<S: SensorChannel>
{
    sensor: Mutex<RefCell<S>>,
    tracker: Mutex<RefCell<Tracker>>,
    callback: Mutex<RefCell<Option<Callback>>>,
    status: AtomicU8,
    shutdown: AtomicBool,
}

impl<S: SensorChannel> MotionDetection<S>
{
    pub const fn new(sensor: S) -> Self {
        MotionDetection {
            sensor: Mutex::new(RefCell::new(sensor)),
            tracker: Mutex::new(RefCell::new(Tracker::new())),
            callback: Mutex::new(RefCell::new(None)),
            status: AtomicU8::new(Status::Created as u8),
            shutdown: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        Status::from_u8(self.status.load(Ordering::Acquire))
    }

    #[inline]
    fn set_status(&self, status: Status) {
        self.status.store(status as u8, Ordering::Release);
    }

    /// Initializes the sensor and applies the given configuration. When called on a running loop
    /// the loop is stopped first and restarted once the new configuration is in place. If the
    /// sensor fails to initialize the loop ends up back in [`Status::Created`] and refuses to
    /// start until a later `init` succeeds.
    ///
    pub fn init(&self, config: Config) -> Result<(), MotionError<S::Error>> {
        let was_running = self.status() == Status::Running;
        self.stop();

        log::info!(
            "Initializing motion detection threshold={} debounce_ticks={}",
            config.threshold, config.debounce_ticks
        );

        let result = critical_section::with(|cs| self.sensor.borrow_ref_mut(cs).init());
        if let Err(err) = result {
            log::error!("Sensor initialization failed: {:?}", err);
            self.set_status(Status::Created);
            return Err(MotionError::Sensor(err));
        }

        critical_section::with(|cs| {
            let mut tracker = self.tracker.borrow_ref_mut(cs);
            tracker.config = config;
            tracker.prev = None;
            tracker.debounce = 0;
        });
        self.set_status(Status::Stopped);

        if was_running {
            self.start()?;
        }
        Ok(())
    }

    /// Starts sampling on the next tick. Does nothing if already running.
    ///
    pub fn start(&self) -> Result<(), MotionError<S::Error>> {
        match self.status() {
            Status::Created => Err(MotionError::NotInitialized),
            Status::Running => Ok(()),
            Status::Stopped => {
                // A sample from before the pause says nothing about the motion now.
                critical_section::with(|cs| self.tracker.borrow_ref_mut(cs).prev = None);
                self.set_status(Status::Running);
                log::info!("Motion detection started");
                Ok(())
            },
        }
    }

    /// Stops sampling. Takes effect before the next tick, a tick already in progress completes.
    /// Does nothing if not running.
    ///
    pub fn stop(&self) {
        if self.status() == Status::Running {
            self.set_status(Status::Stopped);
            log::info!("Motion detection stopped");
        }
    }

    /// Installs the callback that receives detected gestures, replacing any callback registered
    /// before.
    ///
    pub fn register_callback<F>(&self, callback: F)
    where
        F: FnMut(&GestureEvent) + Send + 'static,
    {
        let callback: Callback = Box::new(callback);
        critical_section::with(|cs| {
            self.callback.borrow_ref_mut(cs).replace(callback);
        });
    }

    /// Copy of the current configuration.
    ///
    pub fn config(&self) -> Config {
        critical_section::with(|cs| self.tracker.borrow_ref(cs).config)
    }

    pub fn stats(&self) -> DetectorStats {
        critical_section::with(|cs| self.tracker.borrow_ref(cs).stats)
    }

    /// Executes a single tick: read one sample, classify it against the previous one, apply the
    /// debounce window and dispatch the resulting event.
    ///
    pub fn tick(&self) -> TickOutcome {
        if self.status() != Status::Running {
            return TickOutcome::Idle;
        }

        // The sensor stays locked for the whole multi-channel read.
        let reading = critical_section::with(|cs| self.sensor.borrow_ref_mut(cs).read_sample());

        let (outcome, event) = critical_section::with(|cs| {
            self.tracker.borrow_ref_mut(cs).advance(reading)
        });

        if let Some(event) = event {
            self.dispatch(&event);
        }
        outcome
    }

    /// Invokes the callback outside of the critical section so it can take as long as it needs
    /// (and even register a replacement) without holding up anything else.
    ///
    fn dispatch(&self, event: &GestureEvent) {
        let taken = critical_section::with(|cs| self.callback.borrow_ref_mut(cs).take());
        let Some(mut callback) = taken else {
            log::debug!("No callback registered, dropping {} gesture", event.kind);
            return;
        };

        callback(event);

        critical_section::with(|cs| {
            let mut slot = self.callback.borrow_ref_mut(cs);
            // Keep a callback registered while this one was running.
            if slot.is_none() {
                *slot = Some(callback);
            }
        });
    }

    /// Runs the sampling loop on the current context until [`Self::shutdown`] is called, calling
    /// `sleep` with [`TICK_PERIOD`] between ticks. While stopped the loop keeps idling without
    /// touching the sensor.
    ///
    pub fn run(&self, mut sleep: impl FnMut(Duration)) {
        log::info!("Motion detection loop running");
        while !self.shutdown.load(Ordering::Acquire) {
            self.tick();
            sleep(TICK_PERIOD);
        }
        log::info!("Motion detection loop exited");
    }

    /// Stops sampling and makes [`Self::run`] return after its current tick.
    ///
    pub fn shutdown(&self) {
        self.stop();
        self.shutdown.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }
}
