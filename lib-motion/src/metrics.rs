use core::{cell::RefCell, fmt};
use critical_section::Mutex;
use crate::*;

/// In Hz; rate the sampling loop runs at, used to turn a motion distance into a duration.
///
pub const SAMPLE_RATE: f32 = 100.0;

/// Distance the accelerometer reading travelled between the start and end of the event.
///
pub fn motion_distance(event: &GestureEvent) -> f32 {
    event.start.acc.distance(&event.end.acc)
}

/// Duration of the event. There are no timestamps on the samples, so this is an approximation
/// that scales the motion distance by the sample rate rather than measuring elapsed time.
///
pub fn motion_duration(event: &GestureEvent) -> f32 {
    motion_distance(event) / SAMPLE_RATE
}

/// Rolling statistics for a single gesture type.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsRecord
{
    /// Number of times the gesture was detected.
    pub count: u64,

    /// Sum of the motion distances of all detected gestures.
    pub cumulative_distance: f32,

    /// In Hz.
    pub frequency: f32,

    pub average_speed: f32,
}

impl MetricsRecord
{
    pub const fn new() -> Self {
        MetricsRecord { count: 0, cumulative_distance: 0.0, frequency: 0.0, average_speed: 0.0 }
    }

    /// Accounts for one more gesture. A zero duration would divide by zero, in that case the
    /// frequency and speed keep their previous values.
    ///
    pub fn record(&mut self, distance: f32, duration: f32) {
        self.count += 1;
        self.cumulative_distance += distance;

        if duration > 0.0 {
            self.frequency = self.count as f32 / duration;
            self.average_speed = self.cumulative_distance / duration;
        }
    }
}

impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "count={}, distance={:.2}, frequency={:.2}, speed={:.2}",
            self.count, self.cumulative_distance, self.frequency, self.average_speed
        )
    }
}

/// One [`MetricsRecord`] per gesture type.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics
{
    records: [MetricsRecord; GestureType::COUNT],
}

impl Metrics
{
    pub const fn new() -> Self {
        Metrics { records: [MetricsRecord::new(); GestureType::COUNT] }
    }

    /// Zeroes every record.
    ///
    pub fn reset(&mut self) {
        self.records = [MetricsRecord::new(); GestureType::COUNT];
    }

    /// Adds the event to the record of its gesture type.
    ///
    pub fn update(&mut self, event: &GestureEvent) {
        let distance = motion_distance(event);
        self.records[event.kind.index()].record(distance, distance / SAMPLE_RATE);
    }

    pub fn get(&self, kind: GestureType) -> &MetricsRecord {
        &self.records[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GestureType, &MetricsRecord)> {
        GestureType::ALL.into_iter().zip(self.records.iter())
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Metrics:")?;
        for (kind, record) in self.iter() {
            writeln!(f, "  {}: {}", kind, record)?;
        }
        Ok(())
    }
}

/// [`Metrics`] that can be updated from the sampling loop's callback while another context reads
/// it. Readers get a copy taken under the lock so they never observe a half updated record.
///
pub struct SharedMetrics
{
    inner: Mutex<RefCell<Metrics>>,
}

impl SharedMetrics
{
    pub const fn new() -> Self {
        SharedMetrics { inner: Mutex::new(RefCell::new(Metrics::new())) }
    }

    pub fn update(&self, event: &GestureEvent) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).update(event));
    }

    pub fn reset(&self) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).reset());
    }

    pub fn snapshot(&self) -> Metrics {
        critical_section::with(|cs| *self.inner.borrow_ref(cs))
    }
}

impl Default for SharedMetrics {
    fn default() -> Self {
        Self::new()
    }
}
