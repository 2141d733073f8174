
/// Detection settings supplied to [`crate::MotionDetection::init`].
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config
{
    /// In g; minimum change of the accelerometer Y axis between two ticks that counts as a
    /// vertical gesture. Zero (or anything not greater than zero) disables detection entirely.
    pub threshold: f32,

    /// Number of ticks after a fired gesture during which no further gestures are emitted. Zero
    /// lets every qualifying tick fire.
    pub debounce_ticks: u32,
}

impl Config
{
    pub const fn new(threshold: f32, debounce_ticks: u32) -> Self {
        Config { threshold, debounce_ticks }
    }

    /// A configuration that never reports a gesture.
    ///
    pub const fn disabled() -> Self {
        Config { threshold: 0.0, debounce_ticks: 0 }
    }

    /// NaN thresholds also count as disabled.
    #[inline]
    pub fn detection_enabled(&self) -> bool {
        self.threshold > 0.0
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(0.1, 5)
    }
}
