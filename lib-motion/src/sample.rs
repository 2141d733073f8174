use core::fmt::{self, Debug};
use crate::*;

/// One synchronized read of all three sensor channels. The magnetometer is not used by any of the
/// classification rules but is carried along for anyone consuming the events.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionSample
{
    /// In g.
    pub acc: Vector,

    /// In deg/s.
    pub gyro: Vector,

    /// In gauss.
    pub mag: Vector,
}

impl MotionSample
{
    pub const fn new(acc: Vector, gyro: Vector, mag: Vector) -> Self {
        MotionSample { acc, gyro, mag }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureType
{
    UpToDown = 0,
    DownToUp = 1,
    RightToLeft = 2,
    LeftToRight = 3,
    Loop = 4,
}

impl GestureType
{
    pub const COUNT: usize = 5;

    pub const ALL: [GestureType; Self::COUNT] = [
        GestureType::UpToDown,
        GestureType::DownToUp,
        GestureType::RightToLeft,
        GestureType::LeftToRight,
        GestureType::Loop,
    ];

    /// Position of this gesture in per-gesture tables such as [`Metrics`].
    ///
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human readable name used in reports.
    ///
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToDown => "Up to down",
            Self::DownToUp => "Down to up",
            Self::RightToLeft => "Right to left",
            Self::LeftToRight => "Left to right",
            Self::Loop => "Loop",
        }
    }
}

impl fmt::Display for GestureType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A detected gesture. `start` is the sample of the previous tick and `end` the sample of the tick
/// the gesture was detected on.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent
{
    pub kind: GestureType,
    pub start: MotionSample,
    pub end: MotionSample,
}

/// The three sensor channels the sampling loop reads every tick. Each read is a blocking bus
/// transaction that either yields a vector in physical units or a bus error.
///
pub trait SensorChannel
{
    type Error: Debug;

    /// Brings the device into a state where the reads below can be served. Called by
    /// [`MotionDetection::init`], a failure here keeps the sampling loop from starting.
    ///
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Accelerometer, in g.
    fn read_acc(&mut self) -> Result<Vector, Self::Error>;

    /// Gyroscope, in deg/s.
    fn read_gyro(&mut self) -> Result<Vector, Self::Error>;

    /// Magnetometer, in gauss.
    fn read_mag(&mut self) -> Result<Vector, Self::Error>;

    /// Reads all three channels. The first failing read aborts the sample so a partially filled
    /// sample never reaches the classifier.
    ///
    fn read_sample(&mut self) -> Result<MotionSample, Self::Error> {
        let acc = self.read_acc()?;
        let gyro = self.read_gyro()?;
        let mag = self.read_mag()?;
        Ok(MotionSample { acc, gyro, mag })
    }
}
