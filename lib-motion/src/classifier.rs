use crate::*;

/// In g; minimum magnitude of the accelerometer change for a loop gesture.
pub const ACCEL_THRESHOLD: f32 = 0.1;

/// In deg/s; minimum change of the gyroscope for horizontal and loop gestures.
pub const GYRO_THRESHOLD: f32 = 1.0;

/// A single classification rule. Rules are evaluated in [`PRECEDENCE`] order and the first rule
/// that matches decides the gesture, so a tick never yields more than one gesture even when the
/// motion satisfies several rules at once.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule
{
    /// Accelerometer Y axis moved by more than the configured threshold.
    Vertical,

    /// Gyroscope Z axis changed by more than [`GYRO_THRESHOLD`].
    Horizontal,

    /// Both the accelerometer and the gyroscope changed noticeably in any direction.
    Loop,
}

pub const PRECEDENCE: [Rule; 3] = [Rule::Vertical, Rule::Horizontal, Rule::Loop];

impl Rule
{
    pub fn evaluate(self, prev: &MotionSample, curr: &MotionSample, config: &Config) -> Option<GestureType> {
        match self {
            Self::Vertical => {
                if curr.acc.y - prev.acc.y > config.threshold {
                    Some(GestureType::UpToDown)
                } else if prev.acc.y - curr.acc.y > config.threshold {
                    Some(GestureType::DownToUp)
                } else {
                    None
                }
            },
            Self::Horizontal => {
                if curr.gyro.z - prev.gyro.z > GYRO_THRESHOLD {
                    Some(GestureType::RightToLeft)
                } else if prev.gyro.z - curr.gyro.z > GYRO_THRESHOLD {
                    Some(GestureType::LeftToRight)
                } else {
                    None
                }
            },
            Self::Loop => {
                let accel_moved = curr.acc.distance_squared(&prev.acc) > ACCEL_THRESHOLD * ACCEL_THRESHOLD;
                let gyro_moved = curr.gyro.distance_squared(&prev.gyro) > GYRO_THRESHOLD * GYRO_THRESHOLD;
                if accel_moved && gyro_moved {
                    Some(GestureType::Loop)
                } else {
                    None
                }
            },
        }
    }
}

/// Classifies the motion between two consecutive samples. Returns `None` when nothing moved enough
/// or when detection is disabled through a non-positive threshold.
///
pub fn classify(prev: &MotionSample, curr: &MotionSample, config: &Config) -> Option<GestureType> {
    if !config.detection_enabled() {
        return None;
    }
    PRECEDENCE.iter().find_map(|rule| rule.evaluate(prev, curr, config))
}
