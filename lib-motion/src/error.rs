use core::{error::Error, fmt};

#[derive(Debug)]
pub enum MotionError<E>
{
    /// The sensor could not be brought up during `init`.
    Sensor(E),

    /// `start` was called before a successful `init`.
    NotInitialized,
}

impl<E: fmt::Debug> Error for MotionError<E> {}

impl<E: fmt::Debug> fmt::Display for MotionError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sensor(err) => write!(f, "Sensor initialization failed: {:?}", err),
            Self::NotInitialized => write!(f, "Motion detection has not been initialized"),
        }
    }
}

impl<E> From<E> for MotionError<E>
{
    fn from(err: E) -> Self {
        MotionError::Sensor(err)
    }
}
