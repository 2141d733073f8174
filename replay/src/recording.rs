use std::{collections::VecDeque, error::Error, fmt, io::Read, sync::{atomic::{AtomicBool, Ordering}, Arc}};
use math::Vector;
use motion::{MotionSample, SensorChannel};

/// Number of columns in a recording: accelerometer, gyroscope and magnetometer, X Y Z each.
///
pub const COLUMNS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayError
{
    /// The row (1 based, header excluded) could not be parsed into nine numbers.
    Malformed { row: usize },

    /// Every row has been played back.
    Exhausted,
}

impl Error for ReplayError {}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Malformed { row } => write!(f, "Malformed recording row {}", row),
            Self::Exhausted => write!(f, "End of recording"),
        }
    }
}

/// Set once the sensor has run out of rows.
///
#[derive(Debug, Clone, Default)]
pub struct Finished(Arc<AtomicBool>);

impl Finished
{
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn set(&self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Stands in for the IMU by playing back a CSV recording, one row per tick. Malformed rows read
/// like a failed bus transaction so the sampling loop skips them the same way.
///
pub struct ReplaySensor
{
    rows: VecDeque<Option<MotionSample>>,
    row: usize,
    current: Option<MotionSample>,
    finished: Finished,
}

fn parse_row(record: &[f32]) -> Option<MotionSample> {
    if record.len() != COLUMNS {
        return None;
    }
    Some(MotionSample::new(
        Vector::new(record[0], record[1], record[2]),
        Vector::new(record[3], record[4], record[5]),
        Vector::new(record[6], record[7], record[8]),
    ))
}

impl ReplaySensor
{
    /// Reads the whole recording up front. The first line is a header and is skipped.
    ///
    pub fn from_reader<R: Read>(reader: R) -> Self {
        let mut reader = csv::Reader::from_reader(reader);
        let rows = reader.deserialize::<Vec<f32>>()
            .enumerate()
            .map(|(i, result)| {
                let sample = result.ok().and_then(|record| parse_row(&record));
                if sample.is_none() {
                    log::warn!("Row {} of the recording is malformed", i + 1);
                }
                sample
            })
            .collect();

        ReplaySensor { rows, row: 0, current: None, finished: Finished::default() }
    }

    /// Rows left to play back.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn finished(&self) -> Finished {
        self.finished.clone()
    }
}

impl SensorChannel for ReplaySensor
{
    type Error = ReplayError;

    fn read_acc(&mut self) -> Result<Vector, Self::Error> {
        let Some(next) = self.rows.pop_front() else {
            self.current = None;
            self.finished.set();
            return Err(ReplayError::Exhausted);
        };
        self.row += 1;
        self.current = next;
        self.current
            .map(|sample| sample.acc)
            .ok_or(ReplayError::Malformed { row: self.row })
    }

    fn read_gyro(&mut self) -> Result<Vector, Self::Error> {
        self.current
            .map(|sample| sample.gyro)
            .ok_or(ReplayError::Malformed { row: self.row })
    }

    fn read_mag(&mut self) -> Result<Vector, Self::Error> {
        self.current
            .map(|sample| sample.mag)
            .ok_or(ReplayError::Malformed { row: self.row })
    }
}
