use std::sync::{atomic::{AtomicUsize, Ordering}, Arc};
use crate::*;


pub fn sample(acc: [f32; 3], gyro: [f32; 3]) -> MotionSample {
    MotionSample::new(Vector::from(acc), Vector::from(gyro), Vector::new(0.2, -0.1, 0.4))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeBusError
{
    Nack,
    Exhausted,
    WrongDevice,
}

#[derive(Debug, Clone, Copy)]
pub enum Step
{
    Sample(MotionSample),
    Fail,
}

/// Plays back a fixed list of samples, one per call to `read_acc`.
///
pub struct ScriptedSensor
{
    steps: Vec<Step>,
    cursor: usize,
    current: Option<MotionSample>,
    pub fail_init: bool,
    pub reads: Arc<AtomicUsize>,
}

impl ScriptedSensor
{
    pub fn new(steps: Vec<Step>) -> Self {
        ScriptedSensor { steps, cursor: 0, current: None, fail_init: false, reads: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn from_samples(samples: &[MotionSample]) -> Self {
        Self::new(samples.iter().map(|s| Step::Sample(*s)).collect())
    }
}

impl SensorChannel for ScriptedSensor
{
    type Error = FakeBusError;

    fn init(&mut self) -> Result<(), Self::Error> {
        if self.fail_init { Err(FakeBusError::WrongDevice) } else { Ok(()) }
    }

    fn read_acc(&mut self) -> Result<Vector, Self::Error> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.get(self.cursor).copied().ok_or(FakeBusError::Exhausted)?;
        self.cursor += 1;
        match step {
            Step::Sample(sample) => {
                self.current = Some(sample);
                Ok(sample.acc)
            },
            Step::Fail => {
                self.current = None;
                Err(FakeBusError::Nack)
            },
        }
    }

    fn read_gyro(&mut self) -> Result<Vector, Self::Error> {
        self.current.map(|s| s.gyro).ok_or(FakeBusError::Nack)
    }

    fn read_mag(&mut self) -> Result<Vector, Self::Error> {
        self.current.map(|s| s.mag).ok_or(FakeBusError::Nack)
    }
}
