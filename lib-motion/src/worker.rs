use std::{io, sync::Arc, thread::{self, JoinHandle}};
use crate::*;

/// Dedicated thread driving [`MotionDetection::run`]. Dropping the worker shuts the loop down and
/// waits for the thread to exit.
///
pub struct Worker<S>
where
    S: SensorChannel + Send + 'static,
{
    detection: Arc<MotionDetection<S>>,
    handle: Option<JoinHandle<()>>,
}

/// Spawns the sampling loop on its own thread. The loop starts out idle until the detection is
/// initialized and started.
///
pub fn spawn<S>(detection: Arc<MotionDetection<S>>) -> io::Result<Worker<S>>
where
    S: SensorChannel + Send + 'static,
{
    let looped = detection.clone();
    let handle = thread::Builder::new()
        .name("motion_detection".into())
        .spawn(move || looped.run(thread::sleep))?;

    Ok(Worker { detection, handle: Some(handle) })
}

impl<S> Worker<S>
where
    S: SensorChannel + Send + 'static,
{
    pub fn detection(&self) -> &Arc<MotionDetection<S>> {
        &self.detection
    }

    /// Requests the loop to exit and waits until its last tick has completed.
    ///
    pub fn shutdown(mut self) {
        self.join();
    }

    fn join(&mut self) {
        self.detection.shutdown();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Motion detection thread panicked");
            }
        }
    }
}

impl<S> Drop for Worker<S>
where
    S: SensorChannel + Send + 'static,
{
    fn drop(&mut self) {
        self.join();
    }
}
