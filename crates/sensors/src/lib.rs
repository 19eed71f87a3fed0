pub mod host;
pub mod motion;

pub use host::HostSource;
pub use motion::MotionSource;

use probe_core::{Reading, ReadingBatch};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;

/// A pollable group of sensor parameters.
///
/// `poll` is called once per sampling tick and returns whatever the source
/// can read right now; an empty vec means "no data yet" and is not an error
/// (e.g. CPU usage needs two refreshes before the first meaningful value).
pub trait SensorSource: Send {
    /// Short identifier used in logs, e.g. `"motion"`.
    fn label(&self) -> &str;

    /// Read the current value of every parameter this source exposes.
    fn poll(&mut self) -> Vec<Reading>;
}

/// Spawn a background Tokio task that polls every source every `interval_ms`
/// milliseconds and forwards timestamped [`ReadingBatch`]es through the
/// returned channel.
///
/// The task stops automatically when the receiver is dropped.
pub fn spawn_sampler(
    interval_ms: u64,
    mut sources: Vec<Box<dyn SensorSource>>,
) -> mpsc::Receiver<ReadingBatch> {
    let (tx, rx) = mpsc::channel(4);
    let interval = Duration::from_millis(interval_ms);

    for source in &sources {
        tracing::info!("Sampling source '{}' every {interval_ms} ms", source.label());
    }

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;

            let readings: Vec<Reading> = sources.iter_mut().flat_map(|s| s.poll()).collect();

            if tx.send(ReadingBatch::new(readings)).await.is_err() {
                break; // all receivers dropped
            }
        }
    });

    rx
}
