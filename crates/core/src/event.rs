use crate::reading::ReadingBatch;

/// All messages (events) that can flow through the application event loop.
///
/// Sources:
/// - Sampler task          → `Batch`
/// - Config watcher task   → `ConfigReloaded`
/// - Render timer          → `RenderTick`
/// - Ctrl-C handler        → `Shutdown`
#[derive(Debug, Clone)]
pub enum Message {
    /// Fresh batch of readings from the background sampler task.
    Batch(ReadingBatch),
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
    /// Render timer fired — redraw all parameter rows.
    RenderTick,
    /// Graceful shutdown requested.
    Shutdown,
}
