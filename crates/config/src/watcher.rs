use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Editors often produce a burst of write events for one save; changes inside
/// this window collapse into a single reload notification.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Watches the config file and fires a notification on every save, driving
/// live reload in the main loop.
///
/// # Example
/// ```no_run
/// # use probe_config::ConfigWatcher;
/// # async fn demo() {
/// let (_watcher, mut rx) = ConfigWatcher::spawn("/home/user/.config/probe/probe.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed — reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let path = path.as_ref().to_path_buf();
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(watch_loop(path.clone(), tx));

        (Self { path }, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Bridge notify's synchronous callback into an async channel the loop below
/// can await on.
fn start_watcher(
    path: &Path,
    events: mpsc::Sender<notify::Result<Event>>,
) -> notify::Result<RecommendedWatcher> {
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = events.blocking_send(res);
        },
        notify::Config::default().with_poll_interval(Duration::from_secs(2)),
    )?;
    watcher.watch(path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    // Must stay alive for the duration of the loop; dropping it unwatches.
    let _watcher = match start_watcher(&path, event_tx) {
        Ok(w) => w,
        Err(e) => {
            error!("Cannot watch '{}': {e}", path.display());
            return;
        }
    };

    info!("Watching config file: {}", path.display());

    let mut last_fire: Option<Instant> = None;
    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) if matches!(e.kind, EventKind::Modify(_) | EventKind::Create(_)) => {
                if last_fire.is_some_and(|t| t.elapsed() < DEBOUNCE) {
                    continue;
                }
                last_fire = Some(Instant::now());
                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
