//! Event loop for the inspector.
//!
//! Wires together all background tasks and folds their output into the
//! [`Message`] bus:
//! - Sampler task (sensor sources polled at a fixed interval)
//! - Config file watcher (live reload on change)
//! - Render timer (redraws the parameter rows)
//! - Ctrl-C handler (graceful shutdown)

use probe_config::{ConfigWatcher, GraphConfig, ProbeConfig};
use probe_core::{Message, ProbeError, ReadingBatch, Result};
use probe_graph::{sparkline, GraphMapper};
use probe_history::SharedHistory;
use probe_sensors::{HostSource, MotionSource, SensorSource};
use std::io::Write;
use std::time::Duration;
use tracing::{info, warn};

/// Clear screen + cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

pub async fn run() -> Result<()> {
    let config_path = probe_config::default_path();
    let config = probe_config::load(&config_path).unwrap_or_default();

    let mut app = App::new(config);

    let mut batches = probe_sensors::spawn_sampler(
        app.config.sampling.interval_ms,
        build_sources(&app.config),
    );
    let (_watcher, mut config_rx) = ConfigWatcher::spawn(&config_path);
    let mut render_tick =
        tokio::time::interval(Duration::from_millis(app.config.sampling.render_interval_ms));

    loop {
        let message = tokio::select! {
            Some(batch) = batches.recv() => Message::Batch(batch),
            _ = render_tick.tick()       => Message::RenderTick,
            Some(()) = config_rx.recv()  => Message::ConfigReloaded,
            _ = tokio::signal::ctrl_c()  => Message::Shutdown,
        };

        match message {
            Message::Batch(batch) => app.ingest(&batch),
            Message::RenderTick => app.render()?,
            Message::ConfigReloaded => match probe_config::load(&config_path) {
                Ok(new_config) => {
                    info!("Config reloaded");
                    app.apply_config(new_config);
                    render_tick = tokio::time::interval(Duration::from_millis(
                        app.config.sampling.render_interval_ms,
                    ));
                }
                Err(e) => warn!("Keeping old config: {e}"),
            },
            Message::Shutdown => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

fn build_sources(config: &ProbeConfig) -> Vec<Box<dyn SensorSource>> {
    let dt = config.sampling.interval_ms as f64 / 1000.0;
    let mut sources: Vec<Box<dyn SensorSource>> = Vec::new();
    if config.sources.motion {
        sources.push(Box::new(MotionSource::new(dt)));
    }
    if config.sources.host {
        sources.push(Box::new(HostSource::new()));
    }
    sources
}

/// Inspector state between events.
struct App {
    config:    ProbeConfig,
    history:   SharedHistory,
    mapper:    GraphMapper,
    /// History keys in first-seen order, so rows never jump around as new
    /// parameters appear.
    row_order: Vec<String>,
}

impl App {
    fn new(config: ProbeConfig) -> Self {
        let mapper = GraphMapper::from_config(&config.graph);
        Self {
            config,
            history: SharedHistory::new(),
            mapper,
            row_order: Vec::new(),
        }
    }

    /// Sampling cadence changes require a restart of the sampler task;
    /// graph geometry and render cadence apply live.
    fn apply_config(&mut self, config: ProbeConfig) {
        if config.sampling.interval_ms != self.config.sampling.interval_ms {
            warn!("sampling.interval_ms changed; restart to apply");
        }
        self.mapper = GraphMapper::from_config(&config.graph);
        self.config = config;
    }

    /// Append every reading of the batch into the history.
    fn ingest(&mut self, batch: &ReadingBatch) {
        for reading in &batch.readings {
            let key = reading.key();
            if !self.row_order.contains(&key) {
                self.row_order.push(key.clone());
            }
            self.history.append(&key, reading.value);
        }
    }

    /// Redraw all parameter rows: group headers, latest value, sparkline.
    fn render(&self) -> Result<()> {
        let mut out = String::from(CLEAR);
        render_rows(&mut out, &self.row_order, &self.history, &self.mapper, &self.config.graph);

        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(out.as_bytes())
            .and_then(|()| lock.flush())
            .map_err(|e| ProbeError::Render(e.to_string()))
    }
}

/// Format one row per known parameter into `out`, with a header line
/// whenever the group changes.
fn render_rows(
    out: &mut String,
    row_order: &[String],
    history: &SharedHistory,
    mapper: &GraphMapper,
    graph: &GraphConfig,
) {
    use std::fmt::Write;

    let mut current_group = "";
    for key in row_order {
        let Some(series) = history.snapshot(key) else {
            continue;
        };
        let (group, name) = key.split_once('/').unwrap_or(("", key));

        if group != current_group {
            let _ = writeln!(out, "── {group} ──");
            current_group = group;
        }

        let latest = series.last().copied().unwrap_or(f64::NAN);
        let line = sparkline::render_line(mapper, &series, graph.columns);
        let _ = writeln!(out, "  {name:<10} {latest:>10.3}  {line}");
    }
}
