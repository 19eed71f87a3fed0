use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `probe.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Timer cadences for sampling and rendering.
    pub sampling: SamplingConfig,
    /// Sparkline geometry.
    pub graph: GraphConfig,
    /// Which sensor sources to poll.
    pub sources: SourcesConfig,
}

/// Timer cadences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Sensor poll interval in milliseconds.
    pub interval_ms: u64,
    /// Screen redraw interval in milliseconds.
    pub render_interval_ms: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        // 10 Hz sampling, 2 Hz redraw.
        Self {
            interval_ms:        100,
            render_interval_ms: 500,
        }
    }
}

/// Geometry of the per-row sparkline graphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Horizontal pixels allotted to each sample.
    pub column_width: f64,
    /// Vertical padding reserved at the top and bottom of the drawing rect
    /// so extreme points never touch the edge.
    pub inset: f64,
    /// Sparkline width in terminal columns.
    pub columns: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            column_width: 2.0,
            inset:        2.0,
            columns:      40,
        }
    }
}

/// Which built-in sensor sources are polled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Synthesized device-motion feed (accelerometer, gyroscope, attitude).
    pub motion: bool,
    /// Live host stats via sysinfo (CPU, memory).
    pub host: bool,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            motion: true,
            host:   true,
        }
    }
}
