use crate::SensorSource;
use probe_core::Reading;
use sysinfo::System;

/// Live host stats via sysinfo: CPU load and memory pressure.
///
/// Gives the inspector something real to show on machines without motion
/// hardware.
pub struct HostSource {
    sys:     System,
    /// CPU usage is a delta between refreshes; the very first poll has no
    /// baseline and is withheld.
    primed:  bool,
}

impl HostSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sys:    System::new(),
            primed: false,
        }
    }
}

impl Default for HostSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for HostSource {
    fn label(&self) -> &str {
        "host"
    }

    fn poll(&mut self) -> Vec<Reading> {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        if !self.primed {
            self.primed = true;
            return Vec::new(); // no data yet
        }

        let cpus = self.sys.cpus();
        let cpu_average = if cpus.is_empty() {
            0.0
        } else {
            cpus.iter().map(|c| f64::from(c.cpu_usage())).sum::<f64>() / cpus.len() as f64
        };

        let memory_percent = if self.sys.total_memory() == 0 {
            0.0
        } else {
            self.sys.used_memory() as f64 / self.sys.total_memory() as f64 * 100.0
        };

        vec![
            Reading::new("host", "cpu", cpu_average),
            Reading::new("host", "memory", memory_percent),
        ]
    }
}
