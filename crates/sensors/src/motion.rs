use crate::SensorSource;
use probe_core::Reading;

/// Synthesized device-motion feed.
///
/// Stands in for a real IMU on hosts without one: emits the classic
/// device-motion parameter groups (accelerometer, gyroscope, attitude,
/// gravity) as smooth deterministic waveforms, so every downstream stage —
/// history, windowing, sparklines — sees realistic moving data.
#[derive(Debug)]
pub struct MotionSource {
    /// Seconds advanced per poll.
    dt:   f64,
    tick: u64,
}

impl MotionSource {
    /// `dt` is the simulated time step per poll, normally the sampling
    /// interval in seconds.
    #[must_use]
    pub fn new(dt: f64) -> Self {
        Self { dt, tick: 0 }
    }

    fn attitude(t: f64) -> (f64, f64, f64) {
        let roll = 0.4 * (0.25 * t).sin();
        let pitch = 0.3 * (0.17 * t).cos();
        let yaw = (0.05 * t) % std::f64::consts::TAU;
        (roll, pitch, yaw)
    }
}

impl SensorSource for MotionSource {
    fn label(&self) -> &str {
        "motion"
    }

    fn poll(&mut self) -> Vec<Reading> {
        let t = self.tick as f64 * self.dt;
        self.tick += 1;

        let (roll, pitch, yaw) = Self::attitude(t);

        // Gravity unit vector tilted by the current attitude; z points down
        // when the device lies flat.
        let gravity_x = pitch.sin();
        let gravity_y = -roll.sin() * pitch.cos();
        let gravity_z = -roll.cos() * pitch.cos();

        vec![
            Reading::new("accelerometer", "x", gravity_x + 0.02 * (1.3 * t).sin()),
            Reading::new("accelerometer", "y", gravity_y + 0.02 * (0.9 * t).cos()),
            Reading::new("accelerometer", "z", gravity_z + 0.01 * (2.1 * t).sin()),
            Reading::new("gyroscope", "x", 0.1 * (0.25 * t).cos()),
            Reading::new("gyroscope", "y", -0.05 * (0.17 * t).sin()),
            Reading::new("gyroscope", "z", 0.05 * (0.4 * t).cos()),
            Reading::new("attitude", "roll", roll),
            Reading::new("attitude", "pitch", pitch),
            Reading::new("attitude", "yaw", yaw),
            Reading::new("gravity", "x", gravity_x),
            Reading::new("gravity", "y", gravity_y),
            Reading::new("gravity", "z", gravity_z),
        ]
    }
}
