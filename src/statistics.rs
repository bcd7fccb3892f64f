use crate::core::StepReport;

/// Running telemetry for one drive.
#[derive(Debug, Clone, Default)]
pub struct DriveStatistics {
    pub elapsed: f32,
    pub steps: u64,
    pub distance_travelled: f32,
    pub max_forward_speed: f32,
    pub max_reverse_speed: f32,
    pub blocked_steps: u64,
    /// Times the car went from moving freely to pressing against an obstacle.
    pub contacts: u32,

    in_contact: bool,
    speed_samples: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveSummary {
    pub elapsed: f32,
    pub distance_travelled: f32,
    pub average_speed: f32,
    pub max_forward_speed: f32,
    pub max_reverse_speed: f32,
    pub blocked_steps: u64,
    pub contacts: u32,
}

impl DriveStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &StepReport, dt: f32) {
        let dt = dt.max(0.0);
        let speed = report.state.speed;

        self.elapsed += dt;
        self.steps += 1;
        self.distance_travelled += report.distance;
        self.speed_samples += f64::from(speed.abs() * dt);

        if speed > self.max_forward_speed {
            self.max_forward_speed = speed;
        }
        if -speed > self.max_reverse_speed {
            self.max_reverse_speed = -speed;
        }

        if report.is_blocked() {
            self.blocked_steps += 1;
            if !self.in_contact {
                self.contacts += 1;
                tracing::info!(contacts = self.contacts, "car hit an obstacle");
            }
        }
        self.in_contact = report.is_blocked();
    }

    pub fn is_in_contact(&self) -> bool {
        self.in_contact
    }

    pub fn summary(&self) -> DriveSummary {
        let average_speed = if self.elapsed > 0.0 {
            (self.speed_samples / f64::from(self.elapsed)) as f32
        } else {
            0.0
        };

        DriveSummary {
            elapsed: self.elapsed,
            distance_travelled: self.distance_travelled,
            average_speed,
            max_forward_speed: self.max_forward_speed,
            max_reverse_speed: self.max_reverse_speed,
            blocked_steps: self.blocked_steps,
            contacts: self.contacts,
        }
    }

    pub fn log_summary(&self) {
        let summary = self.summary();
        tracing::info!(
            elapsed = format_args!("{:.1}s", summary.elapsed),
            distance = format_args!("{:.1}", summary.distance_travelled),
            average_speed = format_args!("{:.2}", summary.average_speed),
            top_speed = format_args!("{:.2}", summary.max_forward_speed),
            top_reverse = format_args!("{:.2}", summary.max_reverse_speed),
            contacts = summary.contacts,
            blocked_steps = summary.blocked_steps,
            "drive statistics"
        );
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
