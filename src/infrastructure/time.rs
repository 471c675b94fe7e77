use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock. Tests swap in fixed or stepping clocks through the port.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
