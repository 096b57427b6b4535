//! On-target clock backed by the embassy time driver

use embassy_time::{Duration, Instant};

use crate::Clock;

/// [`Clock`] reading the embassy time driver.
///
/// Sleeping busy-waits with [`embassy_time::block_for`]; the loop is
/// single-threaded and has nothing else to run meanwhile.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
