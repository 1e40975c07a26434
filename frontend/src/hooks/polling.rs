use gloo_timers::callback::Interval;
use std::time::Duration;

/// Owns a repeating timer. Dropping or cancelling the handle stops it.
pub struct PollingHandle {
    interval: Option<Interval>,
}

impl PollingHandle {
    pub fn start<F>(period: Duration, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Self {
            interval: Some(Interval::new(millis, tick)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
