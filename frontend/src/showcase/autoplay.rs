use crate::utils::platform::Timers;

use super::carousel::CarouselState;

/// The autoplay interval for the carousel. At most one timer runs at a time,
/// and whatever is running is cancelled on `stop` or drop.
pub struct AutoplayTimer<T: Timers> {
    timers: T,
    running: Option<T::Handle>,
}

impl<T: Timers> AutoplayTimer<T> {
    pub fn new(timers: T) -> Self {
        Self {
            timers,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Cancels the current timer, then arms a new one if the carousel wants
    /// autoplay. Returns whether a timer is now running.
    pub fn sync<F>(&mut self, carousel: &CarouselState, interval_ms: u32, tick: F) -> bool
    where
        F: Fn() + 'static,
    {
        self.stop();
        if !carousel.should_autoplay() {
            return false;
        }
        log::debug!(
            "Starting autoplay every {}ms over {} projects",
            interval_ms,
            carousel.len()
        );
        self.running = Some(self.timers.start_interval(interval_ms, Box::new(tick)));
        true
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.running.take() {
            log::debug!("Stopping autoplay");
            self.timers.cancel(handle);
        }
    }
}

impl<T: Timers> Drop for AutoplayTimer<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
