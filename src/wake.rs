//! Wake event shared between the wake interrupt and the suspend primitive.
//!
//! The interrupt handler only calls [`WakeFlag::raise`]; it computes
//! nothing and touches no simulation state. The suspending context clears
//! the flag before powering down so a stale edge cannot cut the next
//! suspend short.

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

/// Edge-triggered wake event without payload.
pub struct WakeFlag {
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl WakeFlag {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Marks a wake event. Safe to call from interrupt context.
    pub fn raise(&self) {
        self.signal.signal(());
    }

    /// Drops any outstanding wake event.
    pub fn clear(&self) {
        self.signal.reset();
    }

    pub fn is_raised(&self) -> bool {
        self.signal.signaled()
    }

    /// Waits for the next wake event and consumes it.
    pub async fn wait(&self) {
        self.signal.wait().await;
    }
}

impl Default for WakeFlag {
    fn default() -> Self {
        Self::new()
    }
}
