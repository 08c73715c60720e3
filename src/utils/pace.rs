//! Request pacing
//!
//! Fixed courtesy pauses between requests so a long run does not hammer the
//! remote service. Behind a trait so tests run without wall-clock waits.

use std::thread;
use std::time::Duration;

pub(crate) trait Pacer {
    /// Pause after each receipt download.
    fn after_receipt(&self);
    /// Pause between successive feed page fetches.
    fn after_page(&self);
}

pub(crate) struct SleepPacer {
    receipt_delay: Duration,
    page_delay: Duration,
}

impl SleepPacer {
    pub(crate) fn new(receipt_delay: Duration, page_delay: Duration) -> Self {
        Self {
            receipt_delay,
            page_delay,
        }
    }
}

impl Pacer for SleepPacer {
    fn after_receipt(&self) {
        thread::sleep(self.receipt_delay);
    }

    fn after_page(&self) {
        thread::sleep(self.page_delay);
    }
}
