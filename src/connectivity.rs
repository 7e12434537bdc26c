//! Host-reported network reachability
//!
//! Mirrors the become-reachable / become-unreachable signal forwarded by the
//! browser surface. The signal is trusted as-is: no debouncing, no
//! verification ping.

use std::sync::atomic::{AtomicBool, Ordering};

/// Single boolean gate consulted by the send precondition and exposed on the
/// read surface. Owned exclusively by this monitor; the session only reads.
pub struct ConnectivityMonitor {
    online: AtomicBool,
}

impl ConnectivityMonitor {
    pub fn new(initially_online: bool) -> Self {
        Self {
            online: AtomicBool::new(initially_online),
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }

    /// Apply a reachability transition from the host environment.
    pub fn set_online(&self, online: bool) {
        let was = self.online.swap(online, Ordering::Relaxed);
        if was != online {
            tracing::info!(online, "Connectivity changed");
        }
    }
}
