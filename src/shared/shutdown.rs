//! Graceful shutdown plumbing for the MotoTrack server.
//!
//! A [`ShutdownSignal`] is handed to every long-running task; triggering
//! it once (from an OS signal or programmatically) wakes them all. The
//! [`ShutdownCoordinator`] owns the signal and the grace period the
//! server is allowed to take while draining.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::sync::broadcast;

/// Cloneable one-shot shutdown notification.
#[derive(Clone)]
pub struct ShutdownSignal {
    sender: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1);
        Self {
            sender,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Request shutdown. Later calls are no-ops.
    pub fn trigger(&self) {
        if !self.triggered.swap(true, Ordering::SeqCst) {
            info!("🛑 Shutdown signal triggered");
            let _ = self.sender.send(());
        }
    }

    /// Resolve once shutdown has been requested.
    ///
    /// Safe to call after the trigger: the flag is checked after
    /// subscribing, so a signal that fired earlier is not missed.
    pub async fn wait(&self) {
        let mut rx = self.sender.subscribe();
        if self.is_triggered() {
            return;
        }
        let _ = rx.recv().await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Block until the process receives a termination request from the OS.
/// Returns the human-readable name of the signal for logging.
#[cfg(unix)]
async fn wait_for_os_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT (Ctrl+C)",
    }
}

#[cfg(not(unix))]
async fn wait_for_os_signal() -> &'static str {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    "Ctrl+C"
}

/// Owns the shutdown signal and the drain grace period.
pub struct ShutdownCoordinator {
    signal: ShutdownSignal,
    timeout_secs: u64,
}

impl ShutdownCoordinator {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            signal: ShutdownSignal::new(),
            timeout_secs,
        }
    }

    /// Get the shutdown signal for sharing with components.
    pub fn signal(&self) -> ShutdownSignal {
        self.signal.clone()
    }

    /// How long the server may take to drain before being cut off.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Spawn a background task that triggers shutdown on SIGTERM/SIGINT.
    pub fn start_signal_listener(&self) {
        let signal = self.signal.clone();
        tokio::spawn(async move {
            let name = wait_for_os_signal().await;
            info!("📡 Received {}", name);
            signal.trigger();
        });
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new(30)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_sets_flag_once() {
        let signal = ShutdownSignal::new();
        assert!(!signal.is_triggered());

        signal.trigger();
        assert!(signal.is_triggered());

        // A second trigger is a no-op
        signal.trigger();
        assert!(signal.is_triggered());
    }

    #[tokio::test]
    async fn wait_resolves_after_trigger() {
        let signal = ShutdownSignal::new();
        let waiter = signal.clone();

        let task = tokio::spawn(async move { waiter.wait().await });
        signal.trigger();

        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("wait() should resolve once triggered")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_resolves_when_already_triggered() {
        let signal = ShutdownSignal::new();
        signal.trigger();

        // A waiter arriving after the broadcast must still resolve
        tokio::time::timeout(Duration::from_secs(1), signal.wait())
            .await
            .expect("wait() should resolve immediately");
    }

    #[test]
    fn coordinator_exposes_grace_period() {
        let coordinator = ShutdownCoordinator::new(12);
        assert_eq!(coordinator.timeout(), Duration::from_secs(12));
    }
}
