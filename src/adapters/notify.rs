use crate::domain::model::{Notification, Severity};
use crate::domain::ports::Notifier;
use std::sync::{Arc, Mutex};

/// Terminal toasts: successes on stdout, errors on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => {
                tracing::debug!("success notification: {}", message);
                println!("✅ {}", message);
            }
            Severity::Error => {
                tracing::debug!("error notification: {}", message);
                eprintln!("❌ {}", message);
            }
        }
    }
}

/// Routes notifications into the log only, for hosts that render their own UI
/// from the cart subscription.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => tracing::info!(severity = "success", "{}", message),
            Severity::Error => tracing::warn!(severity = "error", "{}", message),
        }
    }
}

/// Queues notifications for a host that renders its own toasts. Clones share
/// the same queue.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    queue: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.queue.lock().map(|q| q.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.queue.lock().ok().and_then(|q| q.last().cloned())
    }

    /// Hands back everything queued so far and empties the queue.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .map(|mut q| std::mem::take(&mut *q))
            .unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        tracing::debug!("queued {:?} notification: {}", severity, message);
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(Notification::new(severity, message));
        }
    }
}
