//! Recording review notifier for tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::ports::{NotificationError, ReviewNotification, ReviewNotifier};

/// Keeps every delivered notification. Can be switched to fail.
#[derive(Debug, Default)]
pub struct RecordingReviewNotifier {
    sent: RwLock<Vec<ReviewNotification>>,
    failing: AtomicBool,
}

impl RecordingReviewNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose deliveries always fail.
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.failing.store(true, Ordering::SeqCst);
        notifier
    }

    pub fn sent(&self) -> Vec<ReviewNotification> {
        self.sent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl ReviewNotifier for RecordingReviewNotifier {
    async fn notify(&self, notification: &ReviewNotification) -> Result<(), NotificationError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::Delivery("mail relay unreachable".to_string()));
        }
        self.sent
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
        Ok(())
    }
}
