use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::HireRequestId;

/// Notification categories understood by the user-notification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Hire,
}

/// Envelope handed to the user-notification collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNotification {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub entity: String,
    pub path: String,
    #[serde(rename = "userId")]
    pub recipients: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Outbound interface to the user-notification service.
pub trait NotificationSink: Send + Sync {
    fn create(&self, notification: UserNotification) -> Result<(), NotificationError>;
}

static NOTIFICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_notification_id() -> String {
    let id = NOTIFICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("ntf-{id:06}")
}

/// Emits the user-facing notifications for terminal hire transitions.
///
/// Delivery is fire-and-forget: a sink failure is logged and never unwinds
/// the status change that triggered it.
pub struct NotificationDispatcher<N> {
    sink: Arc<N>,
}

impl<N> NotificationDispatcher<N>
where
    N: NotificationSink,
{
    pub fn new(sink: Arc<N>) -> Self {
        Self { sink }
    }

    /// Invoked when a hire request's status reaches `APPROVED`: one
    /// notification to the freelancer side (addressed by the hire request
    /// id) and one to the owning business.
    pub fn on_status_approved(&self, hire_request_id: &HireRequestId, business_id: &str) {
        self.deliver(UserNotification {
            id: next_notification_id(),
            message: "You are hired by business.".to_string(),
            kind: NotificationKind::Hire,
            entity: "FREELANCER".to_string(),
            path: "/freelancer/talent".to_string(),
            recipients: vec![hire_request_id.0.clone()],
            timestamp: Utc::now(),
        });

        self.deliver(UserNotification {
            id: next_notification_id(),
            message: "Talent is hired successfully.".to_string(),
            kind: NotificationKind::Hire,
            entity: "BUSINESS".to_string(),
            path: "/business/talent".to_string(),
            recipients: vec![business_id.to_string()],
            timestamp: Utc::now(),
        });
    }

    fn deliver(&self, notification: UserNotification) {
        if let Err(err) = self.sink.create(notification) {
            warn!(error = %err, "notification delivery failed");
        }
    }
}

/// Sink that records every notification it receives; backs the API binary
/// (pending a transport integration) and test assertions.
#[derive(Default, Clone)]
pub struct RecordingNotificationSink {
    events: Arc<Mutex<Vec<UserNotification>>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<UserNotification> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn create(&self, notification: UserNotification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("sink mutex poisoned")
            .push(notification);
        Ok(())
    }
}
