use crate::application::dto::Toast;

/// Host channel for transient user-facing alerts.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, toast: Toast);
}
