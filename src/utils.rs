use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    clients::gateway::{DeliveryError, GatewayClient},
    config::Config,
    models::notification::{Notification, NotificationType},
};

/// Result of relaying one webhook.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub attempted: usize,
    pub failures: Vec<DeliveryError>,
}

impl DispatchReport {
    /// The failure that decides the webhook response, if any.
    pub fn first_failure(&self) -> Option<&DeliveryError> {
        self.failures.first()
    }

    fn record(&mut self, result: Result<(), DeliveryError>) {
        self.attempted += 1;
        if let Err(e) = result {
            self.failures.push(e);
        }
    }
}

/// Decides which messages a notification produces and sends them.
///
/// A failed send never stops the remaining ones. Pending requests are sent
/// once per admin, each time to the requester-derived target.
pub async fn process_notification(
    trace_id: Uuid,
    config: &Config,
    gateway: &GatewayClient,
    notification: &Notification,
) -> DispatchReport {
    let mut report = DispatchReport::default();
    let kind = notification.kind();

    let Some(title) = kind.title() else {
        info!(
            %trace_id,
            notification_type = %notification.notification_type,
            "Unhandled notification type, nothing to send"
        );
        return report;
    };

    match kind {
        NotificationType::MediaPending => {
            if notification.request.is_some() {
                for admin in &config.admins {
                    let result = gateway.send(title, notification).await;
                    if let Err(e) = &result {
                        error!(%trace_id, admin = %admin, error = %e, "Failed to notify admin");
                    }
                    report.record(result);
                }
            }
        }
        NotificationType::MediaApproved | NotificationType::MediaDeclined => {
            if notification.request.is_some() {
                report.record(send_logged(trace_id, gateway, title, notification).await);
            }
        }
        NotificationType::MediaAvailable => {
            if notification.media.is_some() {
                report.record(send_logged(trace_id, gateway, title, notification).await);
            }
        }
        NotificationType::MediaFailed => {
            report.record(send_logged(trace_id, gateway, title, notification).await);
        }
        NotificationType::Other(_) => {}
    }

    if report.attempted == 0 {
        warn!(
            %trace_id,
            notification_type = %notification.notification_type,
            "No recipients or required record missing, nothing sent"
        );
    }

    report
}

async fn send_logged(
    trace_id: Uuid,
    gateway: &GatewayClient,
    title: &str,
    notification: &Notification,
) -> Result<(), DeliveryError> {
    let result = gateway.send(title, notification).await;
    if let Err(e) = &result {
        error!(%trace_id, error = %e, "Failed to notify requester");
    }
    result
}
