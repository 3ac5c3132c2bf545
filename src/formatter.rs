//! Plain-text rendering of webhook notifications for SMS delivery.

use crate::models::notification::{Media, Notification, RequestInfo};

/// Local part of an email address, or an empty string when there is no `@`.
pub fn extract_prefix(email: &str) -> &str {
    email.split_once('@').map(|(local, _)| local).unwrap_or_default()
}

/// Renders `notification` under `title`, one line per populated field:
/// title and subject, event, message, requester, media, then extra entries
/// in the order they arrived.
pub fn build_sms_message(title: &str, notification: &Notification) -> String {
    let mut lines: Vec<String> = Vec::new();

    if notification.subject.is_empty() {
        lines.push(title.to_string());
    } else {
        lines.push(format!("{} — {}", title, notification.subject));
    }

    if !notification.event.is_empty() {
        lines.push(notification.event.clone());
    }

    if !notification.message.is_empty() {
        lines.push(notification.message.clone());
    }

    if let Some(line) = notification.request.as_ref().and_then(requester_line) {
        lines.push(line);
    }

    if let Some(line) = notification.media.as_ref().and_then(media_line) {
        lines.push(line);
    }

    for entry in &notification.extra {
        lines.push(format!("{}: {}", entry.name, entry.value));
    }

    lines.join("\n").trim_end().to_string()
}

fn requester_line(request: &RequestInfo) -> Option<String> {
    if !request.requested_by_username.is_empty() {
        Some(format!("Requested by {}", request.requested_by_username))
    } else if !request.requested_by_email.is_empty() {
        Some(format!(
            "Requested by {}",
            extract_prefix(&request.requested_by_email)
        ))
    } else {
        None
    }
}

fn media_line(media: &Media) -> Option<String> {
    let meta = [media.media_type.as_str(), media.status.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" / ");

    let mut ids = Vec::new();
    if !media.tmdb_id.is_empty() {
        ids.push(format!("TMDB: {}", media.tmdb_id));
    }
    if !media.tvdb_id.is_empty() {
        ids.push(format!("TVDB: {}", media.tvdb_id));
    }
    let ids = ids.join(" ");

    match (meta.is_empty(), ids.is_empty()) {
        (true, true) => None,
        (false, true) => Some(meta),
        (true, false) => Some(ids),
        (false, false) => Some(format!("{} | {}", meta, ids)),
    }
}
