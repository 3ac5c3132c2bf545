use serde::{Deserialize, Deserializer};

/// Webhook payload posted by the media-request service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Notification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub notification_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub event: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,

    #[serde(default)]
    pub media: Option<Media>,

    #[serde(default)]
    pub request: Option<RequestInfo>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub extra: Vec<ExtraData>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Media {
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: String,

    #[serde(rename = "tmdbId", default, deserialize_with = "null_as_default")]
    pub tmdb_id: String,

    #[serde(rename = "tvdbId", default, deserialize_with = "null_as_default")]
    pub tvdb_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RequestInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: String,

    #[serde(rename = "requestedBy_email", default, deserialize_with = "null_as_default")]
    pub requested_by_email: String,

    #[serde(
        rename = "requestedBy_username",
        default,
        deserialize_with = "null_as_default"
    )]
    pub requested_by_username: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExtraData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    MediaPending,
    MediaApproved,
    MediaDeclined,
    MediaAvailable,
    MediaFailed,
    Other(String),
}

impl NotificationType {
    /// Matching is case-insensitive; anything unrecognised is kept verbatim.
    pub fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "MEDIA_PENDING" => NotificationType::MediaPending,
            "MEDIA_APPROVED" => NotificationType::MediaApproved,
            "MEDIA_DECLINED" => NotificationType::MediaDeclined,
            "MEDIA_AVAILABLE" => NotificationType::MediaAvailable,
            "MEDIA_FAILED" => NotificationType::MediaFailed,
            _ => NotificationType::Other(raw.to_string()),
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            NotificationType::MediaPending => Some("New Media Request"),
            NotificationType::MediaApproved => Some("Request Approved"),
            NotificationType::MediaDeclined => Some("Request Declined"),
            NotificationType::MediaAvailable => Some("Now Available"),
            NotificationType::MediaFailed => Some("Download Failed"),
            NotificationType::Other(_) => None,
        }
    }
}

impl Notification {
    pub fn kind(&self) -> NotificationType {
        NotificationType::parse(&self.notification_type)
    }

    /// Email of the user behind the request, empty when there is no request.
    pub fn requester_email(&self) -> &str {
        self.request
            .as_ref()
            .map(|r| r.requested_by_email.as_str())
            .unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
