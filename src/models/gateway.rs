use serde::Serialize;

/// Body of `POST /api/send` on the Whisper gateway.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutboundMessage {
    #[serde(rename = "device")]
    pub device_id: String,
    pub message: String,
    pub targets: Vec<String>,
}
