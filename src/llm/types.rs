use serde::{Deserialize, Serialize};

/// Media type stamped on every encoded screenshot. Callers supply PNG
/// artifacts; no format sniffing is performed.
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// A screenshot encoded for transport: base64 payload plus fixed media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    pub media_type: String,
    pub data: String,
}

impl EncodedImage {
    pub fn png(data: impl Into<String>) -> Self {
        Self {
            media_type: PNG_MEDIA_TYPE.to_string(),
            data: data.into(),
        }
    }

    /// Data URI consumable by chat-style multimodal APIs.
    #[must_use]
    pub fn url(&self) -> String {
        let Self { media_type, data } = self;
        format!("data:{media_type};base64,{data}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    Image { image: EncodedImage },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
}

/// Message content is either one plain string or an ordered part list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeMessage {
    pub role: MessageRole,
    pub content: MessageContent,
}

impl JudgeMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(parts: Vec<ContentPart>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Parts(parts),
        }
    }

    /// Image parts in content order, empty for plain-text content.
    #[must_use]
    pub fn image_parts(&self) -> Vec<&EncodedImage> {
        match &self.content {
            MessageContent::Text(_) => Vec::new(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Image { image } => Some(image),
                    ContentPart::Text { .. } => None,
                })
                .collect(),
        }
    }
}
