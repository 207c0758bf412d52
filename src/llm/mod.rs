mod types;

pub use types::{ContentPart, EncodedImage, JudgeMessage, MessageContent, MessageRole};
