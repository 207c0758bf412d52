#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod error;
pub mod judge;
pub mod llm;
pub mod prompt;
pub mod utils;

pub use config::JudgeConfig;
pub use error::{ConfigError, JudgeError, PromptError};
pub use judge::{JudgeVerdict, Trace, construct_judge_messages};
pub use llm::{ContentPart, EncodedImage, JudgeMessage, MessageContent, MessageRole};
