//! Judge request assembly: turn one execution trace into the bounded
//! two-message payload the external judge consumes.

mod evidence;
mod trace;
mod verdict;

pub use evidence::{encode_screenshot, select_recent};
pub use trace::Trace;
pub use verdict::JudgeVerdict;

use crate::config::JudgeConfig;
use crate::error::{JudgeError, PromptError};
use crate::llm::{ContentPart, JudgeMessage};
use crate::prompt::{TemplateEngine, build_judge_user_prompt, judge_system_rubric};
use crate::utils::text::truncate;

/// Character bound applied to each text field before assembly.
pub const MAX_FIELD_CHARS: usize = 40_000;

/// Assemble the judge request for one execution trace.
///
/// Returns exactly one system message (the fixed rubric) followed by one
/// user message: the interpolated prompt text first, then one image part
/// per surviving screenshot, in selection order. Task, joined steps, and
/// final result are each head-truncated to [`MAX_FIELD_CHARS`]. Unreadable
/// screenshots are dropped with a warning and never fail the assembly; a
/// malformed config fails fast.
pub fn construct_judge_messages(
    trace: &Trace,
    config: &JudgeConfig,
) -> Result<Vec<JudgeMessage>, JudgeError> {
    config.validate()?;

    let task = truncate(&trace.task, MAX_FIELD_CHARS, false);
    let final_result = truncate(&trace.final_result, MAX_FIELD_CHARS, false);
    let steps_joined = trace.joined_steps();
    let trajectory = truncate(&steps_joined, MAX_FIELD_CHARS, false);

    let selected = select_recent(&trace.screenshots, config.max_images());
    let images: Vec<_> = selected
        .iter()
        .filter_map(|path| encode_screenshot(path))
        .collect();

    let mut engine = TemplateEngine::new().map_err(render_error)?;
    let user_text = build_judge_user_prompt(
        &mut engine,
        &task,
        &trajectory,
        &final_result,
        images.len(),
    )
    .map_err(render_error)?;

    let mut parts = Vec::with_capacity(images.len() + 1);
    parts.push(ContentPart::Text { text: user_text });
    parts.extend(images.into_iter().map(|image| ContentPart::Image { image }));

    Ok(vec![
        JudgeMessage::system(judge_system_rubric()),
        JudgeMessage::user(parts),
    ])
}

fn render_error(err: anyhow::Error) -> JudgeError {
    JudgeError::Prompt(PromptError::Render(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{MessageContent, MessageRole};

    #[test]
    fn always_system_then_user() {
        let trace = Trace::new("t", "r");
        let messages = construct_judge_messages(&trace, &JudgeConfig::default()).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
        assert!(matches!(messages[0].content, MessageContent::Text(_)));
        assert!(matches!(messages[1].content, MessageContent::Parts(_)));
    }

    #[test]
    fn unreadable_screenshots_never_fail_assembly() {
        let trace = Trace::new("t", "r")
            .with_screenshots(["/nope/1.png", "/nope/2.png", "/nope/3.png"]);
        let messages = construct_judge_messages(&trace, &JudgeConfig::default()).unwrap();
        assert!(messages[1].image_parts().is_empty());
    }

    #[test]
    fn invalid_config_fails_fast() {
        let trace = Trace::new("t", "r");
        let err = construct_judge_messages(&trace, &JudgeConfig::new(-5)).unwrap_err();
        assert!(matches!(err, JudgeError::Config(_)));
    }

    #[test]
    fn image_count_never_exceeds_cap() {
        let shots: Vec<String> = (0..30).map(|i| format!("/nope/{i}.png")).collect();
        let trace = Trace::new("t", "r").with_screenshots(shots);
        let messages = construct_judge_messages(&trace, &JudgeConfig::default()).unwrap();
        assert!(messages[1].image_parts().len() <= 10);
    }
}
