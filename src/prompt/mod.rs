mod builder;
mod engine;

pub use builder::{build_judge_user_prompt, judge_system_rubric};
pub use engine::TemplateEngine;
