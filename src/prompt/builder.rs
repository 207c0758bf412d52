use super::engine::TemplateEngine;
use tera::Context;

const JUDGE_SYSTEM_RUBRIC: &str = include_str!("templates/judge_system.txt");
const JUDGE_USER_TEMPLATE: &str = include_str!("templates/judge_user.txt");

const JUDGE_USER_NAME: &str = "judge_user";

const NO_TASK_FALLBACK: &str = "No task provided";
const NO_TRAJECTORY_FALLBACK: &str = "No agent trajectory provided";
const NO_RESULT_FALLBACK: &str = "No final result provided";

/// Fixed evaluation rubric handed verbatim as the system message.
///
/// Never rendered through the template engine: its response-format block
/// carries literal `{{` / `}}` that must reach the judge untouched.
pub fn judge_system_rubric() -> &'static str {
    JUDGE_SYSTEM_RUBRIC
}

/// Ensure the judge templates are registered in the engine.
fn ensure_defaults(engine: &mut TemplateEngine) -> anyhow::Result<()> {
    // `add_template` overwrites silently, so we always register.
    engine.add_template(JUDGE_USER_NAME, JUDGE_USER_TEMPLATE)
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Build the text part of the judge user message.
///
/// Empty fields are replaced by their fixed fallback literals; the
/// tag-delimited layout is a wire contract consumed downstream.
pub fn build_judge_user_prompt(
    engine: &mut TemplateEngine,
    task: &str,
    agent_trajectory: &str,
    final_result: &str,
    image_count: usize,
) -> anyhow::Result<String> {
    ensure_defaults(engine)?;

    let mut ctx = Context::new();
    ctx.insert("task", or_fallback(task, NO_TASK_FALLBACK));
    ctx.insert(
        "agent_trajectory",
        or_fallback(agent_trajectory, NO_TRAJECTORY_FALLBACK),
    );
    ctx.insert("final_result", or_fallback(final_result, NO_RESULT_FALLBACK));
    ctx.insert("image_count", &image_count);

    engine.render(JUDGE_USER_NAME, &ctx)
}
