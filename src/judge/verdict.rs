use serde::{Deserialize, Serialize};

/// The answer shape the emitted rubric instructs the judge to return.
///
/// `failure_reason` is empty when the verdict is positive. Parsing and
/// scoring of judge replies happen downstream; this type only pins the
/// agreed field layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeVerdict {
    pub reasoning: String,
    pub verdict: bool,
    #[serde(default)]
    pub failure_reason: String,
}
