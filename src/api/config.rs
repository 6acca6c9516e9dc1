// src/api/config.rs

/// Default URL of the local text-generation server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate";

/// Instruction placed in front of every report before it is sent.
pub const PROMPT_PREFIX: &str = "请补全并优化如下代码问题：";

/// Token budget requested for each suggestion.
pub const DEFAULT_MAX_TOKENS: u32 = 256;

/// Builds the prompt sent for a single report.
pub fn build_prompt(report: &str) -> String {
    format!("{}\n{}", PROMPT_PREFIX, report)
}
