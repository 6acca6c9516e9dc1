pub mod generate;

/// The two report slots of a review comment, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Lint,
    Format,
}

impl ReportKind {
    /// Bold label that opens this report's section in the comment.
    pub fn section_label(&self) -> &'static str {
        match self {
            ReportKind::Lint => "**Lint分析建议：**",
            ReportKind::Format => "**格式化分析与补全：**",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::Lint => "lint",
            ReportKind::Format => "format",
        }
    }
}
