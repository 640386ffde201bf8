use crate::domain::model::RollOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a roll is rendered in chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// `Rolling 2d6+2: [3, 5] + 2 = **10**`
    #[default]
    Plain,
    /// Boxed table in a code block with a success tier row
    Table,
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatStyle::Plain => f.write_str("plain"),
            FormatStyle::Table => f.write_str("table"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessTier {
    Failed,
    MixedSuccess,
    FullSuccess,
}

impl SuccessTier {
    pub fn from_total(total: i64) -> Self {
        match total {
            i64::MIN..=6 => SuccessTier::Failed,
            7..=9 => SuccessTier::MixedSuccess,
            _ => SuccessTier::FullSuccess,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuccessTier::Failed => "FAILED",
            SuccessTier::MixedSuccess => "MIXED SUCCESS",
            SuccessTier::FullSuccess => "FULL SUCCESS",
        }
    }
}

impl fmt::Display for SuccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn format_result(outcome: &RollOutcome, style: FormatStyle) -> String {
    match style {
        FormatStyle::Plain => format_plain(outcome),
        FormatStyle::Table => format_table(outcome),
    }
}

pub fn format_plain(outcome: &RollOutcome) -> String {
    let rolls = outcome
        .rolls()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let modifier = match outcome.modifier() {
        0 => String::new(),
        m if m > 0 => format!(" + {}", m),
        m => format!(" - {}", m.unsigned_abs()),
    };

    format!(
        "Rolling {}: [{}]{} = **{}**",
        outcome.notation(),
        rolls,
        modifier,
        outcome.total()
    )
}

/// Render the roll as a boxed table:
///
/// ```text
/// +-----------------+
/// |      2d6+2      |
/// +----------+------+
/// | rolls    | sum  |
/// +----------+------+
/// | 3 5 (+2) | [10] |
/// +----------+------+
/// |  FULL SUCCESS   |
/// +-----------------+
/// ```
pub fn format_table(outcome: &RollOutcome) -> String {
    let title = outcome.notation();
    let tier = SuccessTier::from_total(outcome.total()).label();

    let mut rolls_cell = outcome
        .rolls()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    if outcome.modifier() != 0 {
        rolls_cell.push_str(&format!(" ({:+})", outcome.modifier()));
    }
    let sum_cell = format!("[{}]", outcome.total());

    let mut rolls_width = "rolls".len().max(rolls_cell.len());
    let sum_width = "sum".len().max(sum_cell.len());

    // 跨欄列要放得下標題與等級
    let widest_span = title.len().max(tier.len());
    let span = rolls_width + sum_width + 3;
    if widest_span > span {
        rolls_width += widest_span - span;
    }
    let span = rolls_width + sum_width + 3;

    let full_rule = format!("+{}+", "-".repeat(span + 2));
    let column_rule = format!(
        "+{}+{}+",
        "-".repeat(rolls_width + 2),
        "-".repeat(sum_width + 2)
    );
    let spanning = |text: &str| format!("| {:^width$} |", text, width = span);
    let columns = |left: &str, right: &str| {
        format!(
            "| {:<lw$} | {:<rw$} |",
            left,
            right,
            lw = rolls_width,
            rw = sum_width
        )
    };

    let lines = [
        full_rule.clone(),
        spanning(title),
        column_rule.clone(),
        columns("rolls", "sum"),
        column_rule.clone(),
        columns(&rolls_cell, &sum_cell),
        column_rule,
        spanning(tier),
        full_rule,
    ];

    format!("```\n{}\n```", lines.join("\n"))
}
