//! Template rendering for CLI output using outstanding

use outstanding::{render_auto, Theme};
use serde::Serialize;
use zechtablib::{Entry, ExtensionField, FieldElement, Key, OperationTable};

/// Include templates at compile time
pub const TABLE_TEMPLATE: &str = include_str!("../templates/latex_table.jinja");
pub const LOG_TABLE_TEMPLATE: &str = include_str!("../templates/log_table.jinja");
pub const ARITH_TEMPLATE: &str = include_str!("../templates/arith.jinja");
pub const ELEMENT_TEMPLATE: &str = include_str!("../templates/element.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Data context for the LaTeX table template
///
/// The body is rendered by zechtablib and passed through untouched.
#[derive(Debug, Serialize)]
pub struct TableContext {
    pub body: String,
}

/// One `key -> value` line (pre-formatted)
#[derive(Debug, Serialize)]
struct LogLine {
    /// Right-aligned to three columns
    key: String,
    value: String,
}

/// Data context for the log table template
#[derive(Debug, Serialize)]
pub struct LogTableContext {
    lines: Vec<LogLine>,
}

impl LogTableContext {
    pub fn new(entries: &[Entry]) -> Self {
        let lines = entries
            .iter()
            .map(|entry| LogLine {
                key: format!("{:>3}", entry.key),
                value: entry.value.to_string(),
            })
            .collect();
        LogTableContext { lines }
    }
}

/// Both GF(p) operation tables for `zechtab arith`
#[derive(Debug, Serialize)]
pub struct ArithTables {
    pub addition: OperationTable,
    pub multiplication: OperationTable,
}

/// A titled operation table, rows pre-joined
#[derive(Debug, Serialize)]
struct ArithSection {
    title: String,
    lines: Vec<String>,
}

/// Data context for the arith template
#[derive(Debug, Serialize)]
pub struct ArithContext {
    sections: Vec<ArithSection>,
}

impl ArithContext {
    pub fn new(tables: &ArithTables) -> Self {
        ArithContext {
            sections: vec![
                ArithSection {
                    title: "addition table".to_string(),
                    lines: operation_lines(&tables.addition),
                },
                ArithSection {
                    title: "multiplication table".to_string(),
                    lines: operation_lines(&tables.multiplication),
                },
            ],
        }
    }
}

/// Header line with the operator in the corner cell, then one line per row operand
fn operation_lines(table: &OperationTable) -> Vec<String> {
    let header = std::iter::once(table.operator.clone())
        .chain(table.operands.iter().map(|v| v.to_string()))
        .collect::<Vec<_>>()
        .join(" ");

    let rows = table.operands.iter().zip(&table.cells).map(|(y, row)| {
        std::iter::once(y.to_string())
            .chain(row.iter().map(|v| v.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    });

    std::iter::once(header).chain(rows).collect()
}

/// Element description for `zechtab element`
#[derive(Debug, Serialize)]
pub struct ElementReport {
    /// Digits as given, highest degree first
    pub digits: Vec<u64>,
    pub polynomial: String,
    pub primitive: String,
    /// Discrete log to the primitive base (`Infinity` for zero)
    pub primitive_power: Key,
}

impl ElementReport {
    pub fn new(field: &ExtensionField, el: &FieldElement) -> Self {
        ElementReport {
            digits: el.digits(),
            polynomial: el.as_polynomial(),
            primitive: field.primitive().as_polynomial(),
            primitive_power: Key::from(field.primitive_power(el)),
        }
    }
}

/// Create the theme
pub fn create_theme() -> Theme {
    Theme::new()
}

/// Render handler data: structured modes serialize it, text modes fill the template
pub fn render_output<T: Serialize>(
    template: &str,
    data: &T,
    output_mode: OutputMode,
) -> anyhow::Result<String> {
    let theme = create_theme();
    Ok(render_auto(template, data, &theme, output_mode)?)
}
