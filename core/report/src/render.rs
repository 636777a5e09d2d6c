use params::Parameter;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::{ReportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Markdown table, one row per parameter.
    #[default]
    Table,
    /// Markdown bullet list with nested options.
    List,
    Json,
}

impl ReportFormat {
    /// Extension appended to the input stem when no output path is given.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Table => "table.md",
            ReportFormat::List => "list.md",
            ReportFormat::Json => "report.json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "list" => Ok(ReportFormat::List),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn default_label(param: &Parameter) -> String {
    match param.default_option() {
        Some(option) => escape(&option.name),
        None => param.default_value.to_string(),
    }
}

pub fn render_table(params: &[Parameter]) -> String {
    let mut out = String::new();
    out.push_str("| Parameter | Options | Default |\n");
    out.push_str("| --- | --- | --- |\n");

    for param in params {
        let options = param
            .values
            .iter()
            .map(|v| format!("{} ({})", escape(&v.name), v.value))
            .collect::<Vec<_>>()
            .join("<br>");
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            escape(&param.title),
            options,
            default_label(param)
        );
    }
    out
}

pub fn render_list(params: &[Parameter]) -> String {
    let mut out = String::new();
    for param in params {
        let _ = writeln!(out, "- **{}** (`{}`)", escape(&param.title), param.id);
        if param.default_option().is_none() {
            let _ = writeln!(out, "  - Default: {}", param.default_value);
        }
        for value in &param.values {
            let marker = if value.value == param.default_value {
                " *(default)*"
            } else {
                ""
            };
            let _ = writeln!(out, "  - {}{}", escape(&value.name), marker);
        }
    }
    out
}

pub fn render(params: &[Parameter], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(params)),
        ReportFormat::List => Ok(render_list(params)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(params)?),
    }
}
