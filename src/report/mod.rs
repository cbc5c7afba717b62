pub mod exec;
pub mod json;
pub mod markdown;
pub mod text;

pub use exec::exec;

use crate::error::Result;
use crate::model::{ReportWindow, Repository};
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "text", alias = "shell")]
    Text,
    #[value(name = "md", alias = "markdown")]
    Markdown,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Pretty-print JSON.
    pub pretty: bool,
    /// Bold section headings in text mode.
    pub styled: bool,
}

pub fn render<W: Write>(
    format: OutputFormat,
    repos: &[Repository],
    window: &ReportWindow,
    opts: RenderOptions,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => text::render(repos, window, opts.styled, out),
        OutputFormat::Markdown => markdown::render(repos, window, out),
        OutputFormat::Json => json::render(repos, opts.pretty, out),
    }
}

pub(crate) fn report_title(window: &ReportWindow) -> String {
    format!("Weekly Report: {} ~ {}", window.after_str(), window.before_str())
}
