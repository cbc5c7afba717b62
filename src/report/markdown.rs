use super::report_title;
use crate::error::Result;
use crate::model::{ReportWindow, Repository};
use std::io::Write;

const FENCE: &str = "```";

pub fn render<W: Write>(repos: &[Repository], window: &ReportWindow, out: &mut W) -> Result<()> {
    writeln!(out, "---")?;
    writeln!(out, "id: weekly_{}_{}", window.after_str(), window.before_str())?;
    writeln!(out, "title: '{}'", report_title(window))?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out)?;

    writeln!(out, "## Doing")?;
    for repo in repos.iter().filter(|r| r.is_doing()) {
        writeln!(out, "- {}", repo.display_title())?;
    }
    writeln!(out)?;

    writeln!(out, "## Done")?;
    for repo in repos.iter().filter(|r| r.is_done()) {
        writeln!(out, "### {}", repo.display_title())?;
        for branch in repo.active_branches() {
            writeln!(out, "#### {}", branch.name)?;
            writeln!(out, "{FENCE}")?;
            for commit in &branch.commits {
                writeln!(out, "{commit}")?;
            }
            writeln!(out, "{FENCE}")?;
        }
    }
    writeln!(out)?;

    if repos.iter().any(|r| !r.errors.is_empty()) {
        writeln!(out, "## Errors")?;
        for repo in repos.iter().filter(|r| !r.errors.is_empty()) {
            writeln!(out, "### {}", repo.name)?;
            for err in &repo.errors {
                writeln!(out, "- {err}")?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}
