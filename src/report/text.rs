use super::report_title;
use crate::error::Result;
use crate::model::{ReportWindow, Repository};
use console::style;
use std::io::Write;

const INDENT: &str = "  ";
const RULE_WIDTH: usize = 40;

pub fn render<W: Write>(
    repos: &[Repository],
    window: &ReportWindow,
    styled: bool,
    out: &mut W,
) -> Result<()> {
    let heading = |s: &str| {
        if styled {
            style(s).bold().to_string()
        } else {
            s.to_string()
        }
    };
    let (i1, i2, i3) = (INDENT, INDENT.repeat(2), INDENT.repeat(3));

    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, " {}", report_title(window))?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out)?;

    writeln!(out, "{}", heading("Doing:"))?;
    for repo in repos.iter().filter(|r| r.is_doing()) {
        writeln!(out, "{i1}{}", repo.display_title())?;
    }
    writeln!(out)?;

    writeln!(out, "{}", heading("Done:"))?;
    for repo in repos.iter().filter(|r| r.is_done()) {
        writeln!(out, "{i1}{}", repo.display_title())?;
        for branch in repo.active_branches() {
            writeln!(out, "{i2}- {}", branch.name)?;
            for commit in &branch.commits {
                writeln!(out, "{i3}{commit}")?;
            }
        }
        writeln!(out)?;
    }

    if repos.iter().any(|r| !r.errors.is_empty()) {
        writeln!(out, "{}", heading("Errors:"))?;
        for repo in repos.iter().filter(|r| !r.errors.is_empty()) {
            writeln!(out, "{i1}{}", repo.name)?;
            for err in &repo.errors {
                writeln!(out, "{i2}- {err}")?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}
