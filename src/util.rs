use crate::error::{Result, WeeklyError};
use crate::model::DAY_FORMAT;
use chrono::{Days, NaiveDate};
use std::path::Path;

/// Parse a window bound: `YYYY-MM-DD`, or `N days|weeks|months ago` relative to `today`.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), DAY_FORMAT) {
        return Ok(date);
    }

    if let Some(days) = parse_relative_days(input) {
        return today
            .checked_sub_days(Days::new(days))
            .ok_or_else(|| WeeklyError::InvalidDate(format!("Date overflow for '{input}'")));
    }

    Err(WeeklyError::InvalidDate(format!(
        "'{input}' (expected YYYY-MM-DD or 'N days ago')"
    )))
}

fn parse_relative_days(input: &str) -> Option<u64> {
    let input = input.trim().to_lowercase();
    let units = [
        (" days ago", 1),
        (" day ago", 1),
        (" weeks ago", 7),
        (" week ago", 7),
        (" months ago", 30),
        (" month ago", 30),
    ];

    for (suffix, factor) in units {
        if let Some(n) = input.strip_suffix(suffix) {
            return n.trim().parse::<u64>().ok()?.checked_mul(factor);
        }
    }
    None
}

/// Display name of a repository: its path below `root` with `/` separators,
/// or the root's own directory name when the repository is the root.
pub fn relative_name(root: &Path, repo: &Path) -> String {
    match repo.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Ok(_) => root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.to_string_lossy().to_string()),
        Err(_) => repo.to_string_lossy().to_string(),
    }
}
