use crate::error::{Result, WeeklyError};
use crate::util::parse_day;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_AUTHOR: &str = "chronolai";
pub const DEFAULT_WINDOW_DAYS: u64 = 8;
pub const MODIFIED_MARKER: &str = "modified";
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Author filter and the calendar days handed to `git log --after/--before`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWindow {
    pub author: String,
    pub after: NaiveDate,
    pub before: NaiveDate,
}

impl ReportWindow {
    /// Build the window from optional overrides, defaulting to the
    /// `DEFAULT_WINDOW_DAYS` days ending `today`.
    pub fn resolve(
        author: &str,
        after: Option<&str>,
        before: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self> {
        let before = match before {
            Some(s) => parse_day(s, today)?,
            None => today,
        };
        let after = match after {
            Some(s) => parse_day(s, today)?,
            None => today
                .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS))
                .ok_or_else(|| WeeklyError::InvalidDate(format!("Date overflow before {today}")))?,
        };

        if after > before {
            return Err(WeeklyError::Config(format!(
                "Invalid range: after ({after}) is later than before ({before})"
            )));
        }

        Ok(Self {
            author: author.to_string(),
            after,
            before,
        })
    }

    pub fn after_str(&self) -> String {
        self.after.format(DAY_FORMAT).to_string()
    }

    pub fn before_str(&self) -> String {
        self.before.format(DAY_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    #[serde(rename = "head")]
    pub is_current: bool,
    /// `git log --graph --pretty=oneline` lines, kept verbatim.
    pub commits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub path: PathBuf,
    pub status: String,
    pub branches: Vec<Branch>,
    pub has_changed: bool,
    pub has_commits: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Repository {
    pub fn new(
        name: String,
        path: PathBuf,
        status: String,
        branches: Vec<Branch>,
        errors: Vec<String>,
    ) -> Self {
        let has_changed = status.contains(MODIFIED_MARKER);
        let has_commits = branches.iter().map(|b| b.commits.len()).sum::<usize>() > 0;
        Self {
            name,
            path,
            status,
            branches,
            has_changed,
            has_commits,
            errors,
        }
    }

    /// Local modifications but nothing committed in the window.
    pub fn is_doing(&self) -> bool {
        self.has_changed && !self.has_commits
    }

    pub fn is_done(&self) -> bool {
        self.has_commits
    }

    pub fn active_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|b| !b.commits.is_empty())
    }

    pub fn display_title(&self) -> String {
        if self.has_changed {
            format!("{} (*)", self.name)
        } else {
            self.name.clone()
        }
    }
}
