use crate::git::GitRunner;
use crate::model::{Branch, ReportWindow, Repository};
use crate::util::relative_name;
use std::path::Path;
use tracing::{debug, warn};

const CURRENT_MARKER: char = '*';
const OTHER_WORKTREE_MARKER: char = '+';
const DETACHED_HEAD: &str = "HEAD";

/// Query status, branches and per-branch log of the repository at `workdir`.
///
/// Failed git invocations never abort the run: the affected field is left
/// empty and the failure is recorded in `Repository::errors`.
pub fn inspect<R: GitRunner + ?Sized>(
    git: &R,
    root: &Path,
    workdir: &Path,
    window: &ReportWindow,
) -> Repository {
    let mut errors = Vec::new();

    let status = match git.run(workdir, &args(&["status"])) {
        Ok(text) => text,
        Err(e) => {
            warn!(repo = %workdir.display(), error = %e, "git status failed");
            errors.push(e.to_string());
            String::new()
        }
    };

    let listing = match git.run(workdir, &args(&["branch", "--no-color"])) {
        Ok(text) => text,
        Err(e) => {
            warn!(repo = %workdir.display(), error = %e, "git branch failed");
            errors.push(e.to_string());
            String::new()
        }
    };

    let mut branches = Vec::new();
    for (name, is_current) in listing.lines().filter_map(parse_branch_line) {
        let commits = match git.run(workdir, &log_args(window, &name)) {
            Ok(text) => text
                .lines()
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) => {
                warn!(repo = %workdir.display(), branch = %name, error = %e, "git log failed");
                errors.push(e.to_string());
                Vec::new()
            }
        };
        branches.push(Branch {
            name,
            is_current,
            commits,
        });
    }

    let repo = Repository::new(
        relative_name(root, workdir),
        workdir.to_path_buf(),
        status,
        branches,
        errors,
    );
    debug!(
        repo = %repo.name,
        changed = repo.has_changed,
        commits = repo.has_commits,
        "inspected repository"
    );
    repo
}

/// One line of `git branch` output: name and whether it is checked out here.
/// `+` marks a branch checked out in another worktree. A detached HEAD line
/// maps to `HEAD`.
pub fn parse_branch_line(line: &str) -> Option<(String, bool)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (rest, is_current) = if let Some(rest) = trimmed.strip_prefix(CURRENT_MARKER) {
        (rest.trim(), true)
    } else if let Some(rest) = trimmed.strip_prefix(OTHER_WORKTREE_MARKER) {
        (rest.trim(), false)
    } else {
        (trimmed, false)
    };
    if rest.starts_with('(') {
        return Some((DETACHED_HEAD.to_string(), is_current));
    }
    if rest.is_empty() {
        return None;
    }
    Some((rest.to_string(), is_current))
}

pub fn log_args(window: &ReportWindow, branch: &str) -> Vec<String> {
    vec![
        "log".to_string(),
        "--graph".to_string(),
        "--abbrev-commit".to_string(),
        "--pretty=oneline".to_string(),
        "--no-color".to_string(),
        format!("--author={}", window.author),
        format!("--after={}", window.after_str()),
        format!("--before={}", window.before_str()),
        branch.to_string(),
        "--".to_string(),
    ]
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
