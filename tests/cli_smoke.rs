use assert_cmd::prelude::*;
use chrono::{Days, Local};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const AUTHOR: &str = "Your Name";

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init", "-q"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", AUTHOR]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut f = File::create(dir.join(name)).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
}

fn commit_file(dir: &Path, name: &str, content: &str) {
    write_file(dir, name, content);
    git(dir, &["add", "."]);
    git(dir, &["commit", "-q", "-m", &format!("add {name}")]);
}

fn tomorrow() -> String {
    (Local::now().date_naive() + Days::new(1))
        .format("%Y-%m-%d")
        .to_string()
}

fn weekly(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("weekly").unwrap();
    cmd.env_remove("WEEKLY_AUTHOR")
        .env_remove("WEEKLY_AFTER")
        .env_remove("WEEKLY_BEFORE")
        .env_remove("WEEKLY_DEPTH")
        .env_remove("WEEKLY_TYPE")
        .arg(root);
    cmd
}

#[test]
fn missing_root_prints_usage_and_fails() {
    let mut cmd = Command::cargo_bin("weekly").unwrap();
    let out = cmd.assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"));
    assert!(out.stdout.is_empty());
}

#[test]
fn nonexistent_root_fails() {
    let dir = tempdir().unwrap();
    weekly(&dir.path().join("missing")).assert().failure();
}

#[test]
fn modified_repo_is_doing() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let proj = dir.path().join("proj");
    init_git_repo(&proj);
    commit_file(&proj, "lib.rs", "pub fn hi(){}\n");
    write_file(&proj, "lib.rs", "pub fn hi(){ println!(\"hi\"); }\n");

    let out = weekly(dir.path())
        .args(["--author", "somebody-else"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    let doing = lines.iter().position(|l| *l == "Doing:").unwrap();
    assert_eq!(lines[doing + 1], "  proj (*)");
    assert_eq!(lines.iter().filter(|l| l.contains("proj")).count(), 1);
}

#[test]
fn committed_work_is_done_per_branch() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let proj = dir.path().join("proj");
    init_git_repo(&proj);
    commit_file(&proj, "a.txt", "a\n");
    git(&proj, &["checkout", "-q", "-b", "topic"]);
    commit_file(&proj, "b.txt", "b\n");

    let before = tomorrow();
    let out = weekly(dir.path())
        .args(["-a", AUTHOR, "--before", &before, "-t", "md"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let md = String::from_utf8(out).unwrap();

    let done = md.split("## Done").nth(1).unwrap();
    assert!(done.contains("### proj\n"));
    assert!(done.contains("#### main\n"));
    assert!(done.contains("#### topic\n"));
    assert!(done.contains("add b.txt"));
    assert!(!md.split("## Done").next().unwrap().contains("proj"));
}

#[test]
fn branch_checked_out_in_linked_worktree_is_done() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let proj = dir.path().join("proj");
    init_git_repo(&proj);
    commit_file(&proj, "a.txt", "a\n");
    git(&proj, &["worktree", "add", "-q", "-b", "topic", "../wt"]);
    commit_file(&dir.path().join("wt"), "b.txt", "b\n");

    let before = tomorrow();
    let out = weekly(dir.path())
        .args(["-a", AUTHOR, "--before", &before, "-t", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let repos = v.as_array().unwrap();
    let proj = repos.iter().find(|r| r["name"] == "proj").unwrap();

    assert!(proj.get("errors").is_none());
    assert_eq!(proj["hasCommits"], true);
    let topic = proj["branches"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["name"] == "topic")
        .unwrap();
    assert_eq!(topic["head"], false);
    assert!(topic["commits"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c.as_str().unwrap().contains("add b.txt")));
}

#[test]
fn quiet_repo_is_left_out() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let proj = dir.path().join("proj");
    init_git_repo(&proj);
    commit_file(&proj, "a.txt", "a\n");

    let out = weekly(dir.path())
        .args(["-a", "somebody-else"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(!String::from_utf8(out).unwrap().contains("proj"));
}

#[test]
fn json_lists_every_repository_within_depth() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(&dir.path().join("a"));
    init_git_repo(&dir.path().join("b/c"));
    init_git_repo(&dir.path().join("b/c/d/e"));

    let out = weekly(dir.path())
        .args(["-t", "json", "-d", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let repos = v.as_array().unwrap();
    assert_eq!(repos.len(), 2);
    let names: Vec<&str> = repos.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["a", "b/c"]);
}

#[test]
fn broken_git_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("proj/.git")).unwrap();

    let out = weekly(dir.path())
        .args(["--git", "definitely-not-a-git-binary", "-t", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let repo = &v.as_array().unwrap()[0];
    assert_eq!(repo["name"], "proj");
    assert!(!repo["errors"].as_array().unwrap().is_empty());
}
