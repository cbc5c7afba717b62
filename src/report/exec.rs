use super::{render, RenderOptions};
use crate::cli::ReportArgs;
use crate::git::{inspect, GitCli};
use crate::model::{ReportWindow, Repository};
use crate::scan;
use anyhow::Context;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn exec(args: &ReportArgs, root: &Path) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let window = ReportWindow::resolve(
        &args.author,
        args.after.as_deref(),
        args.before.as_deref(),
        today,
    )
    .context("Failed to resolve report window")?;

    let walk = scan::discover(root, args.depth).context("Failed to scan directory tree")?;
    let root = walk.root().to_path_buf();
    let git = GitCli::new(&args.git);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Scanning for repositories...");

    let repos: Vec<Repository> = walk
        .map(|workdir| {
            pb.set_message(format!("Inspecting {}", workdir.display()));
            let repo = inspect(&git, &root, &workdir, &window);
            pb.inc(1);
            repo
        })
        .collect();
    pb.finish_and_clear();

    info!(
        root = %root.display(),
        repositories = repos.len(),
        after = %window.after,
        before = %window.before,
        "scan complete"
    );

    let opts = RenderOptions {
        pretty: args.pretty,
        styled: console::colors_enabled(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(args.format, &repos, &window, opts, &mut out).context("Failed to write report")?;
    out.flush()?;
    Ok(())
}
