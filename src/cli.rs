use crate::error::WeeklyError;
use crate::model::DEFAULT_AUTHOR;
use crate::report::OutputFormat;
use anyhow::Result;
use clap::{ArgAction, Args, CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "weekly")]
#[command(about = "Weekly report of git activity across every repository under a directory")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    #[allow(dead_code)]
    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[clap(flatten)]
    pub report: ReportArgs,

    #[arg(long, env = "WEEKLY_LOG", default_value = "warn", help = "Log filter (error, warn, info, debug, trace)")]
    pub log_level: String,
}

#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    #[arg(value_name = "ROOT", help = "Directory to scan for git repositories")]
    pub root: Option<PathBuf>,

    #[arg(short, long, env = "WEEKLY_AUTHOR", default_value = DEFAULT_AUTHOR, help = "Only count commits by this author")]
    pub author: String,

    #[arg(long, env = "WEEKLY_AFTER", help = "First day of the window (YYYY-MM-DD or 'N days ago') [default: 8 days ago]")]
    pub after: Option<String>,

    #[arg(long, env = "WEEKLY_BEFORE", help = "Last day of the window (YYYY-MM-DD or 'N days ago') [default: today]")]
    pub before: Option<String>,

    #[arg(short, long, env = "WEEKLY_DEPTH", default_value_t = 2, help = "How many directory levels below ROOT a repository may sit. The default 2 also finds ROOT/a/b; use 1 for repositories directly under ROOT only")]
    pub depth: usize,

    #[arg(short = 't', long = "type", env = "WEEKLY_TYPE", value_enum, default_value = "text", help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, help = "Pretty-print JSON output", default_value_t = false)]
    pub pretty: bool,

    #[arg(long, env = "WEEKLY_GIT", default_value = "git", help = "git executable to run")]
    pub git: String,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        init_tracing(&self.log_level)?;

        let Some(root) = self.report.root.clone() else {
            eprintln!("{}", Self::command().render_help());
            return Err(WeeklyError::Config("missing ROOT directory to scan".to_string()).into());
        };

        crate::report::exec(&self.report, &root)
    }
}

fn log_filter(level: &str) -> std::result::Result<EnvFilter, WeeklyError> {
    EnvFilter::try_new(level)
        .map_err(|e| WeeklyError::Config(format!("invalid --log-level '{level}': {e}")))
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = log_filter(level)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
