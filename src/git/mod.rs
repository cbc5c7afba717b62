pub mod repo;
pub mod runner;

pub use repo::{inspect, parse_branch_line};
pub use runner::{GitCli, GitRunner};
