pub mod args;
pub mod helpers;

pub use args::{parse_invocation, Cli, Invocation};
pub use helpers::{print_summary, print_usage, render_summary, USAGE};
