use std::path::PathBuf;

use clap::Parser;

use crate::processor::DEFAULT_MAX_DEPTH;

/// Rebuild and print the syntax tree from a compiler AST dump
#[derive(Debug, Parser)]
#[command(name = "dumptree")]
pub struct DumptreeArgs {
    /// Dump file, e.g. `Program(Fundecl(void, f, Block()))`, on one or many lines
    #[arg()]
    pub input: PathBuf,

    /// Also write a graphviz export
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "output.dot"
    )]
    pub dot: Option<PathBuf>,

    /// Print the sanitized nested structure before the tree
    #[arg(long)]
    pub groups: bool,

    /// Deepest parenthesis nesting to accept
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Enable verbose logging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
