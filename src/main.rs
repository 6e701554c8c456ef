use clap::Parser;
use dumptree::{Processor, cli::DumptreeArgs, processor::read_dump, render};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let args = DumptreeArgs::parse();

    // Logs go to stderr; stdout carries only the rendering
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let source = read_dump(&args.input)?;

    let processed = Processor::with_max_depth(args.max_depth).process(&source)?;

    if args.groups {
        println!("{}", processed.sanitized);
    }
    print!("{}", render::to_text(&processed.tree));

    if let Some(path) = &args.dot {
        render::write_dot(&processed.tree, path)?;
    }

    Ok(())
}
