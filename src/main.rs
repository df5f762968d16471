use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tick", version, about = "A tiny in-memory checklist for your terminal")]
struct Cli {
    /// Seed the list with a task at startup (repeatable)
    #[arg(short = 't', long = "task", value_name = "TEXT")]
    tasks: Vec<String>,

    /// Use an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tick::tui::run(&cli.tasks, cli.config.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
