use anyhow::Result;
use argh::FromArgs;
use mash::env::Environment;
use mash::repl;

/// An interactive shell with pipelines, redirection and PATH lookup.
#[derive(FromArgs)]
struct Args {
    /// execute a single command line and exit with its status
    #[argh(option, short = 'c')]
    command: Option<String>,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let env = Environment::new();

    match args.command {
        Some(line) => std::process::exit(repl::run_line(line.trim(), &env)),
        None => repl::repl(&env),
    }
}
