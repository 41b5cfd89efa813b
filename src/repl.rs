//! The interactive read loop driving the execution engine.

use crate::command::ExitCode;
use crate::env::Environment;
use crate::{exec, pipeline};
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Render the `user@machine : pwd` prompt from the environment.
fn prompt(env: &Environment) -> String {
    let user = env.get_var("USER").unwrap_or_default();
    let machine = env
        .get_var("MACHINE")
        .or_else(|| env.get_var("HOSTNAME"))
        .unwrap_or_default();
    let pwd = env
        .get_var("PWD")
        .unwrap_or_else(|| env.current_dir.display().to_string());
    format!("{}@{} : {} > ", user, machine, pwd)
}

/// Parse and execute one command line, printing diagnostics to stderr.
///
/// Per-pipeline failures are reported and turned into a non-zero exit code;
/// they never tear down the shell itself.
pub fn run_line(line: &str, env: &Environment) -> ExitCode {
    let (pipeline, warnings) = match pipeline::build(line, env) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };
    for warning in &warnings {
        eprintln!("{}", warning);
    }
    match exec::run(pipeline, env) {
        Ok(status) => {
            for stage in status.stages.iter().filter(|s| !s.success()) {
                eprintln!("{}: exited with status {}", stage.name, stage.code());
            }
            status.code()
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

/// Prompt, read a line, execute it, repeat until `exit` or end of input.
pub fn repl(env: &Environment) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(&prompt(env)) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if line == "exit" {
                    break;
                }
                run_line(line, env);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
