//! A small interactive shell built around a generalized pipeline executor.
//!
//! A raw command line flows through [`lexer`] (whitespace tokenization),
//! [`expand`] (`$NAME`/`~` substitution and `<`/`>` extraction) and
//! [`resolve`] (PATH lookup) into a [`Pipeline`] of 1..N commands, which
//! [`exec`] turns into N child processes wired by N-1 OS pipes and waits on
//! synchronously. Quoting, globbing, job control and scripting constructs
//! are deliberately out of scope.
//!
//! The [`repl`] module provides the interactive driver used by the `mash`
//! binary; the engine itself is usable as a library:
//!
//! ```no_run
//! use mash::env::Environment;
//!
//! let env = Environment::new();
//! let (pipeline, _warnings) = mash::pipeline::build("echo hi | cat", &env).unwrap();
//! let status = mash::exec::run(pipeline, &env).unwrap();
//! assert!(status.success());
//! ```

pub mod command;
pub mod env;
pub mod error;
pub mod exec;
pub mod expand;
pub mod lexer;
pub mod pipeline;
pub mod repl;
pub mod resolve;

pub use command::{Command, ExitCode, Pipeline, Redirects};
pub use error::ShellError;
