use std::path::PathBuf;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// A resolved pipeline stage: an executable path plus the argument vector to
/// pass to it.
///
/// `argv[0]` is always the command word as the user typed it, so diagnostics
/// can refer to what was actually entered rather than to the probed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Filesystem path of the program image to execute. Resolution is
    /// permissive: the path is only checked for existence right before
    /// spawning (see [`crate::exec::run`]).
    pub path: PathBuf,
    /// Full argument vector, starting with the command word as invoked.
    pub argv: Vec<String>,
}

impl Command {
    pub fn new(path: impl Into<PathBuf>, argv: Vec<String>) -> Self {
        debug_assert!(!argv.is_empty());
        Self {
            path: path.into(),
            argv,
        }
    }

    /// The command word as the user typed it.
    pub fn name(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    /// The arguments following the command word.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// Input/output redirection attached to a pipeline.
///
/// `input` replaces the first stage's stdin, `output` the last stage's
/// stdout. `None` means the shell's own descriptor is inherited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirects {
    pub input: Option<String>,
    pub output: Option<String>,
}

impl Redirects {
    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none()
    }
}

/// An ordered sequence of commands connected by pipes, plus the redirection
/// applied at its ends. A single command with no redirection is the
/// degenerate one-stage case.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub stages: Vec<Command>,
    pub redirects: Redirects,
}
