use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can abort a single pipeline.
///
/// These errors are recovered at the pipeline boundary: the REPL reports them
/// and goes back to the prompt, the shell process itself never dies from one.
/// Undefined-variable lookups are deliberately *not* here — they are warnings
/// that leave the token untouched (see [`crate::expand`]).
#[derive(Debug)]
pub enum ShellError {
    /// A `|` separator with an empty command on one of its sides.
    EmptyStage,
    /// A `<` or `>` operator with no file word after it.
    MissingRedirectTarget(char),
    /// The resolved path for a stage does not exist. Carries the command
    /// word as typed, not the probed path.
    CommandNotFound(String),
    /// A redirection file could not be opened (input) or created (output).
    Redirect { file: String, source: io::Error },
    /// The OS refused to create a process or pipe for a stage.
    Spawn { program: PathBuf, source: io::Error },
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::EmptyStage => write!(f, "empty command in pipeline"),
            ShellError::MissingRedirectTarget(op) => {
                write!(f, "missing file name after '{}'", op)
            }
            ShellError::CommandNotFound(name) => write!(f, "command not found: {}", name),
            ShellError::Redirect { file, source } => write!(f, "{}: {}", file, source),
            ShellError::Spawn { program, source } => {
                write!(f, "failed spawn: {}: {}", program.display(), source)
            }
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Redirect { source, .. } | ShellError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}
