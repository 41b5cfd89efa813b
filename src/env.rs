use std::collections::HashMap;
use std::env as stdenv;
use std::path::PathBuf;

/// Snapshot of the process environment consumed by expansion, resolution and
/// process spawning.
///
/// The environment contains:
/// - `vars`: a map of environment variables that will be visible to executed
///   commands.
/// - `current_dir`: the working directory for command execution.
///
/// Note: fields are public for simplicity to keep the crate small.
/// Production code would prefer accessor methods over public fields.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Key-value store of environment variables (e.g., PATH, HOME).
    pub vars: HashMap<String, String>,
    /// The current working directory for command execution.
    pub current_dir: PathBuf,
}

impl Environment {
    /// Capture the current process state into a new `Environment` instance.
    ///
    /// This copies variables from `std::env::vars()` and initializes
    /// `current_dir` from `std::env::current_dir()`.
    pub fn new() -> Self {
        let mut vars = HashMap::new();
        for (k, v) in stdenv::vars() {
            vars.insert(k, v);
        }
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { vars, current_dir }
    }

    /// Get the value of an environment variable from the snapshot.
    pub fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    /// Set or override an environment variable in `self.vars`.
    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }

    /// The user's home directory, used as the base for `~` expansion.
    pub fn home(&self) -> Option<String> {
        self.get_var("HOME")
    }

    /// The raw PATH value used for executable resolution.
    pub fn search_path(&self) -> Option<String> {
        self.get_var("PATH")
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
