//! Mapping a command word to an executable path via the search path.

use crate::command::Command;
use crate::env::Environment;
use std::path::{Path, PathBuf};

/// Resolve a stage's expanded words into a [`Command`].
///
/// A word that is already an absolute path is used verbatim. Any other word
/// is probed against each directory of `PATH` in order and the first
/// directory containing it wins.
///
/// Resolution is deliberately permissive: when no directory matches, the last
/// probed candidate is kept and the miss surfaces as "command not found" when
/// the orchestrator validates the pipeline, not here. `words` must be
/// non-empty and becomes the command's argument vector unchanged.
pub fn resolve(words: Vec<String>, env: &Environment) -> Command {
    debug_assert!(!words.is_empty());
    let word = &words[0];
    let path = if Path::new(word).is_absolute() {
        PathBuf::from(word)
    } else {
        search(word, env)
    };
    Command::new(path, words)
}

fn search(word: &str, env: &Environment) -> PathBuf {
    let dirs = env.search_path().unwrap_or_default();
    let mut candidate = PathBuf::from(word);
    for dir in std::env::split_paths(&dirs) {
        candidate = dir.join(word);
        if candidate.exists() {
            break;
        }
    }
    candidate
}
