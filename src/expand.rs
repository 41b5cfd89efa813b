//! Environment and home-directory expansion plus redirection extraction.

use crate::command::Redirects;
use crate::env::Environment;
use crate::error::ShellError;

/// Result of expanding one stage's token sequence.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Words with `$NAME`/`~` substitutions applied and redirection
    /// operator/operand pairs stripped out.
    pub words: Vec<String>,
    /// Redirection files named by `<`/`>` pairs in this stage.
    pub redirects: Redirects,
    /// User-visible diagnostics that do not abort the command.
    pub warnings: Vec<String>,
}

/// Expand a stage's words in order.
///
/// A word starting with `$` is replaced by the named variable's value; an
/// unbound name keeps the literal word and records a warning. A word starting
/// with `~` is replaced by `HOME` followed by the rest of the word, so `~/x`
/// becomes `$HOME/x` and `~` alone becomes `$HOME`.
///
/// A word that is exactly `<` or `>` consumes the following word as the
/// pipeline's input or output file. Substitution runs before extraction, so a
/// redirection target may itself be `$NAME` or `~`-relative. A repeated `<`
/// or `>` overwrites the earlier file (last one wins).
pub fn expand<I, S>(tokens: I, env: &Environment) -> Result<Expansion, ShellError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut exp = Expansion::default();
    let mut pending: Option<char> = None;

    for token in tokens {
        let word = expand_word(token.as_ref(), env, &mut exp.warnings);
        if let Some(op) = pending.take() {
            match op {
                '<' => exp.redirects.input = Some(word),
                _ => exp.redirects.output = Some(word),
            }
            continue;
        }
        match word.as_str() {
            "<" => pending = Some('<'),
            ">" => pending = Some('>'),
            _ => exp.words.push(word),
        }
    }

    if let Some(op) = pending {
        return Err(ShellError::MissingRedirectTarget(op));
    }
    Ok(exp)
}

fn expand_word(token: &str, env: &Environment, warnings: &mut Vec<String>) -> String {
    if let Some(name) = token.strip_prefix('$') {
        match env.get_var(name) {
            Some(value) => value,
            None => {
                warnings.push(format!("{}: undefined variable", name));
                token.to_string()
            }
        }
    } else if let Some(rest) = token.strip_prefix('~') {
        match env.home() {
            Some(home) => format!("{}{}", home, rest),
            None => {
                warnings.push("~: HOME is not set".to_string());
                token.to_string()
            }
        }
    } else {
        token.to_string()
    }
}
