//! Building a [`Pipeline`] from a raw command line.

use crate::command::{Pipeline, Redirects};
use crate::env::Environment;
use crate::error::ShellError;
use crate::{expand, lexer, resolve};

/// Split a raw line on `|` and resolve every stage into a command.
///
/// Each stage is tokenized, expanded and resolved independently, whether or
/// not the line contains a `|` at all. Redirection found in the first stage
/// feeds the pipeline's stdin and redirection in the last stage its stdout;
/// a redirection anywhere else is dropped with a warning. Returns the
/// pipeline together with any warnings produced along the way.
pub fn build(line: &str, env: &Environment) -> Result<(Pipeline, Vec<String>), ShellError> {
    let parts: Vec<&str> = line.split('|').collect();
    let last = parts.len() - 1;

    let mut stages = Vec::with_capacity(parts.len());
    let mut redirects = Redirects::default();
    let mut warnings = Vec::new();

    for (i, part) in parts.iter().enumerate() {
        let mut exp = expand::expand(lexer::words(part), env)?;
        warnings.append(&mut exp.warnings);
        if exp.words.is_empty() {
            return Err(ShellError::EmptyStage);
        }
        if i == 0 {
            redirects.input = exp.redirects.input.take();
        }
        if i == last {
            redirects.output = exp.redirects.output.take();
        }
        if !exp.redirects.is_empty() {
            warnings.push(format!("redirection ignored in pipeline stage {}", i + 1));
        }
        stages.push(resolve::resolve(exp.words, env));
    }

    Ok((Pipeline { stages, redirects }, warnings))
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::env::Environment;
    use crate::error::ShellError;
    use std::collections::HashMap;
    use std::fs;
    use std::fs::File;
    use std::path::PathBuf;

    /// A throwaway PATH directory holding the named fake executables.
    fn fake_path_env(label: &str, tools: &[&str]) -> (Environment, PathBuf) {
        let base = std::env::temp_dir().join(format!("pipeline_tests_{}_{}", std::process::id(), label));
        let _ = fs::remove_dir_all(&base);
        fs::create_dir_all(&base).expect("create temp PATH dir");
        for tool in tools {
            File::create(base.join(tool)).expect("touch fake tool");
        }
        let mut vars = HashMap::new();
        vars.insert("PATH".to_string(), base.display().to_string());
        let env = Environment {
            vars,
            current_dir: std::env::current_dir().unwrap(),
        };
        (env, base)
    }

    #[test]
    fn single_command_line_builds_one_stage() {
        let (env, base) = fake_path_env("single", &["ls"]);
        let (pipeline, warnings) = build("ls -l", &env).unwrap();
        assert_eq!(pipeline.stages.len(), 1);
        assert_eq!(pipeline.stages[0].path, base.join("ls"));
        assert_eq!(pipeline.stages[0].argv, vec!["ls", "-l"]);
        assert!(pipeline.redirects.is_empty());
        assert!(warnings.is_empty());
        let _ = fs::remove_dir_all(base);
    }

    #[test]
    fn splits_stages_on_pipe() {
        let (env, base) = fake_path_env("stages", &["cat", "sort", "uniq"]);
        let (pipeline, _) = build("cat f | sort | uniq -c", &env).unwrap();
        assert_eq!(pipeline.stages.len(), 3);
        assert_eq!(pipeline.stages[0].name(), "cat");
        assert_eq!(pipeline.stages[1].name(), "sort");
        assert_eq!(pipeline.stages[2].argv, vec!["uniq", "-c"]);
        let _ = fs::remove_dir_all(base);
    }

    #[test]
    fn merges_first_input_and_last_output_redirects() {
        let (env, base) = fake_path_env("redir", &["cat", "sort"]);
        let (pipeline, warnings) = build("cat < in.txt | sort > out.txt", &env).unwrap();
        assert_eq!(pipeline.redirects.input.as_deref(), Some("in.txt"));
        assert_eq!(pipeline.redirects.output.as_deref(), Some("out.txt"));
        assert!(warnings.is_empty());
        let _ = fs::remove_dir_all(base);
    }

    #[test]
    fn interior_redirect_is_dropped_with_warning() {
        let (env, base) = fake_path_env("interior", &["cat", "sort", "uniq"]);
        let (pipeline, warnings) = build("cat f | sort > mid.txt | uniq", &env).unwrap();
        assert!(pipeline.redirects.output.is_none());
        assert_eq!(warnings, vec!["redirection ignored in pipeline stage 2"]);
        let _ = fs::remove_dir_all(base);
    }

    #[test]
    fn output_redirect_on_first_of_many_stages_is_dropped() {
        let (env, base) = fake_path_env("firstout", &["cat", "sort"]);
        let (pipeline, warnings) = build("cat f > mid.txt | sort", &env).unwrap();
        assert!(pipeline.redirects.output.is_none());
        assert_eq!(warnings, vec!["redirection ignored in pipeline stage 1"]);
        let _ = fs::remove_dir_all(base);
    }

    #[test]
    fn empty_stage_is_rejected() {
        let (env, base) = fake_path_env("empty", &["cat"]);
        assert!(matches!(build("cat f |", &env), Err(ShellError::EmptyStage)));
        assert!(matches!(build("| cat", &env), Err(ShellError::EmptyStage)));
        let _ = fs::remove_dir_all(base);
    }
}
