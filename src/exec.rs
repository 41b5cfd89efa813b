//! Process supervision: pipe wiring, spawning and reaping.
//!
//! A pipeline of N stages becomes N child processes connected by N-1 OS
//! pipes. The parent validates everything up front, moves every pipe end and
//! redirection file into exactly one child, and then blocks until all
//! children are reaped. Holding no descriptors of its own is what guarantees
//! a downstream reader sees end-of-stream the moment its upstream writer
//! exits.

use crate::command::{ExitCode, Pipeline};
use crate::env::Environment;
use crate::error::ShellError;
use std::fs::File;
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};

/// Exit information for one pipeline stage.
#[derive(Debug)]
pub struct StageStatus {
    /// The command word as typed, for diagnostics.
    pub name: String,
    /// The wait status observed for this stage's process.
    pub status: ExitStatus,
}

impl StageStatus {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// The stage's exit code, mapping signal deaths to shell convention.
    pub fn code(&self) -> ExitCode {
        match self.status.code() {
            Some(code) => code,
            None => terminated_by_signal(self.status),
        }
    }
}

/// Aggregate result of a fully reaped pipeline, one entry per stage in
/// pipeline order.
#[derive(Debug)]
pub struct PipelineStatus {
    pub stages: Vec<StageStatus>,
}

impl PipelineStatus {
    /// True only when every stage exited successfully.
    pub fn success(&self) -> bool {
        self.stages.iter().all(StageStatus::success)
    }

    /// Exit code of the last stage, following shell convention.
    pub fn code(&self) -> ExitCode {
        self.stages.last().map(StageStatus::code).unwrap_or(1)
    }
}

/// Execute a pipeline synchronously: validate, spawn all stages, wait for
/// all of them.
///
/// Validation is all-or-nothing: every resolved path must exist and every
/// redirection file must open before a single process is spawned, so a bad
/// stage in the middle never leaves half a pipeline running. The call blocks
/// until every child has been reaped; no child is ever left behind as a
/// zombie.
pub fn run(pipeline: Pipeline, env: &Environment) -> Result<PipelineStatus, ShellError> {
    if pipeline.stages.is_empty() {
        return Err(ShellError::EmptyStage);
    }

    for stage in &pipeline.stages {
        if !stage.path.exists() {
            return Err(ShellError::CommandNotFound(stage.name().to_string()));
        }
    }

    // Input is opened before output so a missing input file aborts without
    // even creating the output file.
    let mut stdin_file = match &pipeline.redirects.input {
        Some(file) => Some(File::open(file).map_err(|source| ShellError::Redirect {
            file: file.clone(),
            source,
        })?),
        None => None,
    };
    let mut stdout_file = match &pipeline.redirects.output {
        Some(file) => Some(File::create(file).map_err(|source| ShellError::Redirect {
            file: file.clone(),
            source,
        })?),
        None => None,
    };

    let last = pipeline.stages.len() - 1;
    let mut children: Vec<(String, Child)> = Vec::with_capacity(pipeline.stages.len());
    let mut upstream: Option<ChildStdout> = None;

    for (i, stage) in pipeline.stages.into_iter().enumerate() {
        let mut cmd = Command::new(&stage.path);
        cmd.args(stage.args())
            .envs(env.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&env.current_dir);

        // A stage is fed either by the previous stage's pipe or, for the
        // first stage only, by the input redirection file.
        if let Some(pipe) = upstream.take() {
            cmd.stdin(Stdio::from(pipe));
        } else if let Some(file) = stdin_file.take() {
            cmd.stdin(Stdio::from(file));
        }
        if i < last {
            cmd.stdout(Stdio::piped());
        } else if let Some(file) = stdout_file.take() {
            cmd.stdout(Stdio::from(file));
        }

        match cmd.spawn() {
            Ok(mut child) => {
                upstream = child.stdout.take();
                children.push((stage.name().to_string(), child));
            }
            Err(source) => {
                // `cmd` still holds the read end of the pipe feeding this
                // stage; drop it before reaping so the stages already
                // running see end-of-stream instead of blocking forever.
                drop(cmd);
                for (_, mut child) in children {
                    let _ = child.wait();
                }
                return Err(ShellError::Spawn {
                    program: stage.path,
                    source,
                });
            }
        }
    }

    // Every pipe end and redirection file has been moved into a child by
    // now; all the parent has left to do is reap. Wait on every child even
    // if one wait fails, so no zombie survives this call.
    let mut stages = Vec::with_capacity(children.len());
    let mut wait_error: Option<ShellError> = None;
    for (name, mut child) in children {
        match child.wait() {
            Ok(status) => stages.push(StageStatus { name, status }),
            Err(source) => {
                if wait_error.is_none() {
                    wait_error = Some(ShellError::Spawn {
                        program: PathBuf::from(name),
                        source,
                    });
                }
            }
        }
    }
    match wait_error {
        Some(e) => Err(e),
        None => Ok(PipelineStatus { stages }),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}
