//! Flattening and execution of resolved subtrees
//!
//! Every command runs in its own freshly spawned shell: the execution prefix
//! is prepended to the command text and the whole block runs as one `sh -c`
//! script, so prefix effects like a directory change are visible to the
//! command but never leak into the next one. Execution is synchronous and
//! strictly in declared order; the first failure stops the run.

use std::io::IsTerminal;
use std::process::{Command as ProcessCommand, ExitStatus};

use log::debug;
use thiserror::Error;

use crate::tree::node::{CallbackError, Node};

/// Errors produced while executing a subtree.
#[derive(Error, Debug)]
pub enum ExecError {
    /// A spawned shell exited nonzero. Never retried.
    #[error("command `{cmd}` failed: {status}")]
    CommandFailed { cmd: String, status: ExitStatus },
    /// The shell itself could not be started.
    #[error("unable to spawn shell for `{cmd}`")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },
    /// A callback returned an error. Propagates like a command failure.
    #[error("callback failed: {source}")]
    Callback {
        #[source]
        source: CallbackError,
    },
}

/// ANSI status-line helpers, colored only when the stream is a terminal.
struct Style {
    color: bool,
}

impl Style {
    fn stdout() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    fn stderr() -> Self {
        Self {
            color: std::io::stderr().is_terminal(),
        }
    }

    fn style(&self, code: &str, s: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }

    fn command(&self, s: &str) -> String {
        self.style("33;1", s)
    }

    fn failure(&self, s: &str) -> String {
        self.style("31;1", s)
    }
}

/// Execute a resolved subtree with the given prefix lines.
///
/// Commands and callbacks are leaves; sequences run their children in order
/// and groups run every child value in insertion order, recursively, ignoring
/// the keys. A partially-specified path therefore runs everything beneath it.
///
/// # Errors
///
/// Stops at the first failing child and returns its [`ExecError`].
pub fn execute(node: &Node, prefix: &[String]) -> Result<(), ExecError> {
    match node {
        Node::Command(cmd) => run_command(cmd, prefix),
        Node::Callback(callback) => {
            debug!("invoking callback");
            callback
                .invoke()
                .map_err(|source| ExecError::Callback { source })
        }
        Node::Sequence(children) => children.iter().try_for_each(|child| execute(child, prefix)),
        Node::Group(entries) => entries
            .iter()
            .try_for_each(|(_, child)| execute(child, prefix)),
    }
}

/// Run one shell command behind the prefix, echoing the command text first
/// and printing a failure banner if it exits nonzero.
///
/// # Errors
///
/// [`ExecError::Spawn`] if the shell cannot be started,
/// [`ExecError::CommandFailed`] on a nonzero exit status.
pub fn run_command(cmd: &str, prefix: &[String]) -> Result<(), ExecError> {
    println!("{}", Style::stdout().command(cmd));
    let result = spawn(cmd, prefix);
    if let Err(ExecError::CommandFailed { .. }) = &result {
        eprintln!("{}", Style::stderr().failure("FAIL"));
    }
    result
}

/// Run one shell command without status lines, for callbacks that format
/// their own output.
///
/// # Errors
///
/// Same as [`run_command`].
pub fn run_silent(cmd: &str, prefix: &[String]) -> Result<(), ExecError> {
    spawn(cmd, prefix)
}

fn spawn(cmd: &str, prefix: &[String]) -> Result<(), ExecError> {
    let script = if prefix.is_empty() {
        cmd.to_string()
    } else {
        format!("{}\n{cmd}", prefix.join("\n"))
    };
    debug!("spawning shell script:\n{script}");
    let status = ProcessCommand::new("sh")
        .arg("-c")
        .arg(&script)
        .status()
        .map_err(|source| ExecError::Spawn {
            cmd: cmd.to_string(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(ExecError::CommandFailed {
            cmd: cmd.to_string(),
            status,
        })
    }
}
