//! The driver wiring resolution and execution together
//!
//! A [`Dispatcher`] owns the command tree and the execution prefix.
//! Construction is the tree's single mutation point: a help entry is pushed
//! into the root group, the report is rendered over the finished tree, and
//! the tree is frozen from then on.

use log::debug;
use thiserror::Error;

use crate::exec::{self, ExecError};
use crate::help;
use crate::resolve::{self, ResolveError};
use crate::tree::key::Key;
use crate::tree::node::{Callback, Node};

/// Names under which the generated help entry is reachable.
pub const HELP_ALIASES: [&str; 2] = ["-h", "--help"];

const HELP_DOC: &str = "Print every command path and what it runs.";

/// Errors surfaced by a dispatch run.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Exec(#[from] ExecError),
}

pub struct Dispatcher {
    root: Node,
    prefix: Vec<String>,
    report: String,
}

impl Dispatcher {
    /// Build a dispatcher over `root`, running every command behind the
    /// given prefix lines. `set -e` is prepended so a composed script stops
    /// at its first failing line, and a `-h`/`--help` entry printing the
    /// rendered report is added to the root group.
    #[must_use]
    pub fn new(mut root: Node, prefix: impl IntoIterator<Item = String>) -> Self {
        let mut prefix: Vec<String> = prefix.into_iter().collect();
        prefix.insert(0, "set -e".to_string());

        if let Node::Group(entries) = &mut root {
            entries.push((
                Key::aliases(HELP_ALIASES),
                Node::Callback(Callback::new(HELP_DOC, || Ok(()))),
            ));
        }
        // rendered after the help entry joins the tree, so the report lists
        // it like any other key
        let report = help::render(&root);
        if let Node::Group(entries) = &mut root
            && let Some((_, Node::Callback(callback))) = entries.last_mut()
        {
            let text = report.clone();
            callback.action = Box::new(move || {
                print!("{text}");
                Ok(())
            });
        }
        Self {
            root,
            prefix,
            report,
        }
    }

    /// The rendered help report.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.report
    }

    /// The root of the frozen command tree.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve `path` and execute the subtree it names. An empty path prints
    /// the help report instead of executing the whole tree.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnsupportedPath`] after printing a usage hint
    /// (interactive callers may retry with a different path),
    /// [`ResolveError::AmbiguousAlias`] for overlapping key sets, and the
    /// executor's failures.
    pub fn run(&self, path: &[&str]) -> Result<(), DispatchError> {
        if path.is_empty() {
            print!("{}", self.report);
            return Ok(());
        }
        debug!("dispatching path {path:?}");
        match resolve::resolve(path, &self.root) {
            Ok(target) => exec::execute(target, &self.prefix).map_err(DispatchError::from),
            Err(err) => {
                if matches!(err, ResolveError::UnsupportedPath { .. }) {
                    eprintln!("{err}");
                    eprintln!("Try `--help` for the full command listing.");
                }
                Err(err.into())
            }
        }
    }
}
