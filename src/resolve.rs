//! Path resolution over the command tree
//!
//! A path is consumed one token per group level. Resolution stops early when
//! the tokens run out (the executor then flattens whatever subtree was
//! reached) and routes a single trailing token to the group's `default`
//! child when one is declared, preempting sibling matches.

use log::debug;
use thiserror::Error;

use crate::tree::key::Key;
use crate::tree::node::Node;

/// Errors produced while walking a path through the tree.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The path names no entry at some level of the tree, or carries tokens
    /// past a leaf. Recoverable: callers print a usage hint and retry or
    /// exit without executing anything.
    #[error("unsupported path: `{path}`")]
    UnsupportedPath { path: String },
    /// A token is claimed by more than one key, meaning the group's alias
    /// sets overlap. This is an error in the tree definition, not in the
    /// user's input, and aborts the run.
    #[error("ambiguous token `{token}`: claimed by keys {keys:?}")]
    AmbiguousAlias { token: String, keys: Vec<String> },
}

/// Walk `path` through the tree rooted at `node` and return the subtree it
/// names.
///
/// An empty path resolves to `node` itself. A trailing token at a group that
/// declares a `default` key routes to that default child, unless the token
/// is literally `default` (which is an ordinary lookup). Sibling matches are
/// preempted by the fallback; with a declared default, a sibling name is
/// unreachable as the final token.
///
/// # Errors
///
/// [`ResolveError::UnsupportedPath`] if a token matches nothing or tokens
/// remain past a leaf; [`ResolveError::AmbiguousAlias`] if a token is
/// claimed by more than one key.
pub fn resolve<'a>(path: &[&str], node: &'a Node) -> Result<&'a Node, ResolveError> {
    let mut current = node;
    let mut remaining = path;
    while let [token, rest @ ..] = remaining {
        let Node::Group(entries) = current else {
            return Err(ResolveError::UnsupportedPath {
                path: path.join(" "),
            });
        };
        let matched: Vec<&(Key, Node)> = entries
            .iter()
            .filter(|(key, _)| key.contains(token))
            .collect();
        if matched.is_empty() {
            return Err(ResolveError::UnsupportedPath {
                path: path.join(" "),
            });
        }
        if matched.len() > 1 {
            return Err(ResolveError::AmbiguousAlias {
                token: (*token).to_string(),
                keys: matched.iter().map(|(key, _)| key.joined()).collect(),
            });
        }
        if rest.is_empty()
            && *token != "default"
            && let Some((_, fallback)) = entries.iter().find(|(key, _)| key.contains("default"))
        {
            debug!("trailing token `{token}` routed to the group default");
            return Ok(fallback);
        }
        debug!("token `{token}` matched key `{}`", matched[0].0);
        current = &matched[0].1;
        remaining = rest;
    }
    Ok(current)
}
