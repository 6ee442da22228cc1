use std::fmt;

use crate::tree::key::Key;

/// Boxed error type for callbacks, so routine bodies can use `?` freely.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// A zero-argument routine with its documentation attached at construction
/// time. The documentation is ordinary data: the help formatter reads it
/// without any runtime introspection.
pub struct Callback {
    doc: Option<String>,
    pub(crate) action: Box<dyn Fn() -> Result<(), CallbackError>>,
}

impl Callback {
    pub fn new(
        doc: impl Into<String>,
        action: impl Fn() -> Result<(), CallbackError> + 'static,
    ) -> Self {
        Self {
            doc: Some(doc.into()),
            action: Box::new(action),
        }
    }

    pub fn undocumented(action: impl Fn() -> Result<(), CallbackError> + 'static) -> Self {
        Self {
            doc: None,
            action: Box::new(action),
        }
    }

    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Invoke the routine.
    ///
    /// # Errors
    ///
    /// Propagates whatever the routine returns.
    pub fn invoke(&self) -> Result<(), CallbackError> {
        (self.action)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}

/// A node in the command tree.
#[derive(Debug)]
pub enum Node {
    /// Literal shell command text.
    Command(String),
    /// Children executed in order, stopping at the first failure.
    Sequence(Vec<Node>),
    /// Ordered mapping from keys to child nodes.
    ///
    /// The key name `default` is distinguished: it marks the child that runs
    /// when a path ends at this group with one unqualified token left.
    Group(Vec<(Key, Node)>),
    /// In-process routine with optional documentation.
    Callback(Callback),
}

impl Node {
    pub fn cmd(text: impl Into<String>) -> Self {
        Node::Command(text.into())
    }

    pub fn seq(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(children.into_iter().collect())
    }

    pub fn group<K>(entries: impl IntoIterator<Item = (K, Node)>) -> Self
    where
        K: Into<Key>,
    {
        Node::Group(entries.into_iter().map(|(k, n)| (k.into(), n)).collect())
    }

    pub fn callback(
        doc: impl Into<String>,
        action: impl Fn() -> Result<(), CallbackError> + 'static,
    ) -> Self {
        Node::Callback(Callback::new(doc, action))
    }
}
