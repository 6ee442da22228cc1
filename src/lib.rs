//! Data-driven command tree dispatch
//!
//! Grove resolves a path of command-line tokens against a nested tree of
//! named command groups and runs what it finds there: literal shell
//! commands, ordered sequences, or in-process callbacks. A partial path runs
//! everything beneath it, a group's `default` child answers an unqualified
//! trailing token, and the whole tree renders itself as help text.
//!
//! The tree is plain data built once at startup:
//!
//! ```
//! use grove::{Dispatcher, Key, Node};
//!
//! let tree = Node::group([
//!     (
//!         Key::name("build"),
//!         Node::group([
//!             (Key::name("default"), Node::cmd("make all")),
//!             (Key::name("debug"), Node::cmd("make debug")),
//!         ]),
//!     ),
//!     (Key::aliases(["test", "t"]), Node::cmd("make check")),
//! ]);
//! let dispatcher = Dispatcher::new(tree, ["cd build".to_string()]);
//! assert!(dispatcher.help().contains("build default: make all"));
//! ```

pub mod dispatch;
pub mod exec;
pub mod help;
pub mod interact;
pub mod logger;
pub mod resolve;
pub mod tree;

pub use dispatch::{DispatchError, Dispatcher};
pub use tree::key::Key;
pub use tree::node::{Callback, Node};
