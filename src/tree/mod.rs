//! The command tree data model
//!
//! A tree of named groups whose leaves are shell commands, ordered sequences,
//! or documented callbacks. The model carries no behavior beyond construction;
//! resolution, execution, and rendering each consume it with an exhaustive
//! match.
//!
//! Keys are alias sets: a group entry may be reachable under several
//! interchangeable names. Overlap between the alias sets of one group is a
//! configuration error, but it is not rejected here — the resolver reports it
//! together with the token that triggered it.

pub mod key;
pub mod node;
