//! The task tree for grove's own development
//!
//! Plain configuration data: the dispatcher neither knows nor cares that
//! these happen to be cargo invocations.

use regex::Regex;

use grove::tree::node::CallbackError;
use grove::{Key, Node, exec, interact};

/// Setup lines applied to every command.
pub fn prefix() -> Vec<String> {
    vec!["export CARGO_TERM_COLOR=always".to_string()]
}

/// The full task tree.
pub fn tree() -> Node {
    Node::group([
        (
            Key::name("fmt"),
            Node::group([
                (Key::name("default"), Node::cmd("cargo fmt --all")),
                (Key::name("check"), Node::cmd("cargo fmt --all -- --check")),
            ]),
        ),
        (
            Key::aliases(["lint", "clippy"]),
            Node::cmd("cargo clippy --all-targets -- -D warnings"),
        ),
        (
            Key::name("test"),
            Node::group([
                (Key::name("default"), Node::cmd("cargo test")),
                (Key::name("doc"), Node::cmd("cargo test --doc")),
                (
                    Key::name("soak"),
                    Node::callback(
                        "
                        Repeat the test suite to shake out flaky failures.
                        Prompts for a run count and stops at the first red run.
                        ",
                        soak,
                    ),
                ),
            ]),
        ),
        (
            Key::name("build"),
            Node::group([
                (Key::name("default"), Node::cmd("cargo build")),
                (Key::name("release"), Node::cmd("cargo build --release")),
            ]),
        ),
        (
            Key::name("ci"),
            Node::seq([
                Node::cmd("cargo fmt --all -- --check"),
                Node::cmd("cargo clippy --all-targets -- -D warnings"),
                Node::cmd("cargo test"),
            ]),
        ),
    ])
}

fn soak() -> Result<(), CallbackError> {
    let pattern = Regex::new(r"^\d+$")?;
    let Some(count) = interact::prompt_match("runs: ", &pattern)? else {
        return Ok(());
    };
    let count: u32 = count.parse()?;
    for run in 1..=count {
        println!("soak run {run}/{count}");
        exec::run_silent("cargo test", &[])?;
    }
    Ok(())
}
