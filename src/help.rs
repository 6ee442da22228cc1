//! Self-documentation of the command tree
//!
//! [`render`] flattens every reachable path into one aligned record per
//! leaf: the `/`-joined key names along the path, a colon, and the leaf's
//! body (command text, newline-joined sequence parts, or a callback's
//! documentation). Multi-line bodies written with source indentation are
//! normalized with [`dedent`] so the report lines up flush no matter how
//! deeply the node literal was nested.

use crate::tree::node::Node;

/// Placeholder body for callbacks without documentation.
const NO_DOC: &str = "(undocumented)";

/// Render the full tree as one aligned record per leaf.
#[must_use]
pub fn render(root: &Node) -> String {
    let mut out = String::new();
    let mut trail: Vec<String> = Vec::new();
    render_into(root, &mut trail, &mut out);
    out
}

fn render_into(node: &Node, trail: &mut Vec<String>, out: &mut String) {
    if let Node::Group(entries) = node {
        for (key, child) in entries {
            trail.push(key.joined());
            render_into(child, trail, out);
            trail.pop();
        }
        return;
    }
    let body = summary(node);
    let label = trail.join(" ");
    if label.is_empty() {
        out.push_str(&dedent(&body));
    } else {
        out.push_str(&label);
        out.push_str(": ");
        out.push_str(&align(&body, label.chars().count() + 2));
    }
    out.push('\n');
}

/// The raw body for a terminal node. A group reached through a sequence
/// flattens the same way the executor flattens it.
fn summary(node: &Node) -> String {
    match node {
        Node::Command(cmd) => trim_outer(cmd).to_string(),
        Node::Sequence(children) => children
            .iter()
            .map(summary)
            .collect::<Vec<_>>()
            .join("\n"),
        Node::Group(entries) => entries
            .iter()
            .map(|(_, child)| summary(child))
            .collect::<Vec<_>>()
            .join("\n"),
        Node::Callback(callback) => trim_outer(callback.doc().unwrap_or(NO_DOC)).to_string(),
    }
}

/// Drop the blank edges a multi-line source literal carries: leading
/// newlines and any trailing whitespace.
fn trim_outer(text: &str) -> &str {
    text.trim_end().trim_start_matches('\n')
}

/// Strip the leading whitespace every line shares.
///
/// Trailing whitespace is removed from each line, pure-whitespace lines are
/// reduced to empty ones and excluded from the common-prefix computation,
/// and the shared count of leading spaces is stripped from every remaining
/// line. Idempotent: dedenting already-dedented text is a no-op.
#[must_use]
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let prefix = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| if line.is_empty() { "" } else { &line[prefix..] })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dedent `text` and re-indent continuation lines to `width` columns so a
/// multi-line body lines up under its label.
#[must_use]
pub fn align(text: &str, width: usize) -> String {
    let dedented = dedent(text);
    let mut lines = dedented.lines();
    let mut out = lines.next().unwrap_or_default().to_string();
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(&" ".repeat(width));
            out.push_str(line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::key::Key;
    use crate::tree::node::Callback;

    #[test]
    fn dedent_strips_common_leading_spaces() {
        assert_eq!(dedent("    a\n      b\n    c"), "a\n  b\nc");
    }

    #[test]
    fn dedent_is_idempotent() {
        let once = dedent("    a\n      b\n\n    c");
        assert_eq!(dedent(&once), once);
    }

    #[test]
    fn blank_lines_do_not_pin_the_common_prefix() {
        assert_eq!(dedent("  a\n\n  b"), "a\n\nb");
    }

    #[test]
    fn dedent_strips_trailing_whitespace() {
        assert_eq!(dedent("a   \nb\t"), "a\nb");
    }

    #[test]
    fn align_indents_continuation_lines() {
        assert_eq!(align("one\ntwo", 4), "one\n    two");
    }

    #[test]
    fn render_flat_group() {
        let tree = Node::group([
            (Key::name("fmt"), Node::cmd("cargo fmt --all")),
            (Key::aliases(["lint", "l"]), Node::cmd("cargo clippy")),
        ]);
        insta::assert_snapshot!(render(&tree).trim_end(), @r"fmt: cargo fmt --all
lint/l: cargo clippy");
    }

    #[test]
    fn render_joins_nested_labels_with_spaces() {
        let tree = Node::group([(
            Key::name("test"),
            Node::group([(Key::aliases(["cp1", "checkpoint-1"]), Node::cmd("run-cp1"))]),
        )]);
        assert_eq!(render(&tree), "test cp1/checkpoint-1: run-cp1\n");
    }

    #[test]
    fn render_aligns_sequence_bodies_under_the_label() {
        let tree = Node::group([(
            Key::name("ci"),
            Node::seq([Node::cmd("cargo fmt"), Node::cmd("cargo test")]),
        )]);
        assert_eq!(render(&tree), "ci: cargo fmt\n    cargo test\n");
    }

    #[test]
    fn render_dedents_indented_bodies() {
        let tree = Node::group([(
            Key::name("viz"),
            Node::cmd(
                "
                make viewer
                ./bin/viewer out.dot
                ",
            ),
        )]);
        assert_eq!(render(&tree), "viz: make viewer\n     ./bin/viewer out.dot\n");
    }

    #[test]
    fn render_uses_callback_docs() {
        let tree = Node::group([(
            Key::name("doctor"),
            Node::callback("Diagnose the local toolchain.", || Ok(())),
        )]);
        assert_eq!(render(&tree), "doctor: Diagnose the local toolchain.\n");
    }

    #[test]
    fn render_marks_undocumented_callbacks() {
        let tree = Node::group([(
            Key::name("noop"),
            Node::Callback(Callback::undocumented(|| Ok(()))),
        )]);
        assert_eq!(render(&tree), "noop: (undocumented)\n");
    }

    #[test]
    fn render_full_tree() {
        let tree = Node::group([
            (
                Key::name("build"),
                Node::group([
                    (Key::name("default"), Node::cmd("make all")),
                    (Key::name("debug"), Node::cmd("make debug")),
                ]),
            ),
            (
                Key::aliases(["test", "t"]),
                Node::seq([Node::cmd("make check"), Node::cmd("./run-tests")]),
            ),
            (
                Key::name("shell"),
                Node::callback("Open an interactive shell.", || Ok(())),
            ),
        ]);
        insta::assert_snapshot!(render(&tree).trim_end(), @r"build default: make all
build debug: make debug
test/t: make check
        ./run-tests
shell: Open an interactive shell.");
    }
}
