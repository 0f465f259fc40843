//! Integration tests for the parsing module.
//!
//! Runs the renderer over a corpus of realistic post bodies and checks the
//! structural invariants plus letter conservation: markup delimiters are
//! consumed as structure, but no alphabetic character of the input may be
//! dropped or invented.


use crate::parsing::render;

/// Post bodies exercising every block and inline form, including malformed
/// and adversarial input.
const CORPUS: &[&str] = &[
    "",
    "\n\n\n",
    "plain paragraph only",
    "# Title\nBody text",
    "## Strategy recap\n\nBought the dip on **BTC** and *sold* at `resistance`.\n\n---\n\n- entry at open\n- exit at close\n\n1. backtest\n2. deploy",
    "```\nlet x = 1;\n```",
    "```rust\nfn main() {}\n```",
    "```\nline1\nline2",
    "> quoted wisdom\n> more wisdom",
    "Check [docs](https://docs.bitram.io) and ![chart](https://cdn.bitram.io/c.png)",
    "***\n**\n*\n``\n```",
    "#### not a heading\n#also not\n>not a quote\n-not a bullet\n1.not numbered",
    "Para one\n\nPara two\nstill two",
    "--\n---\n----",
    "mixed 한국어 text with **강조** and emoji 📉",
];

fn letters(s: &str) -> Vec<char> {
    let mut v: Vec<char> = s.chars().filter(|c| c.is_alphabetic()).collect();
    v.sort_unstable();
    v
}

#[test]
fn corpus_satisfies_structural_invariants() {
    for body in CORPUS {
        invariants::check(&render(body));
    }
}

#[test]
fn corpus_conserves_letters() {
    for body in CORPUS {
        let blocks = render(body);
        let leaves = invariants::leaf_text(&blocks);
        assert_eq!(
            letters(body),
            letters(&leaves),
            "letters dropped or invented for input {body:?}"
        );
    }
}

#[test]
fn render_is_deterministic() {
    for body in CORPUS {
        assert_eq!(render(body), render(body));
    }
}

#[test]
fn empty_input_renders_to_nothing() {
    assert!(render("").is_empty());
    assert!(render("\n\n\n").is_empty());
    assert!(render("   \n\t\n").is_empty());
}
