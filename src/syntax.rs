//! Comment-syntax definitions: the directive marker grammars.
//!
//! Two flavors are supported. The JavaScript flavor recognizes directives in
//! `//` and `/* */` comments; the HTML flavor in `<!-- -->` comments (with a
//! `<! !>` spelling accepted on closings). Matching is case-insensitive and
//! multiline, and a marker consumes the newline at the end of its own line so
//! that stripping a block does not leave a blank line behind.

use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;

/// Which comment syntax(es) a preprocessing call applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceType {
    /// `//` and `/* */` comment markers.
    #[value(name = "js", alias = "javascript")]
    Javascript,
    /// `<!-- -->` and `<! !>` comment markers.
    Html,
    /// The JavaScript syntax followed by the HTML syntax.
    #[default]
    #[value(name = "auto", alias = "automatic")]
    Automatic,
}

impl SourceType {
    /// The syntaxes this selection applies, in application order.
    pub fn syntaxes(&self) -> Vec<&'static CommentSyntax> {
        match self {
            SourceType::Javascript => vec![&*JAVASCRIPT],
            SourceType::Html => vec![&*HTML],
            SourceType::Automatic => vec![&*JAVASCRIPT, &*HTML],
        }
    }
}

/// A compiled marker pattern plus the literal source it was built from.
///
/// The pattern text is kept for introspection; matching always goes through
/// the compiled regex.
#[derive(Debug)]
pub struct Matcher {
    pub pattern: &'static str,
    regex: Regex,
}

impl Matcher {
    fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            regex: Regex::new(&format!("(?mi){}", pattern)).unwrap(),
        }
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// An immutable start/end marker pair for one comment flavor.
///
/// The start matcher captures the directive keyword (group 1) and the raw
/// guard expression (group 2); the end matcher recognizes `#endif` closings.
#[derive(Debug)]
pub struct CommentSyntax {
    pub name: &'static str,
    pub start: Matcher,
    pub end: Matcher,
}

pub static JAVASCRIPT: LazyLock<CommentSyntax> = LazyLock::new(|| CommentSyntax {
    name: "js",
    start: Matcher::new(
        r"[ \t]*(?://|/\*)[ \t]*#(ifndef|ifdef)[ \t]+([^\n*]*)(?:\*(?:\*|/))?(?:[ \t]*\n)?",
    ),
    end: Matcher::new(r"[ \t]*(?://|/\*)[ \t]*#endif[ \t]*(?:\*(?:\*|/))?(?:[ \t]*\n)?"),
});

pub static HTML: LazyLock<CommentSyntax> = LazyLock::new(|| CommentSyntax {
    name: "html",
    start: Matcher::new(r"[ \t]*<!--[ \t]*#(ifndef|ifdef|if)[ \t]+(.*?)[ \t]*(?:-->|!>)(?:[ \t]*\n)?"),
    end: Matcher::new(r"[ \t]*<!(?:--)?[ \t]*#endif[ \t]*(?:-->|!>)(?:[ \t]*\n)?"),
});
