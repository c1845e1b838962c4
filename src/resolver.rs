//! Directive block discovery and resolution.
//!
//! One resolution pass finds every start marker, pairs each with the nearest
//! end marker after it, evaluates the guard, and splices the text
//! rightmost-first. Passes repeat until the text yields no more blocks.

use crate::context::Context;
use crate::guard;
use crate::syntax::CommentSyntax;

/// Which way a directive's guard gates its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Keep the block when the guard holds (`#ifdef`, HTML `#if`).
    Ifdef,
    /// Keep the block when the guard fails.
    Ifndef,
}

impl DirectiveKind {
    /// Map a captured directive keyword to its kind.
    ///
    /// `#if` gates like `#ifdef`; the keyword capture is case-insensitive.
    fn from_keyword(keyword: &str) -> Self {
        if keyword.eq_ignore_ascii_case("ifndef") {
            DirectiveKind::Ifndef
        } else {
            DirectiveKind::Ifdef
        }
    }
}

/// A half-open `[start, end)` byte range the preprocessor governed, markers
/// included.
///
/// Offsets are valid in the text as it stood when the owning block was
/// resolved. After several passes the collection answers containment
/// queries best-effort; it is not a coordinate map into the final output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// One matched start/end marker pair, prior to guard evaluation.
#[derive(Debug)]
struct DirectiveBlock {
    /// Start of the opening marker, leading line whitespace included.
    start: usize,
    /// End of the closing marker, its trailing newline included.
    end: usize,
    /// Raw text strictly between the two markers.
    body: String,
    kind: DirectiveKind,
    /// Untrimmed guard capture.
    guard: String,
}

/// Find every directive block in `text` under one comment syntax, in
/// document order.
///
/// Each start marker pairs with the nearest end marker that begins strictly
/// after the start marker ends. There is no notion of nesting: an inner
/// pair's `#endif` closes the outer block. A start marker with no following
/// end marker yields no block, and an end marker is never an error on its
/// own.
fn find_blocks(text: &str, syntax: &CommentSyntax) -> Vec<DirectiveBlock> {
    let ends: Vec<(usize, usize)> = syntax
        .end
        .regex()
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut blocks = Vec::new();
    for caps in syntax.start.regex().captures_iter(text) {
        let Some(marker) = caps.get(0) else { continue };
        let keyword = caps.get(1).map_or("", |m| m.as_str());
        let guard = caps.get(2).map_or("", |m| m.as_str());

        let Some(&(end_start, end_end)) = ends.iter().find(|(start, _)| *start > marker.end())
        else {
            continue;
        };

        blocks.push(DirectiveBlock {
            start: marker.start(),
            end: end_end,
            body: text[marker.end()..end_start].to_string(),
            kind: DirectiveKind::from_keyword(keyword),
            guard: guard.to_string(),
        });
    }

    blocks
}

/// Resolve every directive block in `text` under one syntax, repeating until
/// a pass finds none.
///
/// Pure fold: takes and returns the working text plus the accumulated span
/// record, so the orchestrator can thread state across syntaxes. Blocks are
/// spliced in reverse document order; edits land right-to-left, so the
/// offsets of blocks not yet applied stay valid.
pub fn apply_syntax(
    text: String,
    syntax: &CommentSyntax,
    context: &Context,
    mut spans: Vec<Span>,
) -> (String, Vec<Span>) {
    let mut result = text;

    loop {
        let blocks = find_blocks(&result, syntax);
        if blocks.is_empty() {
            break;
        }

        for block in blocks.iter().rev() {
            let guard_holds = guard::evaluate(&block.guard, context);
            let keep = match block.kind {
                DirectiveKind::Ifdef => guard_holds,
                DirectiveKind::Ifndef => !guard_holds,
            };

            let replacement = if keep { block.body.as_str() } else { "" };
            result.replace_range(block.start..block.end, replacement);

            spans.push(Span {
                start: block.start,
                end: block.end,
            });
        }
    }

    (result, spans)
}
