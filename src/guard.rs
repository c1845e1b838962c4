//! Guard-expression evaluation for `#ifdef` / `#ifndef` directives.
//!
//! The grammar is deliberately tiny: a bare name, a `true`/`false` literal,
//! or a single `==` / `!=` comparison over quoted literals, context names and
//! barewords. Anything else evaluates to false, so a broken guard never
//! breaks a build; it only fails to keep its block.
//!
//! Polarity (`ifdef` keeps on true, `ifndef` keeps on false) is applied by
//! the resolver, not here.

use crate::context::Context;

/// Evaluate a guard expression against the context.
///
/// Checks run in a fixed order: empty guard, hyphen normalization,
/// `true`/`false` literals, direct context lookup, `==`, `!=`. Order matters:
/// an expression containing both operators splits on the first `==`.
pub fn evaluate(expression: &str, context: &Context) -> bool {
    let expr = expression.trim();
    if expr.is_empty() {
        return true;
    }

    // Directive names may be spelled with hyphens; context keys use
    // underscores. The whole expression is normalized, quoted text included.
    let expr = expr.replace('-', "_");

    match expr.as_str() {
        "true" => return true,
        "false" => return false,
        _ => {}
    }

    if let Some(value) = context.get(expr.as_str()) {
        return value.is_truthy();
    }

    if let Some((left, right)) = expr.split_once("==") {
        return resolve_operand(left, context) == resolve_operand(right, context);
    }
    if let Some((left, right)) = expr.split_once("!=") {
        return resolve_operand(left, context) != resolve_operand(right, context);
    }

    false
}

/// Resolve a comparison operand to its string form.
///
/// Quoted operands are literals, known context names coerce to string, and
/// anything else compares as its own trimmed text. The bareword fallback
/// lets `ENV == production` work unquoted, at the cost of not being able to
/// distinguish an unset name from a literal.
fn resolve_operand(token: &str, context: &Context) -> String {
    let token = token.trim();

    for quote in ['"', '\''] {
        if let Some(inner) = token
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.to_string();
        }
    }

    match context.get(token) {
        Some(value) => value.coerce_string(),
        None => token.to_string(),
    }
}
