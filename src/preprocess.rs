//! Top-level preprocessing entry point.

use crate::context::Context;
use crate::resolver::{self, Span};
use crate::syntax::SourceType;

/// Closing-marker token whose absence short-circuits the whole call.
///
/// The check is a literal, case-sensitive containment test; it exists to
/// skip all regex work on the overwhelmingly common directive-free file.
const ENDIF_TOKEN: &str = "#endif";

/// Options for one preprocessing call.
#[derive(Debug, Default)]
pub struct PreprocessOptions {
    /// Which comment syntax(es) to apply. Defaults to both.
    pub source_type: SourceType,
    /// Guard-evaluation bindings. Defaults to empty, under which every
    /// `#ifdef NAME` strips its block and every `#ifndef NAME` keeps it.
    pub context: Context,
}

/// The rewritten source plus the record of every directive-governed region.
#[derive(Debug)]
pub struct PreprocessResult {
    /// The source with every directive block kept or stripped.
    pub code: String,
    spans: Vec<Span>,
}

impl PreprocessResult {
    /// Whether `offset` fell inside any directive block, markers included.
    ///
    /// Span offsets refer to the text as it stood when the owning block was
    /// resolved (see [`Span`]), so this is a best-effort query once several
    /// passes have rewritten the text.
    pub fn is_in_preprocessor(&self, offset: usize) -> bool {
        self.spans.iter().any(|span| span.contains(offset))
    }

    /// Number of directive blocks that were resolved.
    pub fn directive_count(&self) -> usize {
        self.spans.len()
    }
}

/// Preprocess `source`, keeping or stripping directive-guarded blocks.
///
/// Sources without a literal `#endif` are returned untouched. Otherwise the
/// JavaScript syntax runs first and the HTML syntax second, per the selected
/// [`SourceType`], threading the rewritten text and accumulated spans from
/// one to the next. The call is infallible: malformed directives degrade to
/// defined fallbacks instead of erroring.
///
/// # Example
///
/// ```
/// use sift::context::ContextValue;
/// use sift::preprocess::{PreprocessOptions, preprocess};
///
/// let mut options = PreprocessOptions::default();
/// options
///     .context
///     .insert("DEBUG".to_string(), ContextValue::Bool(true));
///
/// let result = preprocess("// #ifdef DEBUG\nlog();\n// #endif\n", &options);
/// assert_eq!(result.code, "log();\n");
/// ```
pub fn preprocess(source: &str, options: &PreprocessOptions) -> PreprocessResult {
    if !source.contains(ENDIF_TOKEN) {
        return PreprocessResult {
            code: source.to_string(),
            spans: Vec::new(),
        };
    }

    let mut state = (source.to_string(), Vec::new());
    for syntax in options.source_type.syntaxes() {
        state = resolver::apply_syntax(state.0, syntax, &options.context, state.1);
    }

    let (code, spans) = state;
    PreprocessResult { code, spans }
}
