//! Context assembly: JSON context files and `-D` define parsing.

use std::{fs, path::Path};

use anyhow::{Context as _, Result, bail};

use crate::context::{Context, ContextValue};

/// Load guard bindings from a JSON object file.
///
/// The file must hold a single object whose values are booleans, numbers or
/// strings; nested values are rejected.
pub fn load_context_file(path: &Path) -> Result<Context> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read context file: {}", path.display()))?;
    let context: Context = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse context file: {}", path.display()))?;
    Ok(context)
}

/// Parse a `-D NAME[=VALUE]` binding.
///
/// A bare name binds `true`. Values parse as bool, then integer, then float,
/// and fall back to a verbatim string, so `-D ENV=production` needs no
/// quoting.
pub fn parse_define(spec: &str) -> Result<(String, ContextValue)> {
    let (name, value) = match spec.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value)),
        None => (spec.trim(), None),
    };
    if name.is_empty() {
        bail!("Invalid define \"{}\": missing name", spec);
    }

    let value = match value {
        None => ContextValue::Bool(true),
        Some(raw) => parse_value(raw),
    };
    Ok((name.to_string(), value))
}

fn parse_value(raw: &str) -> ContextValue {
    if let Ok(b) = raw.parse::<bool>() {
        return ContextValue::Bool(b);
    }
    if let Ok(n) = raw.parse::<i64>() {
        return ContextValue::Int(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return ContextValue::Float(f);
    }
    ContextValue::Str(raw.to_string())
}
