//! CLI execution: input handling, context assembly and output.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use rayon::prelude::*;

use super::args::Arguments;
use crate::config::{load_context_file, parse_define};
use crate::context::Context;
use crate::preprocess::{PreprocessOptions, preprocess};

/// Per-input processing record.
pub struct FileOutcome {
    /// Input path, or `<stdin>`.
    pub label: String,
    /// Directive blocks resolved in this input.
    pub blocks: usize,
}

/// What a run did, for reporting.
pub struct RunOutcome {
    pub files: Vec<FileOutcome>,
    /// True when the rewritten code went to stdout.
    pub wrote_stdout: bool,
}

pub fn run(args: Arguments) -> Result<RunOutcome> {
    let options = PreprocessOptions {
        source_type: args.source_type,
        context: build_context(&args)?,
    };

    let stdin_only =
        args.files.is_empty() || (args.files.len() == 1 && args.files[0] == Path::new("-"));

    if stdin_only {
        if args.write {
            bail!("--write requires file inputs");
        }
        return run_stdin(args.output.as_deref(), &options);
    }

    if args.files.iter().any(|file| file == Path::new("-")) {
        bail!("`-` (stdin) cannot be combined with file inputs");
    }

    if args.write {
        return run_in_place(&args.files, &options);
    }

    if args.files.len() > 1 {
        bail!("Multiple inputs require --write; --output takes a single input");
    }

    run_single(&args.files[0], args.output.as_deref(), &options)
}

/// Merge the context file (if any) with `-D` defines, defines winning.
fn build_context(args: &Arguments) -> Result<Context> {
    let mut context = match &args.context_file {
        Some(path) => load_context_file(path)?,
        None => Context::new(),
    };

    for spec in &args.defines {
        let (name, value) = parse_define(spec)?;
        context.insert(name, value);
    }

    Ok(context)
}

fn run_stdin(output: Option<&Path>, options: &PreprocessOptions) -> Result<RunOutcome> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read stdin")?;

    let result = preprocess(&source, options);
    let wrote_stdout = emit(output, &result.code)?;

    Ok(RunOutcome {
        files: vec![FileOutcome {
            label: "<stdin>".to_string(),
            blocks: result.directive_count(),
        }],
        wrote_stdout,
    })
}

fn run_single(
    path: &Path,
    output: Option<&Path>,
    options: &PreprocessOptions,
) -> Result<RunOutcome> {
    let source = read_source(path)?;
    let result = preprocess(&source, options);
    let wrote_stdout = emit(output, &result.code)?;

    Ok(RunOutcome {
        files: vec![FileOutcome {
            label: path.display().to_string(),
            blocks: result.directive_count(),
        }],
        wrote_stdout,
    })
}

fn run_in_place(files: &[PathBuf], options: &PreprocessOptions) -> Result<RunOutcome> {
    let outcomes = files
        .par_iter()
        .map(|path| {
            let source = read_source(path)?;
            let result = preprocess(&source, options);
            fs::write(path, &result.code)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;

            Ok(FileOutcome {
                label: path.display().to_string(),
                blocks: result.directive_count(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RunOutcome {
        files: outcomes,
        wrote_stdout: false,
    })
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn emit(output: Option<&Path>, code: &str) -> Result<bool> {
    match output {
        Some(path) => {
            fs::write(path, code)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            Ok(false)
        }
        None => {
            print!("{}", code);
            Ok(true)
        }
    }
}
