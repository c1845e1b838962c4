use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr_str, stdout_str};

const DEBUG_SOURCE: &str = "// #ifdef DEBUG\nconsole.log(\"x\");\n// #endif\nconsole.log(\"y\");";

#[test]
fn test_stdin_passthrough_without_directives() -> Result<()> {
    let test = CliTest::new()?;
    let source = "const x = 1;\nexport default x;\n";

    let output = test.run_with_stdin(test.command(), source)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_str(&output), source);
    Ok(())
}

#[test]
fn test_stdin_keeps_guarded_block() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.args(["-D", "DEBUG"]);

    let output = test.run_with_stdin(cmd, DEBUG_SOURCE)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_str(&output),
        "console.log(\"x\");\nconsole.log(\"y\");"
    );
    Ok(())
}

#[test]
fn test_stdin_strips_guarded_block() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.args(["-D", "DEBUG=false"]);

    let output = test.run_with_stdin(cmd, DEBUG_SOURCE)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_str(&output), "console.log(\"y\");");
    Ok(())
}

#[test]
fn test_equality_guard_from_define() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.args(["-D", "V=2"]);

    let output = test.run_with_stdin(cmd, "// #ifdef V == \"2\"\nA\n// #endif")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_str(&output), "A\n");
    Ok(())
}

#[test]
fn test_file_to_stdout() -> Result<()> {
    let test = CliTest::with_file("app.js", DEBUG_SOURCE)?;
    let mut cmd = test.command();
    cmd.args(["app.js", "-D", "DEBUG"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_str(&output),
        "console.log(\"x\");\nconsole.log(\"y\");"
    );
    Ok(())
}

#[test]
fn test_context_file() -> Result<()> {
    let test = CliTest::with_file("app.js", DEBUG_SOURCE)?;
    test.write_file("context.json", r#"{ "DEBUG": true }"#)?;

    let mut cmd = test.command();
    cmd.args(["app.js", "-c", "context.json"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_str(&output),
        "console.log(\"x\");\nconsole.log(\"y\");"
    );
    Ok(())
}

#[test]
fn test_define_overrides_context_file() -> Result<()> {
    let test = CliTest::with_file("app.js", DEBUG_SOURCE)?;
    test.write_file("context.json", r#"{ "DEBUG": true }"#)?;

    let mut cmd = test.command();
    cmd.args(["app.js", "-c", "context.json", "-D", "DEBUG=false"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_str(&output), "console.log(\"y\");");
    Ok(())
}

#[test]
fn test_type_js_leaves_html_untouched() -> Result<()> {
    let source = "<!-- #ifdef X -->\n<b/>\n<!-- #endif -->\n";
    let test = CliTest::with_file("page.html", source)?;

    let mut cmd = test.command();
    cmd.args(["page.html", "--type", "js"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_str(&output), source);
    Ok(())
}

#[test]
fn test_automatic_mode_handles_both_syntaxes() -> Result<()> {
    let source =
        "// #ifdef JS_ON\njs();\n// #endif\n<!-- #ifdef HTML_ON -->\n<b/>\n<!-- #endif -->\n";
    let test = CliTest::with_file("page.html", source)?;

    let mut cmd = test.command();
    cmd.args(["page.html", "-D", "JS_ON", "-D", "HTML_ON=false"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_str(&output), "js();\n");
    Ok(())
}

#[test]
fn test_output_flag_writes_file() -> Result<()> {
    let test = CliTest::with_file("app.js", DEBUG_SOURCE)?;

    let mut cmd = test.command();
    cmd.args(["app.js", "-D", "DEBUG", "-o", "out.js"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("out.js")?,
        "console.log(\"x\");\nconsole.log(\"y\");"
    );
    // The code went to a file, so the summary owns stdout.
    assert!(stdout_str(&output).contains("Processed 1 input, resolved 1 directive block"));
    Ok(())
}

#[test]
fn test_write_in_place_multiple_files() -> Result<()> {
    let test = CliTest::with_file("a.js", DEBUG_SOURCE)?;
    test.write_file("b.js", "// #ifndef DEBUG\nlegacy();\n// #endif\nmain();\n")?;

    let mut cmd = test.command();
    cmd.args(["a.js", "b.js", "--write", "-D", "DEBUG"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("a.js")?,
        "console.log(\"x\");\nconsole.log(\"y\");"
    );
    assert_eq!(test.read_file("b.js")?, "main();\n");
    assert!(stdout_str(&output).contains("Processed 2 inputs, resolved 2 directive blocks"));
    Ok(())
}

#[test]
fn test_verbose_lists_files_when_writing() -> Result<()> {
    let test = CliTest::with_file("a.js", DEBUG_SOURCE)?;

    let mut cmd = test.command();
    cmd.args(["a.js", "--write", "--verbose", "-D", "DEBUG"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_str(&output).contains("a.js: 1 directive block"));
    Ok(())
}

#[test]
fn test_stdout_mode_keeps_summary_off_stdout() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.args(["-D", "DEBUG", "--verbose"]);

    let output = test.run_with_stdin(cmd, DEBUG_SOURCE)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_str(&output),
        "console.log(\"x\");\nconsole.log(\"y\");"
    );
    assert!(stderr_str(&output).contains("resolved 1 directive block"));
    Ok(())
}

#[test]
fn test_write_requires_file_inputs() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("--write");

    let output = test.run_with_stdin(cmd, "x\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("--write requires file inputs"));
    Ok(())
}

#[test]
fn test_multiple_files_without_write_fail() -> Result<()> {
    let test = CliTest::with_file("a.js", "x();\n")?;
    test.write_file("b.js", "y();\n")?;

    let mut cmd = test.command();
    cmd.args(["a.js", "b.js"]);

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("Error"));
    Ok(())
}

#[test]
fn test_missing_input_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("absent.js");

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("absent.js"));
    Ok(())
}

#[test]
fn test_malformed_context_file_fails() -> Result<()> {
    let test = CliTest::with_file("context.json", "not json")?;

    let mut cmd = test.command();
    cmd.args(["-c", "context.json"]);

    let output = test.run_with_stdin(cmd, "x\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("context.json"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("--help");

    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_str(&output).contains("Usage"));
    Ok(())
}
