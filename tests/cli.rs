use std::io::Write;
use std::process::{Command, Output, Stdio};

fn gen_symtab(args: &[&str], input: impl AsRef<[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gen-symtab"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_ref())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn no_arguments() {
    let output = gen_symtab(&[], "1000 2000 T foo\n1000 2000 t __func__.bar\n1000 2000 T\n");
    assert!(output.status.success());
    assert_eq!(
        "#include <kern/symbols.h>\n\
         int symbol_table_size __symtab = 2;\n\
         struct symbol symbol_table[] __symtab = {\n    \
         { 0x1000ul, 0x2000, 'T', \"foo\" },\n    \
         { 0x1000ul, 0x2000, 't', \"__func__.bar\" },\n\
         };\n",
        stdout(&output)
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn skip_nested_functions() {
    let output = gen_symtab(
        &["--skip-nested-functions"],
        "1000 2000 T foo\n1000 2000 t __func__.bar\n",
    );
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("int symbol_table_size __symtab = 1;"));
    assert!(!text.contains("__func__.bar"));
}

#[test]
fn empty_input() {
    let output = gen_symtab(&[], "");
    assert!(output.status.success());
    assert_eq!(
        "#include <kern/symbols.h>\n\
         int symbol_table_size __symtab = 0;\n\
         struct symbol symbol_table[] __symtab = {\n\
         };\n",
        stdout(&output)
    );
}

#[test]
fn bad_hex_fails() {
    let output = gen_symtab(&[], "1000 2000 T foo\n10zz 2000 T bar\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"));
    assert!(stderr.contains("10zz"));
}

#[test]
fn file_input_and_output() {
    let dir = std::env::temp_dir().join(format!("gen-symtab-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let listing = dir.join("kernel.syms");
    let source = dir.join("symtab.c");
    std::fs::write(&listing, "ffffffff80100000 0000000000000040 T boot_main\n").unwrap();

    let output = gen_symtab(
        &[
            "--input",
            listing.to_str().unwrap(),
            "--output",
            source.to_str().unwrap(),
        ],
        "",
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let text = std::fs::read_to_string(&source).unwrap();
    assert!(text.contains(
        "    { 0xffffffff80100000ul, 0x0000000000000040, 'T', \"boot_main\" },\n"
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_input_file() {
    let output = gen_symtab(&["--input", "/nonexistent/kernel.syms"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to open"));
}

#[test]
fn invalid_utf8_fails_with_line() {
    let output = gen_symtab(&[], &b"1000 2000 T foo\n1000 2000 T \xff\n"[..]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"));
}

#[test]
fn doubled_space_lines_dropped() {
    let output = gen_symtab(&[], "1000  T foo\n1000 2000  foo\n2000 10 T bar\n");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("int symbol_table_size __symtab = 1;"));
    assert!(text.contains("    { 0x2000ul, 0x10, 'T', \"bar\" },\n"));
}
