//! Integration tests for the full front end.
//!
//! These tests drive the public API from source text through tokenizing
//! and parsing to the canonical printer and the diagnostic renderer.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use var2_frontend::{
    ast::{expressions::Expr, statements::Stmt, tree::dump_tree, types::TypeRef},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse, render_error,
};

const SAMPLE: &str = r#"// Sorting and searching helpers.
method swap(a: array[] of int, i: int, j: int);

method sort(a: array[] of int, n: int)
var
  i, j: int;
  done: bool;
begin
  i := 0;
  repeat
  begin
    done := true;
    j := 0;
    while j < n - 1 - i do
    begin
      if a[j] > a[j + 1] then
        begin
          swap(a, j, j + 1);
          done := false;
        end;
    end;
    i := i + 1;
  end;
  until done;
end;

method find(grid: array[,] of char, c: char): bool
var
  row, col, w: uint;
begin
  row := 0;
  while true do
  begin
    if grid[row, col] = c then break; else col := col + 0x1;
    if col >= w then begin row := row + 0b1; col := 0; end;
    if !(row < w) && ~mask(row) != 0 then break;
  end;
  log("found \"it\"");
end;
"#;

#[test]
fn test_parse_sample_program() {
    let program = parse(SAMPLE).unwrap();

    let names: Vec<&str> = program.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["swap", "sort", "find"]);

    assert!(program.functions[0].is_declaration());

    let sort = program.functions[1].body.as_ref().unwrap();
    assert_eq!(sort.vars.len(), 2);
    assert_eq!(sort.vars[0].names, vec!["i", "j"]);
    assert!(matches!(sort.block.body[1], Stmt::DoUntil(ref stmt) if stmt.negate));

    let find = &program.functions[2];
    let Some(TypeRef::Array(grid)) = &find.args[0].type_ref else {
        panic!("expected an array parameter");
    };
    assert_eq!(grid.dimensions, 2);
}

#[test]
fn test_canonical_print_round_trip() {
    let program = parse(SAMPLE).unwrap();
    let printed = program.to_string();
    let reparsed = parse(&printed).unwrap();

    assert_eq!(program, reparsed);
    // The canonical form is a fixed point of printing.
    assert_eq!(printed, reparsed.to_string());
}

#[test]
fn test_canonical_print_layout() {
    let program =
        parse("method max(a:int,b:int):int var m:int; begin if a>b then m:=a; else m:=b; end;")
            .unwrap();

    let expected = "\
method max(a: int, b: int): int
var
  m: int;
begin
  if a > b then
    m := a;
  else
    m := b;
end;
";
    assert_eq!(program.to_string(), expected);
}

#[test]
fn test_canonical_print_keeps_parentheses_and_literals() {
    let program = parse(r#"method f() begin x := (a - b) - c; y := 'z'; s := "q\"\\"; end;"#).unwrap();
    let printed = program.to_string();

    assert!(printed.contains("x := (a - b) - c;"), "{}", printed);
    assert!(printed.contains("y := 'z';"), "{}", printed);
    assert!(printed.contains(r#"s := "q\"\\";"#), "{}", printed);
}

#[test]
fn test_canonical_print_declarations_and_repeat() {
    let source = "method f(); method g() begin repeat x; while y; repeat begin end; until z; end;";
    let printed = parse(source).unwrap().to_string();

    let expected = "\
method f();

method g()
begin
  repeat
    x;
  while y;
  repeat
    begin
    end;
  until z;
end;
";
    assert_eq!(printed, expected);
}

#[test]
fn test_spec_example_function() {
    let program = parse("method add(x:int,y:int):int begin x:=x+y; end;").unwrap();

    assert_eq!(program.functions.len(), 1);
    let function = &program.functions[0];
    assert_eq!(function.name, "add");
    assert_eq!(function.args.len(), 2);

    let body = function.body.as_ref().unwrap();
    let Stmt::Expression(stmt) = &body.block.body[0] else {
        panic!("expected an expression statement");
    };
    assert!(matches!(stmt.expression, Expr::Binary(_)));
}

#[test]
fn test_tokenize_sample_program() {
    let tokens: Vec<_> = tokenize(SAMPLE).collect::<Result<_, _>>().unwrap();

    assert_eq!(tokens.first().map(|t| t.kind), Some(TokenKind::Method));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Method).count(), 3);
}

#[test]
fn test_render_lex_error() {
    let source = "method f()\nbegin\n  c := 'ab';\nend;\n";
    let error = parse(source).unwrap_err();

    let rendered = render_error(&error, source, "chars.v2");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "chars.v2:3:8: error: invalid character literal 'ab'");
    assert_eq!(lines[1], "  |");
    assert_eq!(lines[2], "3 | c := 'ab';");
    assert_eq!(lines[3], "  | -----^");
    assert!(lines[4].starts_with("  = help:"));
}

#[test]
fn test_render_unknown_character_without_tip() {
    let source = "method f() begin x := #; end;";
    let error = parse(source).unwrap_err();

    let rendered = render_error(&error, source, "a.v2");
    assert!(rendered.starts_with("a.v2:1:23: error: unknown character '#'"));
    assert_eq!(rendered.lines().count(), 4);
}

#[test]
fn test_tree_dump_of_single_statement() {
    let source = "method f() begin x := 1; end;\n";
    let program = parse(source).unwrap();

    let expected = r#"(program [0, 0] - [1, 0]
  (function_def [0, 0] - [0, 29]
    name: (identifier [0, 7] - [0, 8])
      text: "f"
    body: (body [0, 11] - [0, 29]
      block: (block [0, 11] - [0, 29]
        (expression_statement [0, 17] - [0, 24]
          (assignment_expression [0, 17] - [0, 23]
            left: (identifier [0, 17] - [0, 18])
              text: "x"
            right: (decimal_literal [0, 22] - [0, 23])))))))
              text: "1"
"#;
    assert_eq!(dump_tree(&program, source, false), expected);
}

#[test]
fn test_tree_dump_fields_and_rows() {
    let source = "method g(a: array[] of int): bool\nvar i, j;\nbegin\n  repeat f(a[i]); until !b;\nend;\n";
    let program = parse(source).unwrap();

    let expected = r#"(program [0, 0] - [5, 0]
  (function_def [0, 0] - [4, 4]
    name: (identifier [0, 7] - [0, 8])
      text: "g"
    parameter: (parameter [0, 9] - [0, 26]
      name: (identifier [0, 9] - [0, 10])
        text: "a"
      type: (array_type [0, 12] - [0, 26]
        element: (builtin_type [0, 23] - [0, 26])))
          text: "int"
    return_type: (builtin_type [0, 29] - [0, 33])
      text: "bool"
    body: (body [1, 0] - [4, 4]
      var: (var_group [1, 4] - [1, 9]
        name: (identifier [1, 4] - [1, 5])
          text: "i"
        name: (identifier [1, 7] - [1, 8]))
          text: "j"
      block: (block [2, 0] - [4, 4]
        (repeat_statement [3, 2] - [3, 27]
          body: (expression_statement [3, 9] - [3, 17]
            (call_expression [3, 9] - [3, 16]
              function: (identifier [3, 9] - [3, 10])
                text: "f"
              argument: (index_expression [3, 11] - [3, 15]
                array: (identifier [3, 11] - [3, 12])
                  text: "a"
                index: (identifier [3, 13] - [3, 14]))))
                  text: "i"
          until: (unary_expression [3, 24] - [3, 26]
            operand: (identifier [3, 25] - [3, 26])))))))
              text: "b"
"#;
    assert_eq!(dump_tree(&program, source, false), expected);
}

#[test]
fn test_tree_dump_show_all_and_balance() {
    let source = "method f() begin x := 1; end;\n";
    let program = parse(source).unwrap();
    let dump = dump_tree(&program, source, true);

    assert!(
        dump.lines().any(|line| line == r#"    body: (body [0, 11] - [0, 29]  text: "begin x := 1; end;""#),
        "{}",
        dump
    );

    // Every node opened is closed, on the sample as well.
    let dump = dump_tree(&parse(SAMPLE).unwrap(), SAMPLE, false);
    let structure: String = dump.lines().filter(|line| !line.trim_start().starts_with("text:")).collect();
    assert_eq!(structure.matches('(').count(), structure.matches(')').count());
    assert!(dump.contains("(if_statement"));
    assert!(dump.contains("alternative: (expression_statement"));
    assert!(dump.contains("(while_statement"));
    assert!(dump.contains("(break_statement"));
    assert!(dump.contains(r#"text: "0x1""#));
    assert!(dump.contains(r#"text: "\"found \\\"it\\\"\"""#));
}

#[test]
fn test_cli_tree_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_var2-parse"))
        .args(["--tree", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"method f() begin x := 1; end;\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("(program [0, 0] - [1, 0]\n"), "{}", stdout);
    assert!(stdout.contains("(assignment_expression [0, 17] - [0, 23]"), "{}", stdout);
}

#[test]
fn test_cli_reports_stdin_errors() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_var2-parse"))
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"method f() begin x := 1 end;").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("<stdin>:1:25: error: expected `;`"), "{}", stderr);
}
