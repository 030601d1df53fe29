use tinyc::errors::FrontResult;
use tinyc::frontend::lexer::scan_str;
use tinyc::printer::print_tokens;
use tinyc::frontend::token::TokenKind;
use tinyc::{parse_str, print_token, print_tree, render_ast, Dialect};

#[test]
fn test_read_then_if_dump() -> FrontResult<()> {
    let program = parse_str("read x; if x<10 then write x end", Dialect::Full)?;
    let expected = "\
[========== AST ==========]
    Read: x
    If
        Op: <
            ID: x
            Integer: 10
        Write
            ID: x
";
    assert_eq!(render_ast(&program), expected);
    Ok(())
}

#[test]
fn test_full_language_dump() -> FrontResult<()> {
    let source = "
{ counts down from n }
proc tick begin
    write n
end
read n;
repeat
    call tick;
    n := n - 1;
    if n = 3 then break else continue end
until n < 0.5
";
    let program = parse_str(source, Dialect::Full)?;
    let expected = "\
    Proc: tick
        Write
            ID: n
    Read: n
    Repeat
        Call: tick
        Assign to: n
            Op: -
                ID: n
                Integer: 1
        If
            Op: =
                ID: n
                Integer: 3
            Break
            Continue
        Op: <
            ID: n
            Float: 0.5
";
    assert_eq!(print_tree(&program), expected);
    Ok(())
}

#[test]
fn test_nested_expression_indentation() -> FrontResult<()> {
    let program = parse_str("y := (a + b) * c", Dialect::Full)?;
    let expected = "\
    Assign to: y
        Op: *
            Op: +
                ID: a
                ID: b
            ID: c
";
    assert_eq!(print_tree(&program), expected);
    Ok(())
}

#[test]
fn test_large_integer_dump() -> FrontResult<()> {
    let program = parse_str("write 12345678901234567890123", Dialect::Full)?;
    let expected = "\
    Write
        Integer: 12345678901234567890123
";
    assert_eq!(print_tree(&program), expected);
    Ok(())
}

#[test]
fn test_printing_is_repeatable() -> FrontResult<()> {
    let program = parse_str("read a; repeat a := a / 2 until a < 1; write a", Dialect::Full)?;
    let first = print_tree(&program);
    let second = print_tree(&program);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_comment_does_not_change_dump() -> FrontResult<()> {
    let plain = parse_str("read x; write x", Dialect::Full)?;
    let commented = parse_str("read x; { this is ignored } write x", Dialect::Full)?;
    assert_eq!(render_ast(&plain), render_ast(&commented));
    Ok(())
}

#[test]
fn test_print_token_forms() {
    assert_eq!(print_token(TokenKind::Repeat, "repeat"), "Reserved Word: repeat");
    assert_eq!(print_token(TokenKind::Call, "call"), "Reserved Word: call");
    assert_eq!(print_token(TokenKind::Ident, "total"), "ID: total");
    assert_eq!(print_token(TokenKind::Integer, "42"), "Integer: 42");
    assert_eq!(print_token(TokenKind::LessThan, "<"), "<");
    assert_eq!(print_token(TokenKind::Semicolon, ";"), ";");
    assert_eq!(print_token(TokenKind::Error, ":"), "Error: :");
}

#[test]
fn test_token_dump() -> FrontResult<()> {
    let tokens = scan_str("read x;\nx := 1", Dialect::Full)?;
    let expected = "\
1: Reserved Word: read
1: ID: x
1: ;
2: ID: x
2: :=
2: Integer: 1
2: EOF
";
    assert_eq!(print_tokens(&tokens), expected);
    Ok(())
}
