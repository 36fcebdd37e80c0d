use crate::options::LexOptions;
use crate::resolver::Bindings;
use crate::scanner::tests::{scan, scan_pairs, scan_with};
use denv_ir::{Span, TokenKind, Value};
use pretty_assertions::assert_eq;

fn texts(source: &str) -> Vec<String> {
    scan(source).into_iter().map(|tok| tok.text).collect()
}

#[test]
fn double_and_single_quotes() {
    assert_eq!(
        scan_pairs(r#"A="hello world" B='it''s'"#),
        vec![
            (TokenKind::Identifier, "A".to_owned()),
            (TokenKind::Equal, "=".to_owned()),
            (TokenKind::Text, "hello world".to_owned()),
            (TokenKind::Identifier, "B".to_owned()),
            (TokenKind::Equal, "=".to_owned()),
            (TokenKind::Text, "it".to_owned()),
            (TokenKind::Text, "s".to_owned()),
        ]
    );
}

#[test]
fn quotes_do_not_mix() {
    assert_eq!(texts(r#""it's""#), vec!["it's"]);
    assert_eq!(texts(r#"'say "hi"'"#), vec![r#"say "hi""#]);
}

#[test]
fn escapes() {
    assert_eq!(texts(r#""a\nb\tc\rd""#), vec!["a\nb\tc\rd"]);
    assert_eq!(texts(r#""q\"uote \\ \x""#), vec![r#"q"uote \ x"#]);
}

#[test]
fn escaped_dollar_is_not_interpolation() {
    let tokens = scan(r#""\${name}""#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Text);
    assert_eq!(tokens[0].text, "${name}");
}

#[test]
fn empty_string_is_one_empty_text() {
    let tokens = scan(r#"A="""#);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind, TokenKind::Text);
    assert_eq!(tokens[2].text, "");
}

#[test]
fn unterminated_string_runs_to_end() {
    assert_eq!(texts("\"never closed\nB=1"), vec!["never closed\nB=1"]);
}

#[test]
fn interpolation_with_binding() {
    let mut bindings = Bindings::new();
    bindings.insert("name", "bob");
    let tokens = scan_with(r#""hi ${name}!""#, &LexOptions::default(), &bindings);

    let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Text, "hi "),
            (TokenKind::Variable, "bob"),
            (TokenKind::Text, "!"),
        ]
    );
    assert_eq!(tokens[0].span, Span::new(1, 4));
    assert_eq!(tokens[1].span, Span::new(4, 11));
    assert_eq!(tokens[2].span, Span::new(11, 12));
    assert!(tokens[0].span.touches(tokens[1].span));
    assert!(tokens[1].span.touches(tokens[2].span));
}

#[test]
fn interpolation_uses_canonical_text() {
    let mut bindings = Bindings::new();
    bindings.insert("port", Value::Integer(8080));
    bindings.insert("ratio", Value::Float(2.0));
    let tokens = scan_with(r#""${port}/${ratio}""#, &LexOptions::default(), &bindings);
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["8080", "/", "2.0"]);
}

#[test]
fn missing_binding_becomes_placeholder() {
    let tokens = scan(r#""hi ${name}""#);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Placeholder);
    assert_eq!(tokens[1].text, "name");
}

#[test]
fn unclosed_interpolation_takes_rest_as_name() {
    let tokens = scan(r#""${open"#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Placeholder);
    assert_eq!(tokens[0].text, "open");
}

#[test]
fn lone_dollar_is_text() {
    assert_eq!(texts(r#""cost $5""#), vec!["cost $5"]);
}

#[test]
fn separate_literals_are_not_adjacent() {
    let tokens = scan(r#""a""b""#);
    assert_eq!(tokens.len(), 2);
    assert!(!tokens[0].span.touches(tokens[1].span));
}

#[test]
fn raw_string_is_verbatim() {
    let tokens = scan(r#"`no \n ${escape} "here"`"#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Text);
    assert_eq!(tokens[0].text, r#"no \n ${escape} "here""#);
}

#[test]
fn raw_string_empty_and_unterminated() {
    assert_eq!(texts("``"), vec![""]);
    assert_eq!(texts("`open to end"), vec!["open to end"]);
}
