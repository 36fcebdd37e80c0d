use super::*;

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.peek(), None);
}

#[test]
fn advance_moves_by_char_width() {
    let mut cursor = Cursor::new("aé日");
    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.advance(), Some('é'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), Some('日'));
    assert_eq!(cursor.advance(), Some('日'));
    assert_eq!(cursor.pos(), 6);
    assert!(cursor.is_eof());
    assert_eq!(cursor.advance(), None);
}

#[test]
fn peek_sees_second_char() {
    let cursor = Cursor::new("${x}");
    assert_eq!(cursor.current(), Some('$'));
    assert_eq!(cursor.peek(), Some('{'));
}

#[test]
fn eat_while_stops_at_predicate() {
    let mut cursor = Cursor::new("8080 rest");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "8080");
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn eat_until_line_end_stops_before_terminator() {
    let mut cursor = Cursor::new("comment text\r\nnext");
    cursor.eat_until_line_end();
    assert_eq!(cursor.slice_from(0), "comment text");
    assert_eq!(cursor.current(), Some('\r'));

    let mut cursor = Cursor::new("no newline");
    cursor.eat_until_line_end();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_byte_reports_whether_found() {
    let mut cursor = Cursor::new("raw ünïcode`tail");
    assert!(cursor.eat_until_byte(b'`'));
    assert_eq!(cursor.current(), Some('`'));
    assert_eq!(cursor.slice_from(0), "raw ünïcode");

    let mut cursor = Cursor::new("unterminated");
    assert!(!cursor.eat_until_byte(b'`'));
    assert!(cursor.is_eof());
}

#[test]
fn span_from_covers_consumed_bytes() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    let start = cursor.pos();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.span_from(start), Span::new(1, 3));
}
