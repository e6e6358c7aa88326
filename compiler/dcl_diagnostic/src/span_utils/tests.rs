use super::*;

#[test]
fn first_line() {
    let source = "abc\ndef";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
}

#[test]
fn later_lines() {
    let source = "abc\ndef\n\nxyz";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 9), (4, 1));
    assert_eq!(table.offset_to_line_col(source, 11), (4, 3));
}

#[test]
fn columns_count_characters() {
    let source = "\"ü\" + x";
    let table = LineOffsetTable::build(source);
    let x = u32::try_from(source.find('x').unwrap_or(0)).unwrap_or(0);
    assert_eq!(table.offset_to_line_col(source, x), (1, 7));
}

#[test]
fn offset_past_end() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 10), (1, 3));
}
