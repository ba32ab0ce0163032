#![cfg(test)]
use crate::sql::{Highlight, Statement, scan, scan_str};
use rstest::rstest;

/// One character per input character: `.` default, `k` keyword, `t` type,
/// `s` string literal.
fn mask(input: &str) -> String {
    scan_str(input)
        .highlights
        .iter()
        .map(|h| match h {
            Highlight::Default => '.',
            Highlight::Keyword => 'k',
            Highlight::Type => 't',
            Highlight::Literal => 's',
        })
        .collect()
}

fn spans(input: &str) -> Vec<(usize, usize)> {
    scan_str(input)
        .statements
        .iter()
        .map(|s| (s.start, s.length))
        .collect()
}

#[rstest]
#[case("")]
#[case(";")]
#[case(";;;")]
#[case("\n\n")]
#[case("   ")]
#[case("(,)")]
#[case("select 1")]
#[case("a;\nb;\n")]
#[case("a;\n\nb;")]
#[case("select 'abc; def; ghi")]
#[case("x;'y;'z;")]
#[case(r#"insert into t values ("a;b", 'c\'d', 'e''f');"#)]
#[case("select * from authors;\nselect * from books;\n")]
#[case(r"\\\\';")]
fn statements_cover_input(#[case] input: &str) {
    let len = input.chars().count();
    let statements = scan_str(input).statements;

    assert_eq!(
        statements.iter().map(Statement::len).sum::<usize>(),
        len,
        "statement lengths should sum to the input length"
    );
    if let Some(first) = statements.first() {
        assert_eq!(first.start, 0);
    }
    for pair in statements.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start, "statements should be contiguous");
    }
}

#[rstest]
#[case("select * from authors;\nselect * from books;")]
#[case("a'b\\'c''d'e")]
#[case("SELECT name FROM t WHERE x = 'it''s';\n\nupdate t set y = \"q;\";")]
#[case("unterminated 'literal; here")]
fn scanning_is_idempotent(#[case] input: &str) {
    let chars: Vec<char> = input.chars().collect();
    assert_eq!(scan(&chars), scan(&chars));
}

#[test]
fn splits_two_statements() {
    assert_eq!(
        spans("select * from authors;\nselect * from books;"),
        vec![(0, 23), (23, 20)]
    );
}

#[test]
fn flattened_buffer_ends_with_empty_statement() {
    // Every editor line is followed by a synthetic newline, so the last
    // terminator swallows it and an empty statement closes the stream.
    assert_eq!(
        spans("select * from authors;\nselect * from books;\n"),
        vec![(0, 23), (23, 21), (44, 0)]
    );
}

#[test]
fn only_first_newline_joins_previous_statement() {
    assert_eq!(spans("a;\n\nb;"), vec![(0, 3), (3, 3)]);
}

#[rstest]
#[case("select ';' from t; x", vec![(0, 18), (18, 2)])]
#[case("\"a;b\";c", vec![(0, 6), (6, 1)])]
#[case("'a\\';b';c", vec![(0, 8), (8, 1)])]
#[case("'a'';b';c", vec![(0, 8), (8, 1)])]
#[case("select 'abc; def; ghi", vec![(0, 21)])]
#[case(";;", vec![(0, 1), (1, 1)])]
#[case("no terminator", vec![(0, 13)])]
fn quoted_semicolons_do_not_split(#[case] input: &str, #[case] expected: Vec<(usize, usize)>) {
    assert_eq!(spans(input), expected);
}

#[test]
fn escaped_and_doubled_quotes_stay_inside_literal() {
    assert_eq!(mask("a'b\\'c''d'e"), ".sssssssss.");
}

#[test]
fn empty_literal_closes_immediately() {
    assert_eq!(mask("'';"), "ss.");
    assert_eq!(spans("'';"), vec![(0, 3)]);
}

#[test]
fn escaped_backslash_does_not_escape_quote() {
    // `\\` is one escaped backslash, the quote after it opens a literal.
    assert_eq!(mask("\\\\'x'"), "..sss");
}

#[test]
fn adjacent_literals_merge_into_one() {
    // Documented edge: `'a''b'` reads as one literal with an escaped quote,
    // the same as standard SQL doubled-quote escaping.
    assert_eq!(mask("'a''b';"), "ssssss.");
    assert_eq!(spans("'a''b';x"), vec![(0, 7), (7, 1)]);
}

#[test]
fn unterminated_literal_colours_rest_of_buffer() {
    assert_eq!(mask("x 'ab; c"), "..ssssss");
}

#[rstest]
#[case("select", "kkkkkk")]
#[case("SELECT x", "kkkkkk..")]
#[case("SeLeCt x", "kkkkkk..")]
#[case("varchar", "ttttttt")]
#[case("create table t (id int, name varchar(20));", "kkkkkk.kkkkk.......ttt..kkkk.ttttttt......")]
#[case("authors", ".......")]
#[case("(select)", ".kkkkkk.")]
#[case("select\nfrom", "kkkkkk.kkkk")]
fn classifies_words(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(mask(input), expected);
}

#[test]
fn tab_is_not_a_word_delimiter() {
    // Only space, newline, parens, comma and semicolon split words.
    assert_eq!(mask("select\tx"), "........");
}

#[test]
fn quote_prefixed_word_is_not_a_keyword() {
    assert_eq!(mask("'select'"), "ssssssss");
}

#[test]
fn keyword_colour_wins_inside_literal() {
    assert_eq!(mask("'a select b'"), "ssskkkkkksss");
}

#[test]
fn highlight_per_character_for_multibyte_text() {
    let input = "select 'héllo';";
    assert_eq!(scan_str(input).highlights.len(), input.chars().count());
    assert_eq!(mask(input), "kkkkkk.sssssss.");
}
