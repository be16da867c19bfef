use rstest::rstest;

use super::{Delimiter, EdgeListError, EdgeListOptions, EdgeListReader, NodeIdKind};
use crate::TEST_MODE_ROW_LIMIT;

#[rstest]
#[case::plain("42", Some("42"))]
#[case::leading_zeros("0007", Some("7"))]
#[case::float_form("12.0", Some("12"))]
#[case::padded("  5 ", Some("5"))]
#[case::negative("-3", Some("-3"))]
#[case::fractional("1.5", None)]
#[case::symbol("TP53", None)]
#[case::empty("", None)]
#[case::not_a_number("NaN", None)]
#[case::infinite("inf", None)]
fn entrez_normalisation(#[case] raw: &str, #[case] expected: Option<&str>) {
    assert_eq!(NodeIdKind::Entrez.normalise(raw).as_deref(), expected);
}

#[rstest]
#[case::kept("TP53", Some("TP53"))]
#[case::trimmed(" MDM2\t", Some("MDM2"))]
#[case::numeric_kept_verbatim("007", Some("007"))]
#[case::blank("   ", None)]
fn symbol_normalisation(#[case] raw: &str, #[case] expected: Option<&str>) {
    assert_eq!(NodeIdKind::Symbol.normalise(raw).as_deref(), expected);
}

#[rstest]
#[case::tab(Delimiter::Tab, "a\tb c\td", &["a", "b c", "d"])]
#[case::comma(Delimiter::Comma, "a,b,,c", &["a", "b", "", "c"])]
#[case::whitespace(Delimiter::Whitespace, "  a \t b   c ", &["a", "b", "c"])]
fn delimiters_split_fields(
    #[case] delimiter: Delimiter,
    #[case] line: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(delimiter.split(line), expected);
}

#[rstest]
fn whitespace_is_written_as_tabs() {
    assert_eq!(Delimiter::Whitespace.output_separator(), '\t');
    assert_eq!(Delimiter::Comma.output_separator(), ',');
}

#[rstest]
fn defaults_read_a_headed_tab_separated_entrez_list() {
    let options = EdgeListOptions::default();
    assert_eq!(options.columns(), (0, 1));
    assert_eq!(options.row_limit(), None);
    assert_eq!(options.delimiter(), Delimiter::Tab);
    assert!(options.has_header());
    assert_eq!(options.id_kind(), NodeIdKind::Entrez);
}

#[rstest]
fn test_mode_toggles_the_row_limit() {
    let enabled = EdgeListOptions::new().with_test_mode(true);
    assert_eq!(enabled.row_limit(), Some(TEST_MODE_ROW_LIMIT));
    assert_eq!(enabled.with_test_mode(false).row_limit(), None);
}

#[rstest]
fn equal_columns_are_rejected() {
    let err = EdgeListReader::new(EdgeListOptions::new().with_columns(2, 2))
        .expect_err("equal columns must be rejected");
    assert!(matches!(err, EdgeListError::DuplicateColumns { column: 2 }));
}
