//! Tests for line classification.

use super::line::{Line, classify};

mod basics {
    use super::*;

    #[test]
    fn empty_line_is_blank() {
        assert_eq!(classify(""), Line::Blank);
    }

    #[test]
    fn semicolon_and_hash_start_comments() {
        assert_eq!(classify("; a comment"), Line::Comment);
        assert_eq!(classify("#another"), Line::Comment);
    }

    #[test]
    fn bracketed_line_is_a_section_header() {
        assert_eq!(classify("[Tests]"), Line::Section("Tests"));
    }

    #[test]
    fn section_interior_is_not_trimmed() {
        assert_eq!(classify("[ Tests ]"), Line::Section(" Tests "));
    }

    #[test]
    fn empty_brackets_name_the_empty_section() {
        assert_eq!(classify("[]"), Line::Section(""));
    }

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(
            classify("StringValue=Now is the time"),
            Line::Assignment("StringValue", "Now is the time")
        );
    }

    #[test]
    fn value_keeps_further_equals_verbatim() {
        assert_eq!(classify("Key=a=b=c"), Line::Assignment("Key", "a=b=c"));
    }

    #[test]
    fn key_and_value_are_not_trimmed_around_equals() {
        assert_eq!(classify("Key = value"), Line::Assignment("Key ", " value"));
    }
}

mod degenerate_shapes {
    use super::*;

    #[test]
    fn line_without_equals_becomes_empty_valued_key() {
        assert_eq!(classify("JustAKey"), Line::Assignment("JustAKey", ""));
    }

    #[test]
    fn trailing_equals_yields_empty_value() {
        assert_eq!(classify("Key="), Line::Assignment("Key", ""));
    }

    #[test]
    fn leading_equals_yields_empty_key() {
        assert_eq!(classify("=value"), Line::Assignment("", "value"));
    }

    #[test]
    fn open_bracket_without_close_is_an_assignment() {
        assert_eq!(classify("["), Line::Assignment("[", ""));
        assert_eq!(classify("[x]=y"), Line::Assignment("[x]", "y"));
    }

    #[test]
    fn header_shape_wins_over_assignment_shape() {
        // Classification is exclusive: a bracket-delimited line is only a
        // header, even when it contains an equals sign.
        assert_eq!(classify("[x]=y]"), Line::Section("x]=y"));
    }
}
