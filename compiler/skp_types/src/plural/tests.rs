use super::*;
use pretty_assertions::assert_eq;

#[test]
fn detects_irregular_plural_group() {
    assert!(has_plural_group("part(y|(?<plural>ies))"));
    assert!(has_plural_group("(?<plural>)"));
    assert!(has_plural_group("item(?<plural>s)?"));
}

#[test]
fn missing_group_is_not_detected() {
    assert!(!has_plural_group("number"));
    assert!(!has_plural_group(""));
    assert!(!has_plural_group("(?<plurals>s)"));
    assert!(!has_plural_group("(?P<plural>s)"));
}

#[test]
fn escaped_group_is_not_detected() {
    assert!(!has_plural_group(r"\(?<plural>ies\)"));
    assert!(!has_plural_group(r"foo\(?<plural>"));
}

#[test]
fn doubled_backslash_still_counts_as_escaped() {
    assert!(!has_plural_group(r"x\\(?<plural>s)"));
}

#[test]
fn any_unescaped_occurrence_is_enough() {
    assert!(has_plural_group(r"\(?<plural>a|(?<plural>b)"));
}

#[test]
fn normalize_appends_suffix() {
    assert_eq!(normalize_pattern("number"), "number(?<plural>)??");
    assert_eq!(normalize_pattern(""), "(?<plural>)??");
}

#[test]
fn normalize_keeps_explicit_group() {
    let normalized = normalize_pattern("part(y|(?<plural>ies))");
    assert!(matches!(normalized, Cow::Borrowed(_)));
    assert_eq!(normalized, "part(y|(?<plural>ies))");
}

#[test]
fn normalize_trims_before_detection() {
    assert_eq!(normalize_pattern("  item\t\n"), "item(?<plural>)??");
    assert_eq!(
        normalize_pattern(" part(y|(?<plural>ies)) "),
        "part(y|(?<plural>ies))"
    );
}

#[test]
fn normalize_appends_after_escaped_group() {
    assert_eq!(
        normalize_pattern(r"\(?<plural>x\)"),
        r"\(?<plural>x\)(?<plural>)??"
    );
}

mod proptest_normalize {
    use super::super::{has_plural_group, normalize_pattern, PLURAL_SUFFIX};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn plain_words_get_suffix(word in "[a-z]{1,16}") {
            let normalized = normalize_pattern(&word);
            prop_assert_eq!(&*normalized, format!("{word}{PLURAL_SUFFIX}"));
            prop_assert!(has_plural_group(&normalized));
        }

        #[test]
        fn explicit_groups_are_untouched(
            stem in "[a-z]{1,12}",
            plural in "[a-z]{0,6}",
        ) {
            let pattern = format!("{stem}(?<plural>{plural})?");
            prop_assert_eq!(&*normalize_pattern(&pattern), pattern.as_str());
        }

        #[test]
        fn normalization_is_idempotent(pattern in "[a-z()?<> ]{0,24}") {
            let once = normalize_pattern(&pattern).into_owned();
            let twice = normalize_pattern(&once);
            prop_assert_eq!(&*twice, once.as_str());
        }
    }
}
