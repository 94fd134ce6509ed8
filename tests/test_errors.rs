use suffixtrie::errors::{Error, Result as SuffixResult, RuleSyntax, Warning};

#[test]
fn display_matches_debug_for_simple_errors() {
    let variants = [
        Error::EmptyRuleset,
        Error::RuleDepthExceeded {
            line: "tld { a } { b } { c } { d } { e } { f }".into(),
            positions: 7,
        },
        Error::InvalidRule {
            line: "uk { co".into(),
            reason: RuleSyntax::UnbalancedBraces,
        },
    ];

    for e in variants {
        assert_eq!(format!("{}", e), format!("{:?}", e));
    }
}

#[cfg(feature = "std")]
#[test]
fn error_implements_std_error_when_std_feature_enabled() {
    fn assert_is_std_error<E: std::error::Error + 'static>(_e: &E) {}
    let e = Error::EmptyRuleset;
    assert_is_std_error(&e);
}

#[cfg(feature = "std")]
#[test]
fn io_variant_display_has_stable_prefix() {
    let io_err = std::io::Error::other("oops");
    let e = Error::Io(io_err);
    let s = format!("{}", e);
    assert!(s.starts_with("Io("), "unexpected Display: {s}");
}

#[test]
fn rule_syntax_is_copy_and_debug() {
    let a = RuleSyntax::ConflictingAlternative;
    let b = a; // Copy
    assert_eq!(format!("{:?}", a), format!("{:?}", b));
}

#[test]
fn warnings_are_cloneable_and_debuggable() {
    let ws = [
        Warning::UnbalancedBraces {
            line: "uk { co".into(),
        },
        Warning::Truncated {
            line: "tld { a } { b } { c } { d } { e } { f }".into(),
            positions: 7,
        },
        Warning::EmptyRule { line: "zz { }".into() },
        Warning::Skipped {
            line: "uk { co ! }".into(),
            reason: RuleSyntax::ConflictingAlternative,
        },
    ];
    for w in ws {
        let w2 = w.clone();
        assert_eq!(format!("{:?}", w), format!("{:?}", w2));
    }
}

#[test]
fn result_alias_compiles_and_is_ok() {
    fn use_result(r: SuffixResult<()>) -> SuffixResult<()> {
        r
    }
    let r: SuffixResult<()> = Ok(());
    let out = use_result(r);
    assert!(out.is_ok());
}

#[test]
fn strict_rules_reports_the_offending_line_and_reason() {
    use suffixtrie::{CompileOpts, Suffixes};

    let err = Suffixes::compile("uk { co\n", "", CompileOpts::strict()).unwrap_err();
    match err {
        Error::InvalidRule { line, reason } => {
            assert_eq!(line, "uk { co");
            assert_eq!(reason, RuleSyntax::UnbalancedBraces);
        }
        other => panic!("expected InvalidRule, got {other:?}"),
    }
}

#[test]
fn empty_ruleset_is_reported_as_a_configuration_error() {
    use suffixtrie::{CompileOpts, Suffixes};

    let err =
        Suffixes::compile("# nothing but a comment\n", "", CompileOpts::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyRuleset));
}
