// Wildcard and exception matching semantics, grounded in the canonical
// public-suffix test-vector shape used by every real implementation of this
// algorithm (the `*.ck`/`!www.ck` family is the textbook example): a plain
// wildcard TLD, one carved-out exception label, and the "+1 label, never
// +2" rule that a naive implementation gets wrong.

use suffixtrie::{CompileOpts, Suffixes};

fn ck_corpus() -> Suffixes {
    Suffixes::compile("ck { * }\nck { www } { ! }\n", "", CompileOpts::default()).expect("compile")
}

#[test]
fn bare_tld_has_no_suffix() {
    let s = ck_corpus();
    assert_eq!(s.public_suffix("ck"), "");
}

#[test]
fn one_label_under_a_wildcard_tld_has_no_registrable_domain_above_it() {
    // "test.ck" is itself the depth the wildcard designates as a suffix;
    // there is no label left over to serve as the registrable domain.
    let s = ck_corpus();
    assert_eq!(s.public_suffix("test.ck"), "");
}

#[test]
fn two_labels_under_a_wildcard_tld_is_the_registrable_domain() {
    let s = ck_corpus();
    assert_eq!(s.public_suffix("b.test.ck"), "b.test.ck");
}

#[test]
fn exactly_one_extra_label_is_consumed_never_two() {
    // A third label further left than the registrable domain ("a") is not
    // swept in along with it — the walk consumes exactly one label past
    // the matched suffix, not every remaining label.
    let s = ck_corpus();
    assert_eq!(s.public_suffix("a.b.test.ck"), "b.test.ck");
}

#[test]
fn exception_label_is_carved_out_of_the_wildcard() {
    let s = ck_corpus();
    assert_eq!(s.public_suffix("www.ck"), "www.ck");
}

#[test]
fn exception_match_discards_labels_further_left_than_its_own_depth() {
    // Unlike an ordinary terminal, an exception end consumes no extra
    // label: the registrable domain is exactly the matched exception
    // depth, not that depth plus one more to the left.
    let s = ck_corpus();
    assert_eq!(s.public_suffix("www.www.ck"), "www.ck");
}

#[test]
fn non_exception_labels_behave_like_the_plain_wildcard() {
    let s = ck_corpus();
    assert_eq!(s.public_suffix("foo.ck"), "");
    assert_eq!(s.public_suffix("a.foo.ck"), "a.foo.ck");
}

#[test]
fn base_domain_never_fails_even_where_public_suffix_does() {
    let s = ck_corpus();
    assert_eq!(s.base_domain("ck"), "ck");
    assert_eq!(s.base_domain("test.ck"), "test.ck");
}

/// A mid-pattern wildcard — one followed by a literal label one position
/// further left, rather than sitting at the end of the rule — consumes no
/// extra label of its own: the literal label after it already accounts for
/// the registrable depth.
#[test]
fn mid_pattern_wildcard_does_not_double_count_the_extra_label() {
    let s = Suffixes::compile("us { ca } { * } { ci }\n", "", CompileOpts::default()).unwrap();
    assert_eq!(
        s.public_suffix("sunset.ci.sunnyvale.ca.us"),
        "ci.sunnyvale.ca.us"
    );
    // One more label further left than the mid-pattern match is still not
    // swept in.
    assert_eq!(
        s.public_suffix("mayor.sunset.ci.sunnyvale.ca.us"),
        "ci.sunnyvale.ca.us"
    );
}

/// A wildcard step that leads to a dead end (no further literal label
/// matches, and the wildcard's own depth isn't a terminal) must fall back
/// to the state the walk was in immediately before the wildcard was taken,
/// provided that earlier state was itself a valid terminal.
#[test]
fn backtracks_past_a_wildcard_that_leads_to_a_dead_end() {
    // "wi { m }" alone is a valid (ordinary) terminal. "wi { m } { * }
    // { specific }" extends that same depth with a wildcard position that
    // is *not* itself terminal — it only continues on to the specific
    // literal "specific". Against a host whose label after "m" is neither
    // that literal nor anything the wildcard position can finish on, the
    // wildcard step is a dead end and the walk must fall back to the
    // "m.wi" state it was in right before taking it.
    let s = Suffixes::compile(
        "wi { m }\nwi { m } { * } { specific }\n",
        "",
        CompileOpts::default(),
    )
    .unwrap();

    // Falls back to the "m.wi" terminal, then still takes its usual extra
    // label ("www") — but not the one after that, since there is none.
    assert_eq!(s.public_suffix("www.m.wi"), "www.m.wi");

    // "m.wi" alone has no label left for the extra-label rule once "m"
    // itself is matched, so strict mode is empty.
    assert_eq!(s.public_suffix("m.wi"), "");
    assert_eq!(s.base_domain("m.wi"), "m.wi");
}

#[test]
fn marker_bytes_in_a_host_label_never_panic_and_never_match_as_wildcard_or_exception() {
    let s = ck_corpus();
    // A literal '*' or '!' byte can never appear in a real host label and
    // must never be mistaken for a wildcard/exception trie edge while
    // descending — try_literal's own marker check aborts that label's
    // literal step rather than spuriously walking into `ck{www}{!}` or
    // `ck{*}`'s marker children.
    let _ = s.public_suffix("*.test.ck");
    let _ = s.public_suffix("!.test.ck");
}
