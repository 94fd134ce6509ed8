//! The right-to-left matcher: walks a host from its rightmost label inward
//! against the compiled trie, resolving wildcards, exceptions, and the
//! registrable-domain label along the way.
//!
//! The walk is a small state machine: at each position the cursor is either
//! trying a literal label against `node`'s children or, on literal failure,
//! trying the wildcard child. `node` always sits just past a separator edge,
//! so both the literal first-byte children and the `'*'`/`'!'`/terminal
//! markers live directly on it. A single backtrack point (node, cursor, and
//! the wildcard bookkeeping in flight at the time) is kept so a dead end
//! after a wildcard step can fall back to the state the walk was in right
//! before that wildcard was taken.
//!
//! Whether the final accepted depth needs one more label added (the
//! registrable label) does not depend on whether the *last* step taken was a
//! wildcard — a trailing wildcard (nothing follows it in the rule) is
//! matched the same as an ordinary literal rule and still gets the extra
//! label (cross-checked against the canonical `*.ck`/`*.kobe.jp` fixtures:
//! `b.test.ck` keeps all three labels). The extra label is skipped only for
//! a genuine *mid-pattern* wildcard — one with at least one more position
//! matched literally after it before the rule terminates, as in
//! `ci.sunnyvale.ca.us` under a `*.ca.us`-shaped rule. See DESIGN.md for why
//! this reading was chosen over a looser, purely descriptive reading of the
//! wildcard-only worked example.

use core::ops::Range;

use hashbrown::HashSet;

use crate::options::MatchMode;
use crate::trie::{NodeId, Trie, SEPARATOR, WILDCARD};

#[cfg(feature = "diagnostics")]
use crate::diagnostics;

/// Lowercases ASCII bytes only; non-ASCII bytes pass through untouched
/// (IDN labels are assumed pre-decoded before they reach the matcher).
pub(crate) fn lowercase_ascii(host: &[u8]) -> alloc::vec::Vec<u8> {
    host.iter().map(|b| b.to_ascii_lowercase()).collect()
}

/// Byte-for-byte suffix match over an already-lowercased host.
///
/// Returns the matched byte range into `host`, or `None` for an empty
/// result. `host` must already be ASCII-lowercased by the caller
/// ([`lowercase_ascii`]); the matcher never allocates or mutates it.
pub(crate) fn match_suffix(trie: &Trie, host: &[u8], mode: MatchMode) -> Option<Range<usize>> {
    let len = host.len();
    if len == 0 {
        return None;
    }
    if host[len - 1] == b'.' {
        return None;
    }

    // A host whose rightmost byte is a digit is treated as an IPv4-like
    // literal rather than walked through the trie at all.
    if host[len - 1].is_ascii_digit() {
        if mode.is_strict() {
            return None;
        }
        let looks_like_ipv4 = len <= 15 && host.iter().all(|&b| b.is_ascii_digit() || b == b'.');
        return looks_like_ipv4.then(|| 0..len);
    }

    let walk = walk_trie(trie, host);
    finish(trie, host, walk, mode)
}

/// One (node, cursor, wildcard-bookkeeping) snapshot, used both as the
/// matcher's running state and as the single backtrack point.
#[derive(Clone, Copy)]
struct State {
    node: NodeId,
    /// Index of the rightmost byte of the next unread label, or negative
    /// once the host is exhausted.
    label_end: isize,
    /// Start index of the suffix matched so far.
    suffix_start: usize,
    /// A wildcard step was just taken and no literal step has followed it
    /// yet — used to detect genuine mid-pattern wildcards.
    pending_wildcard: bool,
    /// A wildcard step was followed by at least one more successful step
    /// before the rule terminated — a genuine mid-pattern wildcard.
    mid_pattern: bool,
}

struct WalkResult {
    state: State,
    backtrack: Option<State>,
}

fn walk_trie(trie: &Trie, host: &[u8]) -> WalkResult {
    let mut state = State {
        node: trie.root(),
        label_end: (host.len() - 1) as isize,
        suffix_start: host.len(),
        pending_wildcard: false,
        mid_pattern: false,
    };
    let mut backtrack: Option<State> = None;

    while state.label_end >= 0 {
        if let Some(next) = try_literal(trie, &state, host) {
            #[cfg(feature = "diagnostics")]
            diagnostics::trace_word(host, next.suffix_start);
            state = next;
            continue;
        }
        if let Some(next) = try_wildcard(trie, &state, host) {
            #[cfg(feature = "diagnostics")]
            diagnostics::trace_wildcard(host, next.suffix_start);
            backtrack = Some(state);
            state = next;
            continue;
        }
        #[cfg(feature = "diagnostics")]
        if backtrack.is_some() {
            diagnostics::trace_backtracking(host, state.suffix_start);
        }
        break;
    }

    WalkResult { state, backtrack }
}

/// Attempts one literal-label step from `state.node`.
fn try_literal(trie: &Trie, state: &State, host: &[u8]) -> Option<State> {
    let mut cur = state.label_end;
    let mut probe = state.node;
    let mut consumed = 0usize;

    loop {
        if cur < 0 {
            break;
        }
        let b = host[cur as usize];
        if b == b'.' {
            break;
        }
        // '!' and '*' are trie markers, never literal host bytes.
        if b == b'!' || b == b'*' {
            return None;
        }
        match trie.child(probe, b) {
            Some(next) => {
                probe = next;
                cur -= 1;
                consumed += 1;
            }
            None => return None,
        }
    }

    if consumed == 0 {
        return None;
    }
    let dot_node = trie.child(probe, SEPARATOR)?;

    let label_begin = (cur + 1) as usize;
    Some(State {
        node: dot_node,
        label_end: cur - 1,
        suffix_start: label_begin,
        pending_wildcard: false,
        mid_pattern: state.mid_pattern || state.pending_wildcard,
    })
}

/// Attempts a wildcard step from `state.node`: skips exactly one host
/// label, regardless of its content.
fn try_wildcard(trie: &Trie, state: &State, host: &[u8]) -> Option<State> {
    let wnode = trie.child(state.node, WILDCARD)?;
    let dot_node = trie.child(wnode, SEPARATOR)?;

    let mut cur = state.label_end;
    while cur >= 0 && host[cur as usize] != b'.' {
        cur -= 1;
    }
    let label_begin = (cur + 1) as usize;

    Some(State {
        node: dot_node,
        label_end: cur - 1,
        suffix_start: label_begin,
        pending_wildcard: true,
        mid_pattern: state.mid_pattern || state.pending_wildcard,
    })
}

/// Walks exactly one label leftward from `label_end`, for the registrable-
/// label consumption and the permissive fallback.
fn consume_one_label(host: &[u8], label_end: isize) -> Option<usize> {
    if label_end < 0 {
        return None;
    }
    let mut cur = label_end;
    while cur >= 0 && host[cur as usize] != b'.' {
        cur -= 1;
    }
    Some((cur + 1) as usize)
}

/// Resolves the end of the walk into a final suffix range.
fn finish(trie: &Trie, host: &[u8], walk: WalkResult, mode: MatchMode) -> Option<Range<usize>> {
    let WalkResult { state, backtrack } = walk;

    // An exception end, an ordinary terminal end, or (on dead end) the node
    // reached just before the last wildcard, if that was itself valid.
    let valid_end = |s: &State| trie.has_exception(s.node) || trie.has_terminal(s.node);
    let accepted = if valid_end(&state) {
        Some((state, trie.has_exception(state.node)))
    } else if let Some(bt) = backtrack.filter(valid_end) {
        Some((bt, trie.has_exception(bt.node)))
    } else {
        None
    };

    let result = match accepted {
        Some((end_state, true)) => {
            // Exception rules are the registrable domain themselves.
            reject_or_accept(host, end_state.suffix_start, mode)
        }
        Some((end_state, false)) if end_state.mid_pattern => {
            // A genuine mid-pattern wildcard already accounts for the
            // extra label; don't consume another one.
            reject_or_accept(host, end_state.suffix_start, mode)
        }
        Some((end_state, false)) => match consume_one_label(host, end_state.label_end) {
            Some(start) => reject_or_accept(host, start, mode),
            None if mode.is_strict() => None,
            None => reject_or_accept(host, end_state.suffix_start, mode),
        },
        None => permissive_fallback(host, mode),
    };

    #[cfg(feature = "diagnostics")]
    if let Some(range) = &result {
        diagnostics::trace_valid_domain(host, range.start);
    }

    result
}

/// When the walk never reaches any valid terminal or exception end (the
/// TLD itself may or may not have been recognized), permissive mode treats
/// the rightmost label as a one-label suffix and still applies the extra-
/// label rule; strict mode returns empty.
fn permissive_fallback(host: &[u8], mode: MatchMode) -> Option<Range<usize>> {
    if mode.is_strict() {
        return None;
    }
    let tld_end = (host.len() - 1) as isize;
    let tld_start = consume_one_label(host, tld_end)?;
    match consume_one_label(host, tld_start as isize - 1) {
        Some(start) => reject_or_accept(host, start, mode),
        None => reject_or_accept(host, tld_start, mode),
    }
}

/// A structurally forbidden byte immediately left of the matched suffix
/// rejects the match in strict mode. Also trims a leading separator the
/// arithmetic above should never actually produce.
fn reject_or_accept(host: &[u8], mut start: usize, mode: MatchMode) -> Option<Range<usize>> {
    if start < host.len() && host[start] == b'.' {
        start += 1;
    }
    if mode.is_strict() && start > 0 {
        let prev = host[start - 1];
        if prev == b'!' || prev == b'*' {
            return None;
        }
    }
    Some(start..host.len())
}

/// Returns true iff the rightmost label of the lowercased host is in
/// `valid_tlds`.
pub(crate) fn has_valid_tld(valid_tlds: &HashSet<alloc::boxed::Box<[u8]>>, host: &[u8]) -> bool {
    if host.is_empty() {
        return false;
    }
    let last = match host.iter().rposition(|&b| b == b'.') {
        Some(idx) => &host[idx + 1..],
        None => host,
    };
    !last.is_empty() && valid_tlds.contains(last)
}
