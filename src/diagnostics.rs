//! Optional tracing hooks, gated behind the `diagnostics` feature.
//!
//! These never influence a match result — they are called for their side
//! effect only, from points in [`crate::matcher`] where the walk commits to
//! a literal step, a wildcard step, a backtrack, or a final accepted
//! domain. Disabling the feature removes every call site at compile time,
//! so there is no runtime cost to carrying them in non-diagnostic builds.

use alloc::string::String;

fn host_str(host: &[u8]) -> String {
    String::from_utf8_lossy(host).into_owned()
}

pub(crate) fn trace_word(host: &[u8], matched_from: usize) {
    tracing::trace!(
        host = %host_str(host),
        matched = %host_str(&host[matched_from..]),
        "matched word:"
    );
}

pub(crate) fn trace_wildcard(host: &[u8], matched_from: usize) {
    tracing::trace!(
        host = %host_str(host),
        matched = %host_str(&host[matched_from..]),
        "matched wildcard:"
    );
}

pub(crate) fn trace_backtracking(host: &[u8], resumed_from: usize) {
    tracing::trace!(
        host = %host_str(host),
        resumed_at = %host_str(&host[resumed_from..]),
        "backtracking:"
    );
}

pub(crate) fn trace_valid_domain(host: &[u8], suffix_from: usize) {
    tracing::trace!(
        host = %host_str(host),
        domain = %host_str(&host[suffix_from..]),
        "VALID DOMAIN:"
    );
}

/// Dumps every compiled rule path as a line of text, via the trie's own
/// depth-first walk. Intended for debugging a compiled ruleset, not for use
/// on any matching hot path.
pub fn dump_tree(suffixes: &crate::Suffixes) -> alloc::vec::Vec<String> {
    let mut lines = alloc::vec::Vec::new();
    suffixes.trie.dump_paths(|line| lines.push(String::from(line)));
    lines
}
