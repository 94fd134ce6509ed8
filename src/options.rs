#[derive(Clone, Copy, Debug)]
/// Parse-time options for compiling a ruleset into a [`crate::trie::Trie`].
///
/// These affect compilation only; they do not change how lookups behave at
/// match time (see [`MatchMode`] for that).
pub struct CompileOpts {
    /// If true, a malformed rule line (unbalanced braces, more than six
    /// positions, empty TLD) returns an error instead of being skipped.
    ///
    /// Default `false`: malformed lines are skipped and compilation
    /// continues with the rest of the ruleset.
    pub strict_rules: bool,
    /// If true, collect non-fatal [`crate::errors::Warning`]s for skipped or
    /// truncated lines. Off by default to avoid the allocation on hot
    /// compile paths that don't need diagnostics.
    pub collect_warnings: bool,
}

impl Default for CompileOpts {
    /// Defaults suitable for most applications:
    /// - `strict_rules`: false (best-effort parsing)
    /// - `collect_warnings`: false
    fn default() -> Self {
        Self {
            strict_rules: false,
            collect_warnings: false,
        }
    }
}

impl CompileOpts {
    /// Reject the first malformed line with an error rather than skipping it.
    pub fn strict() -> Self {
        Self {
            strict_rules: true,
            ..Self::default()
        }
    }

    /// Best-effort parsing that also collects warnings for skipped lines.
    pub fn lenient_with_warnings() -> Self {
        Self {
            strict_rules: false,
            collect_warnings: true,
        }
    }
}

/// Match-time mode selecting between the crate's two lookup operations.
///
/// `Strict` backs [`crate::public_suffix`]: no rule match (or an
/// insufficient host) yields an empty result. `Permissive` backs
/// [`crate::base_domain`]: unknown TLDs and depth-short hosts fall back to
/// heuristics instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// `public_suffix` semantics: strict mode.
    Strict,
    /// `base_domain` semantics: permissive mode.
    Permissive,
}

impl MatchMode {
    pub(crate) fn is_strict(self) -> bool {
        matches!(self, MatchMode::Strict)
    }
}
