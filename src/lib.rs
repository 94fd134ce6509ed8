//! A compiled byte-trie for Public-Suffix-List-style suffix and
//! registrable-domain matching.
//!
//! Rule text in the brace grammar compiles once into a [`Trie`](trie::Trie);
//! [`Suffixes::public_suffix`] and [`Suffixes::base_domain`] then walk that
//! trie right-to-left against a host without touching the rule text again.
//! The two differ only in how they handle an unmatched or depth-short host:
//! `public_suffix` is strict and returns `""`, `base_domain` is permissive
//! and falls back to heuristics that always produce a plausible domain.
//!
//! ```
//! use suffixtrie::Suffixes;
//!
//! let suffixes = Suffixes::compile("com\nuk { co }\n", "", Default::default()).unwrap();
//! assert_eq!(suffixes.public_suffix("www.foo.com"), "foo.com");
//! assert_eq!(suffixes.base_domain("www.foo.zz"), "foo.zz");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::path::Path;
#[cfg(feature = "std")]
use std::sync::OnceLock;

use hashbrown::HashSet;

pub mod errors;
pub mod options;

mod compiler;
mod matcher;
mod trie;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

pub use errors::{Error, Result, RuleSyntax, Warning};
pub use options::{CompileOpts, MatchMode};

/// The bundled default corpus and its special-cases, embedded at build time.
/// Built from this crate's own brace-grammar fixture rather than a fetched
/// PSL file, since rule acquisition over the network is out of scope here.
#[cfg(feature = "std")]
const DEFAULT_PRIMARY_RULES: &str = include_str!("../assets/primary.rules");
#[cfg(feature = "std")]
const DEFAULT_SPECIAL_RULES: &str = include_str!("../assets/special.rules");

#[cfg(feature = "std")]
static GLOBAL: OnceLock<Suffixes> = OnceLock::new();

/// A compiled trie plus its valid-TLD set.
///
/// Immutable once built: every lookup method takes `&self`. Construct one
/// with [`Suffixes::compile`], or reuse the bundled default via
/// [`Suffixes::global`].
pub struct Suffixes {
    trie: trie::Trie,
    valid_tlds: HashSet<alloc::boxed::Box<[u8]>>,
    warnings: Vec<Warning>,
}

impl Suffixes {
    /// Compiles `primary` and `special` rule text (in that order) into a
    /// new [`Suffixes`].
    pub fn compile(primary: &str, special: &str, opts: CompileOpts) -> Result<Self> {
        let compiler::Compiled {
            trie,
            valid_tlds,
            warnings,
        } = compiler::compile(primary, special, opts)?;
        Ok(Self {
            trie,
            valid_tlds,
            warnings,
        })
    }

    /// Reads `path` from disk and compiles it as the primary corpus (with
    /// no special corpus), using `CompileOpts::default()`.
    ///
    /// Requires the `std` feature, since it touches the filesystem.
    #[cfg(feature = "std")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, CompileOpts::default())
    }

    /// Reads `path` from disk and compiles it as the primary corpus (with
    /// no special corpus), using explicit `CompileOpts`.
    ///
    /// Requires the `std` feature, since it touches the filesystem.
    #[cfg(feature = "std")]
    pub fn from_file_with<P: AsRef<Path>>(path: P, opts: CompileOpts) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::compile(&text, "", opts)
    }

    /// Non-fatal issues collected while compiling, if
    /// `opts.collect_warnings` was set. Empty otherwise.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// The process-wide default instance, compiled once from the bundled
    /// rule corpus on first use.
    ///
    /// Requires the `std` feature: the bundled corpus is loaded via
    /// `include_str!` and the one-shot guard is `std::sync::OnceLock`,
    /// neither of which are available to a `no_std` build.
    #[cfg(feature = "std")]
    pub fn global() -> &'static Suffixes {
        GLOBAL.get_or_init(|| {
            Suffixes::compile(DEFAULT_PRIMARY_RULES, DEFAULT_SPECIAL_RULES, CompileOpts::default())
                .expect("bundled default ruleset must compile")
        })
    }

    /// Strict suffix match: returns `""` if `host` doesn't match any rule,
    /// or matches one but lacks the extra registrable label the rule
    /// demands.
    pub fn public_suffix(&self, host: &str) -> String {
        self.lookup(host, MatchMode::Strict)
    }

    /// Permissive suffix match: falls back to treating an unrecognized or
    /// depth-short suffix as valid rather than returning empty.
    pub fn base_domain(&self, host: &str) -> String {
        self.lookup(host, MatchMode::Permissive)
    }

    /// True if the rightmost label of `host` is a known TLD, independent of
    /// whether the full host matches any complete rule.
    pub fn has_valid_tld(&self, host: &str) -> bool {
        let lower = matcher::lowercase_ascii(host.as_bytes());
        matcher::has_valid_tld(&self.valid_tlds, &lower)
    }

    fn lookup(&self, host: &str, mode: MatchMode) -> String {
        let lower = matcher::lowercase_ascii(host.as_bytes());
        match matcher::match_suffix(&self.trie, &lower, mode) {
            Some(range) => String::from_utf8_lossy(&lower[range]).into_owned(),
            None => String::new(),
        }
    }
}

/// Strict suffix match against the bundled default ruleset.
///
/// Equivalent to `Suffixes::global().public_suffix(host)`. Requires the
/// `std` feature; see [`Suffixes::global`].
#[cfg(feature = "std")]
pub fn public_suffix(host: &str) -> String {
    Suffixes::global().public_suffix(host)
}

/// Permissive suffix match against the bundled default ruleset.
///
/// Equivalent to `Suffixes::global().base_domain(host)`. Requires the
/// `std` feature; see [`Suffixes::global`].
#[cfg(feature = "std")]
pub fn base_domain(host: &str) -> String {
    Suffixes::global().base_domain(host)
}

/// TLD validity check against the bundled default ruleset.
///
/// Requires the `std` feature; see [`Suffixes::global`].
#[cfg(feature = "std")]
pub fn has_valid_tld(host: &str) -> bool {
    Suffixes::global().has_valid_tld(host)
}
