//! The brace-grammar rule compiler.
//!
//! Turns rule text into trie edges. A line is a TLD token followed by zero
//! or more brace groups, each group enumerating the alternatives for the
//! next label position moving leftward:
//!
//! ```text
//! uk { co nhs sch } { * }
//! ```
//!
//! An empty group `{ }` or the `!` alternative both end a rule early without
//! consuming a further label — they install a marker on the node reached so
//! far rather than inserting a label edge. Everything else (a literal token
//! or `*`) is a label alternative that advances one position and fans the
//! insertion out across every alternative in its group, so the cross-product
//! of a rule's groups is represented implicitly through shared trie
//! prefixes.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::errors::{Error, Result, RuleSyntax, Warning};
use crate::options::CompileOpts;
use crate::trie::{NodeId, Trie};

/// At most six label positions per rule (TLD plus five groups).
const MAX_POSITIONS: usize = 6;

/// Output of compiling one or more rule corpora.
pub(crate) struct Compiled {
    pub(crate) trie: Trie,
    pub(crate) valid_tlds: HashSet<Box<[u8]>>,
    pub(crate) warnings: Vec<Warning>,
}

enum Alt {
    Literal(String),
    Wildcard,
}

enum Position {
    Alts(Vec<Alt>),
    /// `{ }` or a lone `!` alternative: end the rule here, no label consumed.
    /// `true` means the end is an exception.
    End { exception: bool },
}

struct Rule {
    positions: Vec<Position>,
}

/// Splits a line into tokens, treating `{` and `}` as standalone tokens
/// even when not surrounded by whitespace.
fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'{' || b == b'}' {
            if let Some(s) = start.take() {
                tokens.push(&line[s..i]);
            }
            tokens.push(&line[i..i + 1]);
            i += 1;
        } else if b.is_ascii_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(&line[s..i]);
            }
            i += 1;
        } else {
            if start.is_none() {
                start = Some(i);
            }
            i += 1;
        }
    }
    if let Some(s) = start {
        tokens.push(&line[s..]);
    }
    tokens
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parses one non-blank, comment-stripped line into a rule.
fn parse_rule(tokens: &[&str]) -> core::result::Result<Rule, RuleSyntax> {
    let (tld, mut rest) = tokens
        .split_first()
        .ok_or(RuleSyntax::MissingTld)?;
    if tld.is_empty() || *tld == "{" || *tld == "}" {
        return Err(RuleSyntax::MissingTld);
    }

    let mut positions = Vec::with_capacity(4);
    positions.push(Position::Alts(alloc::vec![Alt::Literal((*tld).into())]));

    while !rest.is_empty() {
        if rest[0] != "{" {
            return Err(RuleSyntax::UnbalancedBraces);
        }
        rest = &rest[1..];
        let close = rest
            .iter()
            .position(|&t| t == "}")
            .ok_or(RuleSyntax::UnbalancedBraces)?;
        let body = &rest[..close];
        rest = &rest[close + 1..];

        if body.is_empty() {
            positions.push(Position::End { exception: false });
            continue;
        }
        if body.iter().any(|&t| t == "{") {
            return Err(RuleSyntax::UnbalancedBraces);
        }

        if body.len() == 1 && body[0] == "!" {
            positions.push(Position::End { exception: true });
            continue;
        }
        if body.iter().any(|&t| t == "!") {
            return Err(RuleSyntax::ConflictingAlternative);
        }

        let alts = body
            .iter()
            .map(|&tok| {
                if tok == "*" {
                    Alt::Wildcard
                } else {
                    Alt::Literal(tok.into())
                }
            })
            .collect();
        positions.push(Position::Alts(alts));
    }

    Ok(Rule { positions })
}

fn lowercase_ascii(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b.to_ascii_lowercase()).collect()
}

fn insert_rule(trie: &mut Trie, node: NodeId, positions: &[Position]) {
    match positions.split_first() {
        None => trie.mark_terminal(node),
        Some((Position::End { exception: true }, _)) => trie.mark_exception(node),
        Some((Position::End { exception: false }, _)) => trie.mark_terminal(node),
        Some((Position::Alts(alts), rest)) => {
            for alt in alts {
                let next = match alt {
                    Alt::Literal(label) => trie.insert_literal_label(node, &lowercase_ascii(label)),
                    Alt::Wildcard => trie.insert_wildcard(node),
                };
                insert_rule(trie, next, rest);
            }
        }
    }
}

fn tld_of(rule: &Rule) -> Option<&str> {
    match rule.positions.first() {
        Some(Position::Alts(alts)) => alts.iter().find_map(|a| match a {
            Alt::Literal(l) => Some(l.as_str()),
            Alt::Wildcard => None,
        }),
        _ => None,
    }
}

/// Compiles one corpus of rule text into `trie`/`valid_tlds`, honoring
/// `opts` for malformed or oversized lines. Returns warnings collected (if
/// `opts.collect_warnings`) or propagates the first error in strict mode.
fn compile_corpus(
    text: &str,
    trie: &mut Trie,
    valid_tlds: &mut HashSet<Box<[u8]>>,
    opts: CompileOpts,
    warnings: &mut Vec<Warning>,
) -> Result<()> {
    for raw_line in text.lines() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let tokens = tokenize(line);
        let mut rule = match parse_rule(&tokens) {
            Ok(rule) => rule,
            Err(reason) => {
                if opts.strict_rules {
                    return Err(Error::InvalidRule {
                        line: line.into(),
                        reason,
                    });
                }
                if opts.collect_warnings {
                    warnings.push(Warning::Skipped {
                        line: line.into(),
                        reason,
                    });
                }
                continue;
            }
        };

        if rule.positions.len() > MAX_POSITIONS {
            if opts.strict_rules {
                return Err(Error::RuleDepthExceeded {
                    line: line.into(),
                    positions: rule.positions.len(),
                });
            }
            if opts.collect_warnings {
                warnings.push(Warning::Truncated {
                    line: line.into(),
                    positions: rule.positions.len(),
                });
            }
            rule.positions.truncate(MAX_POSITIONS);
        }

        if let Some(tld) = tld_of(&rule) {
            valid_tlds.insert(lowercase_ascii(tld).into_boxed_slice());
        } else if opts.collect_warnings {
            warnings.push(Warning::EmptyRule { line: line.into() });
        }

        insert_rule(trie, trie.root(), &rule.positions);
    }
    Ok(())
}

/// Compiles the primary and special corpora, in that order, into one trie.
/// Later rules only add to the trie; nothing is ever removed.
pub(crate) fn compile(primary: &str, special: &str, opts: CompileOpts) -> Result<Compiled> {
    let mut trie = Trie::new();
    let mut valid_tlds = HashSet::new();
    let mut warnings = Vec::new();

    compile_corpus(primary, &mut trie, &mut valid_tlds, opts, &mut warnings)?;
    compile_corpus(special, &mut trie, &mut valid_tlds, opts, &mut warnings)?;

    if valid_tlds.is_empty() {
        return Err(Error::EmptyRuleset);
    }

    Ok(Compiled {
        trie,
        valid_tlds,
        warnings,
    })
}
