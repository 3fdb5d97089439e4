//! Transition predicates over single input symbols.
//!
//! A predicate decides whether one rule applies to one symbol. Predicates are
//! built once at registration time and are immutable afterwards.

use super::state::Symbol;
use crate::builder::RuleError;
use regex::bytes::{Regex, RegexBuilder};
use std::fmt;
use std::fmt::Write;
use std::sync::Arc;

/// Caller-supplied symbol test used by [`Predicate::Custom`].
pub type SymbolFn = Arc<dyn Fn(Symbol) -> bool + Send + Sync>;

/// Discriminant of a [`Predicate`], used for logging and introspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    Exact,
    ExactInverted,
    Set,
    SetInverted,
    Range,
    Custom,
    Pattern,
}

/// Pure test deciding whether a transition rule applies to a symbol.
///
/// # Example
///
/// ```rust
/// use dfa_scan::core::Predicate;
///
/// let digit = Predicate::range(b'0', b'9');
/// assert!(digit.matches(b'7'));
/// assert!(!digit.matches(b'x'));
///
/// let not_quote = Predicate::exact_inverted(b'"');
/// assert!(not_quote.matches(b'a'));
/// assert!(!not_quote.matches(b'"'));
///
/// let vowel = Predicate::pattern("[aeiou]").unwrap();
/// assert!(vowel.matches(b'e'));
/// assert!(!vowel.matches(b'z'));
/// ```
#[derive(Clone)]
pub enum Predicate {
    /// Matches one fixed symbol.
    Exact(Symbol),
    /// Matches every symbol except one.
    ExactInverted(Symbol),
    /// Matches any member of a fixed set.
    Set(Vec<Symbol>),
    /// Matches anything outside a fixed set.
    SetInverted(Vec<Symbol>),
    /// Matches symbols whose value lies in `min..=max`.
    Range { min: Symbol, max: Symbol },
    /// Delegates to a caller-supplied function.
    Custom(SymbolFn),
    /// Matches when the symbol, as a one-byte string, satisfies a compiled
    /// pattern. The source text is kept for display.
    Pattern { source: String, regex: Regex },
}

impl Predicate {
    pub fn exact(symbol: Symbol) -> Self {
        Predicate::Exact(symbol)
    }

    pub fn exact_inverted(symbol: Symbol) -> Self {
        Predicate::ExactInverted(symbol)
    }

    pub fn set(symbols: impl Into<Vec<Symbol>>) -> Self {
        Predicate::Set(symbols.into())
    }

    pub fn set_inverted(symbols: impl Into<Vec<Symbol>>) -> Self {
        Predicate::SetInverted(symbols.into())
    }

    /// Inclusive range. An inverted range (`min > max`) matches nothing.
    pub fn range(min: Symbol, max: Symbol) -> Self {
        Predicate::Range { min, max }
    }

    /// Wrap a caller-supplied test.
    ///
    /// The function must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(Symbol) -> bool + Send + Sync + 'static,
    {
        Predicate::Custom(Arc::new(check))
    }

    /// Compile a pattern once for reuse on every step.
    ///
    /// The search is unanchored, so `[0-9]` matches the symbol `7` and `a|b`
    /// matches either letter. Patterns work on bytes: `.` and negated classes
    /// match every symbol up to 0xFF (newline included), and a character
    /// U+0080..=U+00FF in the pattern stands for the byte with that value.
    pub fn pattern(pattern: &str) -> Result<Self, RuleError> {
        RegexBuilder::new(&latin1_escaped(pattern))
            .unicode(false)
            .dot_matches_new_line(true)
            .build()
            .map(|regex| Predicate::Pattern {
                source: pattern.to_string(),
                regex,
            })
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Evaluate the predicate against one symbol.
    pub fn matches(&self, symbol: Symbol) -> bool {
        match self {
            Predicate::Exact(expected) => symbol == *expected,
            Predicate::ExactInverted(rejected) => symbol != *rejected,
            Predicate::Set(members) => members.contains(&symbol),
            Predicate::SetInverted(members) => !members.contains(&symbol),
            Predicate::Range { min, max } => (*min..=*max).contains(&symbol),
            Predicate::Custom(check) => check(symbol),
            Predicate::Pattern { regex, .. } => regex.is_match(&[symbol]),
        }
    }

    pub fn kind(&self) -> PredicateKind {
        match self {
            Predicate::Exact(_) => PredicateKind::Exact,
            Predicate::ExactInverted(_) => PredicateKind::ExactInverted,
            Predicate::Set(_) => PredicateKind::Set,
            Predicate::SetInverted(_) => PredicateKind::SetInverted,
            Predicate::Range { .. } => PredicateKind::Range,
            Predicate::Custom(_) => PredicateKind::Custom,
            Predicate::Pattern { .. } => PredicateKind::Pattern,
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Exact(symbol) => f.debug_tuple("Exact").field(symbol).finish(),
            Predicate::ExactInverted(symbol) => {
                f.debug_tuple("ExactInverted").field(symbol).finish()
            }
            Predicate::Set(members) => f.debug_tuple("Set").field(members).finish(),
            Predicate::SetInverted(members) => {
                f.debug_tuple("SetInverted").field(members).finish()
            }
            Predicate::Range { min, max } => f
                .debug_struct("Range")
                .field("min", min)
                .field("max", max)
                .finish(),
            Predicate::Custom(_) => f.write_str("Custom(..)"),
            Predicate::Pattern { source, .. } => f.debug_tuple("Pattern").field(source).finish(),
        }
    }
}

/// Rewrite Latin-1 characters as `\x{HH}` byte escapes.
///
/// Without Unicode mode a literal `é` would compile to its two-byte UTF-8
/// form and could never match the single symbol 0xE9. An escaped Latin-1
/// character (`\é`) is a literal too, so the backslash is folded in.
fn latin1_escaped(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&next) if is_upper_latin1(next) => {}
                Some(&next) => {
                    escaped.push(c);
                    escaped.push(next);
                    chars.next();
                }
                None => escaped.push(c),
            }
            continue;
        }
        if is_upper_latin1(c) {
            let _ = write!(escaped, "\\x{{{:02X}}}", u32::from(c));
        } else {
            escaped.push(c);
        }
    }
    escaped
}

fn is_upper_latin1(c: char) -> bool {
    ('\u{80}'..='\u{FF}').contains(&c)
}
