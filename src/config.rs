//! Declarative automaton definitions.
//!
//! An automaton whose rules need no custom code can be described entirely
//! in data and loaded from JSON:
//!
//! ```rust
//! use dfa_scan::config::AutomatonConfig;
//! use dfa_scan::{RunResult, StateClass};
//!
//! let json = r#"{
//!     "states": [1, 2],
//!     "alphabet": ["0", "1"],
//!     "start": 1,
//!     "finals": [2],
//!     "rules": [
//!         { "from": 1, "to": 2, "kind": "set", "symbols": ["0", "1"] },
//!         { "from": 2, "to": 2, "kind": "pattern", "pattern": "[01]" }
//!     ]
//! }"#;
//!
//! let config: AutomatonConfig<u32> = AutomatonConfig::from_json(json).unwrap();
//! let mut automaton = config.build().unwrap();
//!
//! assert_eq!(automaton.run(b"1012", 1), RunResult::Trap);
//! assert_eq!(automaton.current_configuration().counter, 3);
//! assert_eq!(automaton.current_configuration().class, StateClass::Final);
//! ```
//!
//! Symbols are written as single characters and must lie in
//! U+0000..=U+00FF; each maps to the byte with the same value.

use crate::builder::BuildError;
use crate::core::{Predicate, StateId, Symbol};
use crate::engine::Automaton;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or building a configured automaton.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse automaton config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Symbol {0:?} does not fit in one byte")]
    SymbolOutOfRange(char),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Data form of a [`Predicate`]. Custom predicates have no data form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatcherConfig {
    Exact { symbol: char },
    ExactInverted { symbol: char },
    Set { symbols: Vec<char> },
    SetInverted { symbols: Vec<char> },
    Range { min: char, max: char },
    Pattern { pattern: String },
}

impl MatcherConfig {
    pub fn to_predicate(&self) -> Result<Predicate, ConfigError> {
        let predicate = match self {
            MatcherConfig::Exact { symbol } => Predicate::exact(to_symbol(*symbol)?),
            MatcherConfig::ExactInverted { symbol } => {
                Predicate::exact_inverted(to_symbol(*symbol)?)
            }
            MatcherConfig::Set { symbols } => Predicate::set(to_symbols(symbols)?),
            MatcherConfig::SetInverted { symbols } => Predicate::set_inverted(to_symbols(symbols)?),
            MatcherConfig::Range { min, max } => {
                Predicate::range(to_symbol(*min)?, to_symbol(*max)?)
            }
            MatcherConfig::Pattern { pattern } => {
                Predicate::pattern(pattern).map_err(BuildError::from)?
            }
        };
        Ok(predicate)
    }
}

/// One configured rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RuleConfig<S: StateId> {
    pub from: S,
    pub to: S,
    #[serde(flatten)]
    pub matcher: MatcherConfig,
}

/// Complete data description of an automaton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AutomatonConfig<S: StateId> {
    pub states: Vec<S>,
    #[serde(default)]
    pub alphabet: Vec<char>,
    pub start: S,
    #[serde(default)]
    pub finals: Vec<S>,
    #[serde(default)]
    pub rules: Vec<RuleConfig<S>>,
}

impl<S: StateId> AutomatonConfig<S> {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the automaton, registering rules in the order listed.
    pub fn build(&self) -> Result<Automaton<S>, ConfigError> {
        let mut automaton = Automaton::new(
            self.states.clone(),
            to_symbols(&self.alphabet)?,
            self.start.clone(),
            self.finals.clone(),
        )?;

        for rule in &self.rules {
            let predicate = rule.matcher.to_predicate()?;
            automaton
                .add_rule(rule.from.clone(), rule.to.clone(), predicate)
                .map_err(BuildError::from)?;
        }

        log::debug!("built automaton from config with {} rules", self.rules.len());
        Ok(automaton)
    }
}

fn to_symbol(c: char) -> Result<Symbol, ConfigError> {
    Symbol::try_from(c).map_err(|_| ConfigError::SymbolOutOfRange(c))
}

fn to_symbols(chars: &[char]) -> Result<Vec<Symbol>, ConfigError> {
    chars.iter().map(|&c| to_symbol(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RuleError;
    use crate::core::StateClass;
    use crate::engine::{RetractResult, RunResult};

    const IDENTIFIER: &str = r#"{
        "states": ["start", "ident"],
        "alphabet": ["a", "b", "_"],
        "start": "start",
        "finals": ["ident"],
        "rules": [
            { "from": "start", "to": "ident", "kind": "range", "min": "a", "max": "z" },
            { "from": "start", "to": "ident", "kind": "exact", "symbol": "_" },
            { "from": "ident", "to": "ident", "kind": "set_inverted", "symbols": [" ", ";"] }
        ]
    }"#;

    #[test]
    fn parses_and_builds_automaton() {
        let config: AutomatonConfig<String> = AutomatonConfig::from_json(IDENTIFIER).unwrap();
        let mut automaton = config.build().unwrap();

        assert_eq!(automaton.alphabet(), b"ab_");
        assert_eq!(automaton.rule_count(), 3);
        assert_eq!(automaton.run(b"_x1;", 1), RunResult::Trap);

        let configuration = automaton.current_configuration();
        assert_eq!(configuration.state, "ident");
        assert_eq!(configuration.class, StateClass::Final);
        assert_eq!(configuration.counter, 3);
        assert_eq!(automaton.retract(), RetractResult::Success);
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let config: AutomatonConfig<u32> =
            AutomatonConfig::from_json(r#"{ "states": [0], "start": 0 }"#).unwrap();

        assert!(config.alphabet.is_empty());
        assert!(config.finals.is_empty());
        assert!(config.rules.is_empty());
        assert!(config.build().is_ok());
    }

    #[test]
    fn matcher_kinds_map_to_predicates() {
        let cases = [
            (MatcherConfig::Exact { symbol: 'a' }, b'a', b'b'),
            (MatcherConfig::ExactInverted { symbol: 'a' }, b'b', b'a'),
            (
                MatcherConfig::Set {
                    symbols: vec!['x', 'y'],
                },
                b'y',
                b'z',
            ),
            (
                MatcherConfig::SetInverted {
                    symbols: vec!['x', 'y'],
                },
                b'z',
                b'x',
            ),
            (MatcherConfig::Range { min: '0', max: '9' }, b'5', b'a'),
            (
                MatcherConfig::Pattern {
                    pattern: "[[:upper:]]".to_string(),
                },
                b'Q',
                b'q',
            ),
        ];

        for (matcher, accepted, rejected) in cases {
            let predicate = matcher.to_predicate().unwrap();
            assert!(predicate.matches(accepted), "{:?} should accept", matcher);
            assert!(!predicate.matches(rejected), "{:?} should reject", matcher);
        }
    }

    #[test]
    fn wide_symbols_are_rejected() {
        let matcher = MatcherConfig::Exact { symbol: 'λ' };

        assert!(matches!(
            matcher.to_predicate(),
            Err(ConfigError::SymbolOutOfRange('λ'))
        ));
    }

    #[test]
    fn latin1_symbols_map_to_bytes() {
        let predicate = MatcherConfig::Exact { symbol: 'é' }.to_predicate().unwrap();

        assert!(predicate.matches(0xe9));
    }

    #[test]
    fn latin1_patterns_match_bytes() {
        let matcher = MatcherConfig::Pattern {
            pattern: "é|[à-ä]".to_string(),
        };
        let predicate = matcher.to_predicate().unwrap();

        assert!(predicate.matches(0xe9));
        assert!(predicate.matches(0xe2));
        assert!(!predicate.matches(0xe8));
        assert!(!predicate.matches(0xc3));
    }

    #[test]
    fn invalid_pattern_fails_build() {
        let json = r#"{
            "states": [1, 2],
            "start": 1,
            "rules": [{ "from": 1, "to": 2, "kind": "pattern", "pattern": "(" }]
        }"#;
        let config: AutomatonConfig<u32> = AutomatonConfig::from_json(json).unwrap();

        assert!(matches!(
            config.build(),
            Err(ConfigError::Build(BuildError::Rule(
                RuleError::InvalidPattern { .. }
            )))
        ));
    }

    #[test]
    fn undeclared_rule_state_fails_build() {
        let json = r#"{
            "states": [1, 2],
            "start": 1,
            "rules": [{ "from": 3, "to": 2, "kind": "exact", "symbol": "a" }]
        }"#;
        let config: AutomatonConfig<u32> = AutomatonConfig::from_json(json).unwrap();

        assert!(matches!(
            config.build(),
            Err(ConfigError::Build(BuildError::Rule(
                RuleError::UndeclaredFrom { .. }
            )))
        ));
    }

    #[test]
    fn unknown_kind_fails_to_parse() {
        let json = r#"{
            "states": [1],
            "start": 1,
            "rules": [{ "from": 1, "to": 1, "kind": "custom" }]
        }"#;

        assert!(matches!(
            AutomatonConfig::<u32>::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn config_serializes_correctly() {
        let config: AutomatonConfig<String> = AutomatonConfig::from_json(IDENTIFIER).unwrap();

        let json = config.to_json().unwrap();
        let reparsed: AutomatonConfig<String> = AutomatonConfig::from_json(&json).unwrap();

        assert_eq!(config, reparsed);
    }
}
