//! Construction-time configuration for the command engine.

use herald_core::HeraldError;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::identity::MatchRule;

/// Raw command-engine configuration as supplied by the host.
///
/// Supported keys:
///
/// `prefix` — string denoting the start of a command.
///
/// `pattern` — regular expression denoting the presence of a command.
///
/// `nick` — boolean flag where true means common ways of addressing the
/// agent by its connection nickname denote the presence of a command.
///
/// All keys are optional and mutually exclusive; `compile` rejects configs
/// with more than one key set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<bool>,
}

impl CommandsConfig {
    /// Compile into an immutable match rule.
    ///
    /// Fails fast: an ambiguous or malformed config can never recognize
    /// anything, so it is rejected here rather than per message.
    pub fn compile(&self) -> Result<MatchRule, HeraldError> {
        let mut keys = Vec::new();
        if self.prefix.is_some() {
            keys.push("prefix");
        }
        if self.pattern.is_some() {
            keys.push("pattern");
        }
        if self.nick == Some(true) {
            keys.push("nick");
        }
        if keys.len() > 1 {
            return Err(HeraldError::AmbiguousConfig(format!(
                "keys {} are mutually exclusive",
                keys.join(", ")
            )));
        }

        if let Some(prefix) = &self.prefix {
            if prefix.is_empty() {
                return Err(HeraldError::ConfigError("prefix cannot be empty".into()));
            }
            return Ok(MatchRule::Prefix(prefix.clone()));
        }
        if let Some(pattern) = &self.pattern {
            let re = Regex::new(pattern).map_err(|e| HeraldError::InvalidPattern(e.to_string()))?;
            return Ok(MatchRule::Pattern(re));
        }
        if self.nick == Some(true) {
            return Ok(MatchRule::Nick);
        }
        Ok(MatchRule::None)
    }
}
