//! Command recognition — compose identity stripping, name/argument
//! parsing, and event construction.

use herald_core::{CommandEvent, InboundMessage};
use tracing::debug;

use crate::identity::{is_channel_target, MatchRule};
use crate::parse::{split_command, tokenize};

/// Recognizes commands in inbound messages under an immutable match rule.
///
/// Recognition is pure: no dispatch happens here, and identical inputs
/// produce identical events, so a single recognizer is safe to share
/// across tasks.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    rule: MatchRule,
}

impl CommandRecognizer {
    pub fn new(rule: MatchRule) -> Self {
        Self { rule }
    }

    /// The identity rule this recognizer was built with.
    pub fn rule(&self) -> &MatchRule {
        &self.rule
    }

    /// Parse one message into a command event, or `None` when the line is
    /// not a command.
    pub fn recognize(&self, msg: &InboundMessage) -> Option<CommandEvent> {
        let is_channel = is_channel_target(&msg.target);
        let stripped =
            self.rule.strip_identity(&msg.text, is_channel, &msg.connection.nickname)?;
        let (name, args_text) = split_command(&stripped)?;
        let args = args_text.map(tokenize).unwrap_or_default();

        debug!(command = name, args = args.len(), "Recognized command");
        Some(CommandEvent::from_message(msg, name.to_string(), args))
    }
}
