//! `herald-commands` — recognition of commands embedded in chat messages.
//!
//! Turns inbound chat lines into structured command events: an identity
//! rule decides whether a line is addressed as a command (explicit prefix,
//! custom pattern, or addressed-by-nickname), the remainder is split into a
//! name plus quote-aware positional arguments, and each recognized command
//! is emitted on the bus under a lowercased `command.<name>` dispatch key.
//! Channel chatter without the identity marker is ignored; messages sent
//! directly to the agent are always treated as potential commands.

pub mod config;
pub mod dispatch;
pub mod identity;
pub mod parse;
pub mod recognize;

pub use config::CommandsConfig;
pub use dispatch::CommandService;
pub use identity::{is_channel_target, MatchRule};
pub use parse::{split_command, tokenize};
pub use recognize::CommandRecognizer;
