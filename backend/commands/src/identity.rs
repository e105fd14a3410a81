//! Identity matching — decide whether a line is addressed as a command and
//! strip the identifying marker before parsing.

use once_cell::sync::Lazy;
use regex::Regex;

/// RFC 2812 channel name: `&`, `#`, `+`, or `!` followed by at least one
/// character that is not a space, comma, or ^G.
static CHANNEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[&#+!][^ \x07,]+$").unwrap());

/// How inbound lines are identified as commands. Fixed once at
/// construction; see `CommandsConfig::compile`.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// No identity rule: every line is a potential command.
    None,
    /// A literal string that must open the line.
    Prefix(String),
    /// An arbitrary pattern whose match at the start of the line is
    /// stripped.
    Pattern(Regex),
    /// The line addresses the agent by its current display name.
    Nick,
}

impl MatchRule {
    /// Apply the identity rule to one line of text.
    ///
    /// Returns the text with the identifying substring removed, or `None`
    /// when the line is not a command. Channel chatter without the marker
    /// is never a command; a message delivered directly to the agent is
    /// always treated as one, marker or not.
    pub fn strip_identity(&self, text: &str, is_channel: bool, own_nick: &str) -> Option<String> {
        match self {
            MatchRule::None => Some(text.to_string()),
            MatchRule::Prefix(prefix) => match text.strip_prefix(prefix.as_str()) {
                Some(rest) => Some(rest.to_string()),
                None => unmarked(text, is_channel),
            },
            MatchRule::Pattern(re) => strip_match(re, text, is_channel),
            MatchRule::Nick => strip_match(&nick_pattern(own_nick), text, is_channel),
        }
    }
}

/// Pattern matching a command addressing the agent by name: optional
/// leading whitespace, the name (case-insensitive), then one or more of
/// `:`, `,`, or whitespace.
fn nick_pattern(nick: &str) -> Regex {
    Regex::new(&format!(r"(?i)^\s*{}[:,\s]+", regex::escape(nick)))
        .expect("escaped nick pattern is valid")
}

/// Remove the rule's match from the start of the text, or fall back to the
/// unmarked-line policy.
fn strip_match(re: &Regex, text: &str, is_channel: bool) -> Option<String> {
    match re.find(text) {
        Some(m) if m.start() == 0 => Some(text[m.end()..].to_string()),
        _ => unmarked(text, is_channel),
    }
}

fn unmarked(text: &str, is_channel: bool) -> Option<String> {
    if is_channel {
        None
    } else {
        Some(text.to_string())
    }
}

/// Whether a delivery target names a channel rather than a single
/// recipient.
pub fn is_channel_target(target: &str) -> bool {
    CHANNEL_RE.is_match(target)
}
