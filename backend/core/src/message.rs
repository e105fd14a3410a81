use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace prepended to every dispatch key.
pub const DISPATCH_NAMESPACE: &str = "command.";

/// Kinds of user messages monitored for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Ordinary message sent to a channel or user.
    Privmsg,
    /// Notice delivered to a nickname.
    Notice,
}

/// Who sent the message. Opaque to the command engine; copied through
/// unchanged so handlers can reply or audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderMeta {
    pub nick: String,
    pub username: Option<String>,
    pub host: Option<String>,
}

/// Handle for the connection a message arrived on.
///
/// The engine reads `nickname` only in addressed-by-name mode; everything
/// else treats this as opaque routing information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionMeta {
    pub id: Uuid,
    /// The agent's own current display name on this connection.
    pub nickname: String,
}

/// A decoded chat line handed in by a transport adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub message_id: Uuid,
    pub kind: MessageKind,
    /// Channel name or recipient nickname (receivers for privmsg, nickname
    /// for notice).
    pub target: String,
    pub text: String,
    pub sender: SenderMeta,
    pub connection: ConnectionMeta,
    pub received_at: DateTime<Utc>,
}

/// A recognized command, ready for dispatch.
///
/// Holds the parsed name and positional arguments plus every delivery field
/// of the originating message, copied by value. Once emitted, the event is
/// owned by whatever handler receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEvent {
    /// Parsed command name, case preserved.
    pub command: String,
    /// Positional argument values; order is significant.
    pub args: Vec<String>,
    pub message_id: Uuid,
    pub kind: MessageKind,
    pub target: String,
    pub text: String,
    pub sender: SenderMeta,
    pub connection: ConnectionMeta,
    pub received_at: DateTime<Utc>,
}

impl CommandEvent {
    /// Build an event from a message plus its parsed command and arguments.
    pub fn from_message(msg: &InboundMessage, command: String, args: Vec<String>) -> Self {
        Self {
            command,
            args,
            message_id: msg.message_id,
            kind: msg.kind,
            target: msg.target.clone(),
            text: msg.text.clone(),
            sender: msg.sender.clone(),
            connection: msg.connection.clone(),
            received_at: msg.received_at,
        }
    }

    /// Routing key for this command: the dispatch namespace plus the
    /// lowercased command name.
    pub fn dispatch_key(&self) -> String {
        format!("{}{}", DISPATCH_NAMESPACE, self.command.to_lowercase())
    }
}

/// Bus payload: a recognized command under its dispatch key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDispatch {
    pub key: String,
    pub event: CommandEvent,
}
