//! Dispatch service — bridge recognized commands onto the command bus.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use herald_core::{CommandDispatch, DispatchSink, InboundMessage, MessageKind};

use crate::recognize::CommandRecognizer;

/// Monitors inbound user messages for commands and emits each recognized
/// one to the dispatch sink under its derived key.
///
/// Emission is the only side effect; everything up to it is the pure
/// recognizer, so per-message state is local and concurrent `handle` calls
/// need no synchronization.
pub struct CommandService {
    recognizer: CommandRecognizer,
    sink: Arc<dyn DispatchSink>,
}

impl CommandService {
    pub fn new(recognizer: CommandRecognizer, sink: Arc<dyn DispatchSink>) -> Self {
        Self { recognizer, sink }
    }

    /// Message kinds this service monitors.
    pub fn subscriptions() -> &'static [MessageKind] {
        &[MessageKind::Privmsg, MessageKind::Notice]
    }

    /// Evaluate one inbound message, emitting at most one dispatch.
    ///
    /// A line that is not a command is a normal outcome and returns `Ok`
    /// quietly; errors surface only from the sink.
    pub async fn handle(&self, msg: InboundMessage) -> Result<()> {
        let Some(event) = self.recognizer.recognize(&msg) else {
            debug!("[Commands] Not a command: {} -> {}", msg.sender.nick, msg.target);
            return Ok(());
        };

        let key = event.dispatch_key();
        info!("[Commands] Dispatching {} from {}", key, event.sender.nick);
        self.sink.dispatch(CommandDispatch { key, event }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommandsConfig;
    use chrono::Utc;
    use herald_core::{CommandBus, ConnectionMeta, SenderMeta};
    use uuid::Uuid;

    fn message(kind: MessageKind, target: &str, text: &str) -> InboundMessage {
        InboundMessage {
            message_id: Uuid::new_v4(),
            kind,
            target: target.to_string(),
            text: text.to_string(),
            sender: SenderMeta {
                nick: "alice".to_string(),
                username: Some("alice".to_string()),
                host: Some("host.example".to_string()),
            },
            connection: ConnectionMeta { id: Uuid::new_v4(), nickname: "herald".to_string() },
            received_at: Utc::now(),
        }
    }

    fn prefix_service(bus: &CommandBus) -> CommandService {
        let config = CommandsConfig { prefix: Some("!".into()), ..Default::default() };
        let recognizer = CommandRecognizer::new(config.compile().unwrap());
        CommandService::new(recognizer, Arc::new(bus.commands_tx.clone()))
    }

    #[tokio::test]
    async fn test_recognized_command_is_dispatched() {
        let mut bus = CommandBus::new();
        let mut rx = bus.take_commands_rx().unwrap();
        let service = prefix_service(&bus);

        let msg = message(MessageKind::Privmsg, "#channel", r#"!foo bar "two words" baz"#);
        service.handle(msg.clone()).await.unwrap();

        let dispatch = rx.recv().await.unwrap();
        assert_eq!(dispatch.key, "command.foo");
        assert_eq!(dispatch.event.command, "foo");
        assert_eq!(dispatch.event.args, vec!["bar", "two words", "baz"]);
        assert_eq!(dispatch.event.message_id, msg.message_id);
    }

    #[tokio::test]
    async fn test_unmarked_channel_chatter_emits_nothing() {
        let mut bus = CommandBus::new();
        let mut rx = bus.take_commands_rx().unwrap();
        let service = prefix_service(&bus);

        service
            .handle(message(MessageKind::Privmsg, "#channel", "just talking"))
            .await
            .unwrap();

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_notice_is_handled_like_privmsg() {
        let mut bus = CommandBus::new();
        let mut rx = bus.take_commands_rx().unwrap();
        let service = prefix_service(&bus);

        service.handle(message(MessageKind::Notice, "#channel", "!foo bar")).await.unwrap();

        let dispatch = rx.recv().await.unwrap();
        assert_eq!(dispatch.key, "command.foo");
        assert_eq!(dispatch.event.kind, MessageKind::Notice);
    }

    #[tokio::test]
    async fn test_dispatch_key_is_case_insensitive_on_name() {
        let mut bus = CommandBus::new();
        let mut rx = bus.take_commands_rx().unwrap();
        let service = prefix_service(&bus);

        service.handle(message(MessageKind::Privmsg, "#channel", "!FOO")).await.unwrap();

        let dispatch = rx.recv().await.unwrap();
        assert_eq!(dispatch.key, "command.foo");
        assert_eq!(dispatch.event.command, "FOO");
    }

    #[tokio::test]
    async fn test_closed_bus_surfaces_an_error() {
        let mut bus = CommandBus::new();
        let rx = bus.take_commands_rx().unwrap();
        let service = prefix_service(&bus);
        drop(rx);

        let result = service.handle(message(MessageKind::Privmsg, "#channel", "!foo")).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_subscriptions_cover_privmsg_and_notice() {
        let kinds = CommandService::subscriptions();
        assert!(kinds.contains(&MessageKind::Privmsg));
        assert!(kinds.contains(&MessageKind::Notice));
    }
}
