use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::message::CommandDispatch;

/// Default channel buffer size for command dispatch.
const DEFAULT_BUFFER_SIZE: usize = 256;

/// The bus carrying recognized commands from the recognizer to the host's
/// handler fan-out.
///
/// Producers clone `commands_tx` to push dispatches; the consuming host
/// takes the single receiver. Built on a bounded Tokio mpsc channel for
/// async backpressure.
pub struct CommandBus {
    pub commands_tx: mpsc::Sender<CommandDispatch>,
    commands_rx: Option<mpsc::Receiver<CommandDispatch>>,
}

impl CommandBus {
    /// Create a new bus with the default buffer size.
    pub fn new() -> Self {
        Self::with_buffer_size(DEFAULT_BUFFER_SIZE)
    }

    /// Create a new bus with a custom buffer size.
    pub fn with_buffer_size(buffer: usize) -> Self {
        let (commands_tx, commands_rx) = mpsc::channel(buffer);

        info!(buffer_size = buffer, "CommandBus initialized");

        Self { commands_tx, commands_rx: Some(commands_rx) }
    }

    /// Take the dispatch receiver (can only be called once).
    pub fn take_commands_rx(&mut self) -> Option<mpsc::Receiver<CommandDispatch>> {
        debug!("Commands receiver taken");
        self.commands_rx.take()
    }
}

impl Default for CommandBus {
    fn default() -> Self {
        Self::new()
    }
}
