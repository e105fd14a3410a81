use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::HeraldError;
use crate::message::CommandDispatch;

/// Outbound seam for recognized commands.
///
/// The recognizer treats dispatch as fire-and-forget; implementations fan
/// the payload out to whatever is interested in its key.
#[async_trait]
pub trait DispatchSink: Send + Sync {
    /// Accept one dispatch for delivery.
    async fn dispatch(&self, dispatch: CommandDispatch) -> Result<()>;
}

/// The bus sender is the standard sink: dispatches are queued onto the
/// bounded command channel.
#[async_trait]
impl DispatchSink for mpsc::Sender<CommandDispatch> {
    async fn dispatch(&self, dispatch: CommandDispatch) -> Result<()> {
        self.send(dispatch)
            .await
            .map_err(|e| HeraldError::ChannelClosed(e.to_string()))?;
        Ok(())
    }
}
