pub mod bus;
pub mod error;
pub mod message;
pub mod traits;

pub use bus::CommandBus;
pub use error::HeraldError;
pub use message::{
    CommandDispatch, CommandEvent, ConnectionMeta, InboundMessage, MessageKind, SenderMeta,
    DISPATCH_NAMESPACE,
};
pub use traits::DispatchSink;
