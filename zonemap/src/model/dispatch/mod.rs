mod dispatch_error;
mod dispatch_result;
mod interaction_dispatcher;
mod zone_event;

pub use dispatch_error::DispatchError;
pub use dispatch_result::DispatchResult;
pub use interaction_dispatcher::InteractionDispatcher;
pub use zone_event::ZoneEvent;
