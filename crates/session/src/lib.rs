pub mod engine;
pub mod events;
pub mod journal;
pub mod logging;
pub mod session;
pub mod snapshot;

pub use engine::{SessionCommand, SessionEngine, SessionHandle};
pub use session::Session;
pub use snapshot::{SampleMarker, SessionSnapshot};
