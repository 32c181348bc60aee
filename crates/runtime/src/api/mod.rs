//! Types downstream clients interact with.

mod error;
mod events;
mod handle;
mod snapshot;

pub use error::{Result, RuntimeError};
pub use events::GameEvent;
pub use handle::RuntimeHandle;
pub use snapshot::SessionSnapshot;
