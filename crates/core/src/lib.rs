pub mod error;
pub mod event;
pub mod severity;
pub mod state;

pub use error::{BarError, Result};
pub use event::{Click, Message, MouseButton};
pub use severity::Severity;
pub use state::{AppState, Update};
