pub mod error;
pub mod event;
pub mod reading;

pub use error::{ProbeError, Result};
pub use event::Message;
pub use reading::{Reading, ReadingBatch};
