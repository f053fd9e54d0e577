//! The inspection wizard: an explicit session object and its step machine.
//!
//! States are steps 1 to 4. Allowed transitions:
//! 1→2 (valid identification), 2→1 (back), 2→3 (dimensions), 3→2 (back),
//! 3→3 (failed submit), 3→4 (successful submit), 4→1 (restart).

mod error;
mod input;
mod session;
mod step;

pub use error::TransitionError;
pub use input::{Dimensions, Identification};
pub use session::Session;
pub use step::{ENTRY_STEPS, Step};
