//! Session controller.
//!
//! A `SessionController` owns the transcript and pending input, and runs at
//! most one resolver call at a time. Failures are classified and recovered
//! here; nothing propagates to the caller.

mod manager;
mod submit;
mod types;


pub use manager::{SessionBuilder, SessionController};
pub use types::{SubmitOutcome, SubmitRejection};
