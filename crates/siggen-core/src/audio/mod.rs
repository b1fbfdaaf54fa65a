//! Audio output host for the signal generator
//!
//! Renders a [`GeneratorEngine`](crate::processor::GeneratorEngine) on a CPAL
//! output stream. The engine is moved into the callback; the UI keeps the
//! [`GeneratorController`](crate::processor::GeneratorController) and talks
//! to the engine only through the command queue:
//!
//! ```text
//! UI thread ──GeneratorController──push()──► rtrb queue
//!                                                │ pop() at block start
//! CPAL audio thread ◄──GeneratorEngine───────────┘
//! ```

mod error;
mod output;

pub use error::{AudioError, AudioResult};
pub use output::{start_output, AudioHandle};
pub use crate::config::AudioConfig;
