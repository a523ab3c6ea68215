//! Output formatting for pomo.
//!
//! Pretty output is plain terminal text; JSON output is for scripting.

mod json;
mod pretty;

pub use json::*;
pub use pretty::*;
