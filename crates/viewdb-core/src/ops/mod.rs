//! The operations that consume a registered schema: structural matching,
//! input validation/normalization, output rendering, and inference.

mod describe;
mod matches;
mod render;
mod validate;

pub use describe::describe_value;
pub use matches::{Direction, matches};
pub use render::{ExpansionPolicy, render_output};
pub use validate::{NormalizedRecord, validate_input};
