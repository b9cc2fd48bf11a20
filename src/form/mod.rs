//! Form state for a single pass slip session.
//!
//! - `models` - the request, its fields, ranks and times of day
//! - `state` - the owned holder mutated by user edits
//! - `validation` - required-field checks and the error set

pub mod models;
pub mod state;
pub mod validation;

pub use models::{ApplicationRequest, Field, FieldEdit, InvalidTime, Rank, TimeOfDay, UnknownRank};
pub use state::FormState;
pub use validation::{ValidationError, ValidationErrors};
