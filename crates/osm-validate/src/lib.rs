//! Schema validation for shaped OpenStreetMap records.
//!
//! Each of the five output streams has a list of field rules (presence and
//! value type). [`validate_record`] checks every row of a record before it is
//! written and reports the first violation as a [`ValidationError`].
//!
//! # Example
//!
//! ```ignore
//! use osm_validate::{Schema, validate_record};
//!
//! let schema = Schema::default();
//! validate_record(&record, &schema)?;
//! ```

mod error;
mod schema;
mod validator;

pub use error::{FieldIssue, ValidationError};
pub use schema::{FieldRule, FieldType, Schema};
pub use validator::validate_record;
