//! Data model for OpenStreetMap elements and the tabular records shaped from
//! them.
//!
//! - [`RawElement`]: a `node`, `way` or other element as read from XML
//! - [`ShapedRecord`]: attributes, tag rows and way node rows of one element
//! - [`RecordKind`]: the five output streams and their fixed field lists

pub mod element;
pub mod fields;
pub mod record;

pub use element::{ChildEntry, ElementKind, RawElement};
pub use fields::{NODE_FIELDS, RecordKind, TAG_FIELDS, WAY_FIELDS, WAY_NODE_FIELDS};
pub use record::{ShapedRecord, TagRow, WayNodeRow};
