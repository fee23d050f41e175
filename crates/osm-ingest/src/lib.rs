//! OpenStreetMap XML ingestion.
//!
//! Streams `node` and `way` elements out of an OSM export one at a time,
//! together with their `tag` and `nd` children.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use osm_ingest::open_osm_file;
//!
//! for element in open_osm_file(Path::new("sample.osm"))? {
//!     let element = element?;
//!     println!("{} {:?}", element.tag, element.id());
//! }
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use reader::{DEFAULT_ELEMENT_TAGS, OsmReader, open_osm_file};
