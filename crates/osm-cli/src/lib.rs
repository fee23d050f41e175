//! Library side of the `osm-tabular` command-line tool.

pub mod logging;
pub mod pipeline;
