//! IO module for format-specific reading and writing operations.
//!
//! - `records` - the turnout statistics JSON array
//! - `geojson` - county boundary FeatureCollections (read) and geometry export
//! - `svg` - SVG writing for static choropleth maps

pub(crate) mod geojson;
pub(crate) mod records;
pub(crate) mod svg;
