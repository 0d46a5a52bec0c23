//! SVG format writing operations for choropleth export.

mod geometry;
mod writer;

pub(crate) use geometry::*;
pub(crate) use writer::*;
