//! Projection and path building for SVG output.

use geo::{BoundingRect, Coord, CoordsIter, LineString, MultiPolygon, Rect};

/// Maps lon/lat into SVG coordinates (preserving aspect, Y down).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projection {
    bounds: Rect<f64>,
    margin: f64,
    scale: f64,
}

impl Projection {
    /// Fit `bounds` into `width` pixels minus `margin` on each side.
    pub(crate) fn fit(bounds: Rect<f64>, width: f64, margin: f64) -> Self {
        // A degenerate (zero-width) extent falls back to its height.
        let span = if bounds.width() > 0.0 { bounds.width() } else { bounds.height().max(1.0) };
        Self { bounds, margin, scale: (width - 2.0 * margin) / span }
    }

    pub(crate) fn height(&self) -> f64 {
        self.bounds.height() * self.scale + 2.0 * self.margin
    }

    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.margin + (coord.x - self.bounds.min().x) * self.scale;
        let y = self.margin + (self.bounds.max().y - coord.y) * self.scale; // invert vertically
        (x, y)
    }
}

/// Bounding box covering every shape; `None` if there are no coordinates.
pub(crate) fn combined_bounds<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> Option<Rect<f64>> {
    shapes.into_iter()
        .filter_map(|shape| shape.bounding_rect())
        .reduce(|a, b| Rect::new(
            Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
            Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
        ))
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>, projection: &Projection) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        ring_to_path(polygon.exterior(), projection, &mut out);
        for interior in polygon.interiors() {
            ring_to_path(interior, projection, &mut out);
        }
    }

    out
}

/// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
fn ring_to_path(ring: &LineString<f64>, projection: &Projection, out: &mut String) {
    let mut coords = ring.coords_iter().map(|coord| projection.project(&coord));
    let Some((x, y)) = coords.next() else { return };
    out.push_str(&format!("M{x:.3},{y:.3}"));
    for (x, y) in coords {
        out.push_str(&format!(" L{x:.3},{y:.3}"));
    }
    out.push_str("Z ");
}
