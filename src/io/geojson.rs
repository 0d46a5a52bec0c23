use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use log::warn;
use serde_json::{json, Value};

use crate::types::CountyFeature;

/// Read county boundary features from GeoJSON FeatureCollection bytes.
/// Each feature needs `STATEFP` and `COUNTYFP` properties; `NAME` is optional.
pub(crate) fn read_counties_from_bytes(bytes: &[u8]) -> Result<Vec<CountyFeature>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse county GeoJSON")?;

    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("County GeoJSON has no \"features\" array"))?;

    let mut counties = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let properties = &feature["properties"];
        let (Some(state_fp), Some(county_fp)) = (code_property(&properties["STATEFP"]), code_property(&properties["COUNTYFP"])) else {
            warn!("[io::geojson] skipping feature {idx}: missing STATEFP/COUNTYFP");
            continue;
        };

        let shape = match parse_geometry(&feature["geometry"]) {
            Ok(shape) => shape,
            Err(e) => {
                warn!("[io::geojson] feature {state_fp}{county_fp}: {e}; keeping it without geometry");
                MultiPolygon(vec![])
            }
        };

        counties.push(CountyFeature::new(&state_fp, &county_fp, properties["NAME"].as_str(), shape));
    }

    Ok(counties)
}

/// FIPS codes may be encoded as strings or whole numbers; leading zeros are restored by `CountyId::from_parts`.
fn code_property(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(code), _) => Some(code.to_string()),
            (None, Some(f)) if f >= 0.0 && f.fract() == 0.0 => Some(format!("{f:.0}")),
            _ => None,
        },
        _ => None,
    }
}

/// Parse a GeoJSON Polygon or MultiPolygon geometry; a Polygon becomes a one-element MultiPolygon.
fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("geometry has no coordinates"))?;

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon_coords(coords)?])),
        Some("MultiPolygon") => {
            let polygons = coords.iter()
                .map(|polygon| {
                    let rings = polygon.as_array().ok_or_else(|| anyhow!("Invalid MultiPolygon: polygon is not an array"))?;
                    parse_polygon_coords(rings)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(MultiPolygon(polygons))
        }
        other => bail!("unsupported geometry type {other:?}"),
    }
}

/// Parse polygon rings: the first is the exterior, the rest are holes.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        let ring = ring.as_array().ok_or_else(|| anyhow!("Invalid Polygon: ring is not an array"))?;
        parse_ring_coords(ring)
    });

    let exterior = rings.next().ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring from GeoJSON coordinates: [[x, y], [x, y], ...]
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for pair in coords {
        let (Some(x), Some(y)) = (pair[0].as_f64(), pair[1].as_f64()) else {
            bail!("Invalid coordinate: expected [x, y] numbers");
        };
        points.push(Coord { x, y });
    }

    // Ensure ring is closed (first point == last point)
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }

    Ok(LineString(points))
}

/// Convert a MultiPolygon to a GeoJSON geometry value.
pub(crate) fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let ring = |ls: &LineString<f64>| ls.coords().map(|c| vec![c.x, c.y]).collect::<Vec<_>>();

    let polygons: Vec<Vec<Vec<Vec<f64>>>> = mp.0.iter()
        .map(|polygon| {
            std::iter::once(ring(polygon.exterior()))
                .chain(polygon.interiors().iter().map(ring))
                .collect()
        })
        .collect();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}
