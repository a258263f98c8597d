//! Portable geometry representation.
//!
//! Geometry columns in the model schema carry extended well-known text:
//! `SRID=<n>;<WKT>`, e.g. `SRID=4326;POINT(5.38 52.09)`. This module parses
//! and serializes that form so that `parse(serialize(g)) == g` for every
//! supported shape. Only the shapes the schema uses are supported: point,
//! linestring and polygon.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;

/// Spatial reference used when the input text carries no `SRID=` prefix.
pub const DEFAULT_SRID: i32 = 4326;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Coord),
    LineString(Vec<Coord>),
    /// First ring is the exterior, the rest are holes
    Polygon(Vec<Vec<Coord>>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
        }
    }
}

/// A shape together with its spatial reference identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub srid: i32,
    pub shape: Shape,
}

impl Geometry {
    pub fn point(srid: i32, x: f64, y: f64) -> Self {
        Self {
            srid,
            shape: Shape::Point(Coord { x, y }),
        }
    }

    pub fn line_string(srid: i32, coords: Vec<Coord>) -> Self {
        Self {
            srid,
            shape: Shape::LineString(coords),
        }
    }

    pub fn polygon(srid: i32, rings: Vec<Vec<Coord>>) -> Self {
        Self {
            srid,
            shape: Shape::Polygon(rings),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self.shape {
            Shape::Point(_) => GeometryKind::Point,
            Shape::LineString(_) => GeometryKind::LineString,
            Shape::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Canonical EWKT form, identical to the `Display` output.
    pub fn to_ewkt(&self) -> String {
        self.to_string()
    }
}

/// Parse a legacy geometry text value and re-encode it canonically.
pub fn reencode_ewkt(value: &str) -> Result<String, GeometryError> {
    Ok(value.parse::<Geometry>()?.to_ewkt())
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GeometryError::Empty);
        }

        let (srid, wkt) = match input.split_once(';') {
            Some((head, tail)) => {
                let head = head.trim();
                let srid = head
                    .strip_prefix("SRID=")
                    .and_then(|n| n.trim().parse::<i32>().ok())
                    .ok_or_else(|| GeometryError::MalformedSrid(head.to_string()))?;
                (srid, tail.trim())
            }
            None => (DEFAULT_SRID, input),
        };

        let open = wkt
            .find('(')
            .ok_or_else(|| GeometryError::Syntax("missing coordinate list".to_string()))?;
        if !wkt.ends_with(')') {
            return Err(GeometryError::Syntax(
                "missing closing parenthesis".to_string(),
            ));
        }
        let keyword = wkt[..open].trim().to_ascii_uppercase();
        let body = &wkt[open + 1..wkt.len() - 1];

        let shape = match keyword.as_str() {
            "POINT" => Shape::Point(parse_coord(body)?),
            "LINESTRING" => Shape::LineString(parse_line(body)?),
            "POLYGON" => Shape::Polygon(parse_rings(body)?),
            other => return Err(GeometryError::UnsupportedType(other.to_string())),
        };

        Ok(Geometry { srid, shape })
    }
}

fn parse_coord(text: &str) -> Result<Coord, GeometryError> {
    let mut numbers = text.split_whitespace();
    let x = numbers.next().and_then(|n| n.parse::<f64>().ok());
    let y = numbers.next().and_then(|n| n.parse::<f64>().ok());
    match (x, y, numbers.next()) {
        (Some(x), Some(y), None) if x.is_finite() && y.is_finite() => Ok(Coord { x, y }),
        _ => Err(GeometryError::MalformedCoordinate(text.trim().to_string())),
    }
}

fn parse_line(body: &str) -> Result<Vec<Coord>, GeometryError> {
    let coords = body
        .split(',')
        .map(parse_coord)
        .collect::<Result<Vec<_>, _>>()?;
    if coords.len() < 2 {
        return Err(GeometryError::Syntax(
            "a linestring needs at least two points".to_string(),
        ));
    }
    Ok(coords)
}

fn parse_rings(body: &str) -> Result<Vec<Vec<Coord>>, GeometryError> {
    let mut rings = Vec::new();
    for group in split_top_level(body) {
        let group = group.trim();
        let inner = group
            .strip_prefix('(')
            .and_then(|g| g.strip_suffix(')'))
            .ok_or_else(|| GeometryError::Syntax("ring is not parenthesised".to_string()))?;
        let ring = inner
            .split(',')
            .map(parse_coord)
            .collect::<Result<Vec<_>, _>>()?;
        if ring.len() < 4 {
            return Err(GeometryError::Syntax(
                "a ring needs at least four points".to_string(),
            ));
        }
        if ring.first() != ring.last() {
            return Err(GeometryError::Syntax(
                "a ring must close on its first point".to_string(),
            ));
        }
        rings.push(ring);
    }
    if rings.is_empty() {
        return Err(GeometryError::Syntax("a polygon needs a ring".to_string()));
    }
    Ok(rings)
}

/// Split on commas that sit outside any parentheses.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SRID={};", self.srid)?;
        match &self.shape {
            Shape::Point(c) => write!(f, "POINT({} {})", c.x, c.y),
            Shape::LineString(coords) => {
                write!(f, "LINESTRING(")?;
                write_coords(f, coords)?;
                write!(f, ")")
            }
            Shape::Polygon(rings) => {
                write!(f, "POLYGON(")?;
                for (i, ring) in rings.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "(")?;
                    write_coords(f, ring)?;
                    write!(f, ")")?;
                }
                write!(f, ")")
            }
        }
    }
}

fn write_coords(f: &mut fmt::Formatter<'_>, coords: &[Coord]) -> fmt::Result {
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{} {}", c.x, c.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_with_srid() {
        let g: Geometry = "SRID=28992;POINT(122829.6 489674.1)".parse().unwrap();
        assert_eq!(g.srid, 28992);
        assert_eq!(g.kind(), GeometryKind::Point);
        assert_eq!(
            g.shape,
            Shape::Point(Coord {
                x: 122829.6,
                y: 489674.1
            })
        );
    }

    #[test]
    fn plain_wkt_gets_the_default_srid() {
        let g: Geometry = "POINT(5.38 52.09)".parse().unwrap();
        assert_eq!(g.srid, DEFAULT_SRID);
    }

    #[test]
    fn point_roundtrips() {
        let g = Geometry::point(4326, 5.38, 52.09);
        let text = g.to_ewkt();
        assert_eq!(text, "SRID=4326;POINT(5.38 52.09)");
        assert_eq!(text.parse::<Geometry>().unwrap(), g);
    }

    #[test]
    fn linestring_roundtrips() {
        let g = Geometry::line_string(
            4326,
            vec![
                Coord { x: 0.0, y: 0.0 },
                Coord { x: 1.5, y: 0.0 },
                Coord { x: 1.5, y: 2.0 },
            ],
        );
        assert_eq!(g.to_ewkt().parse::<Geometry>().unwrap(), g);
    }

    #[test]
    fn polygon_with_hole_roundtrips() {
        let exterior = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 4.0, y: 0.0 },
            Coord { x: 4.0, y: 4.0 },
            Coord { x: 0.0, y: 0.0 },
        ];
        let hole = vec![
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 2.0, y: 1.0 },
            Coord { x: 2.0, y: 2.0 },
            Coord { x: 1.0, y: 1.0 },
        ];
        let g = Geometry::polygon(4326, vec![exterior, hole]);
        assert_eq!(g.to_ewkt().parse::<Geometry>().unwrap(), g);
    }

    #[test]
    fn case_and_whitespace_are_normalised() {
        let g: Geometry = "SRID=28992 ; Point( 1   2 )".parse().unwrap();
        assert_eq!(g.to_ewkt(), "SRID=28992;POINT(1 2)");
    }

    #[test]
    fn rejects_malformed_srid() {
        let err = "SRID=abc;POINT(1 2)".parse::<Geometry>().unwrap_err();
        assert!(matches!(err, GeometryError::MalformedSrid(_)));
    }

    #[test]
    fn rejects_unknown_type() {
        let err = "SRID=4326;MULTIPOINT(1 2)".parse::<Geometry>().unwrap_err();
        assert_eq!(
            err,
            GeometryError::UnsupportedType("MULTIPOINT".to_string())
        );
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert!(matches!(
            "POINT(1)".parse::<Geometry>().unwrap_err(),
            GeometryError::MalformedCoordinate(_)
        ));
        assert!(matches!(
            "POINT(1 x)".parse::<Geometry>().unwrap_err(),
            GeometryError::MalformedCoordinate(_)
        ));
        assert!(matches!(
            "LINESTRING(1 2)".parse::<Geometry>().unwrap_err(),
            GeometryError::Syntax(_)
        ));
    }

    #[test]
    fn rejects_open_ring() {
        let err = "POLYGON((0 0,1 0,1 1,2 2))".parse::<Geometry>().unwrap_err();
        assert!(matches!(err, GeometryError::Syntax(_)));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<Geometry>().unwrap_err(), GeometryError::Empty);
        assert_eq!("  ".parse::<Geometry>().unwrap_err(), GeometryError::Empty);
    }

    #[test]
    fn reencode_normalises_whitespace() {
        let canonical = reencode_ewkt("SRID=4326; POINT( 7   8 )").unwrap();
        assert_eq!(canonical, "SRID=4326;POINT(7 8)");
        assert!(reencode_ewkt("SRID=4326; POINT( 7 , )").is_err());
    }
}
