use super::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, Position,
};
use geo::prelude::*;
use geo_types::Coordinate;

impl From<&Position> for Coordinate<f64> {
    fn from(position: &Position) -> Self {
        Coordinate {
            x: position.longitude,
            y: position.latitude,
        }
    }
}

fn line_string(positions: &[Position]) -> geo_types::LineString<f64> {
    geo_types::LineString(positions.iter().map(Coordinate::from).collect())
}

fn polygon(rings: &[Vec<Position>]) -> geo_types::Polygon<f64> {
    let mut rings = rings.iter().map(|ring| line_string(ring));
    let exterior = rings
        .next()
        .unwrap_or_else(|| geo_types::LineString(vec![]));
    geo_types::Polygon::new(exterior, rings.collect())
}

impl From<&Point> for geo_types::Point<f64> {
    fn from(point: &Point) -> Self {
        geo_types::Point(Coordinate::from(&point.coordinates))
    }
}

impl From<&MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(multi_point: &MultiPoint) -> Self {
        let points = multi_point
            .coordinates
            .iter()
            .map(|position| geo_types::Point(position.into()))
            .collect();
        geo_types::MultiPoint(points)
    }
}

impl From<&LineString> for geo_types::LineString<f64> {
    fn from(line: &LineString) -> Self {
        line_string(&line.coordinates)
    }
}

impl From<&MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(multi_line: &MultiLineString) -> Self {
        let lines = multi_line
            .coordinates
            .iter()
            .map(|line| line_string(line))
            .collect();
        geo_types::MultiLineString(lines)
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(p: &Polygon) -> Self {
        polygon(&p.coordinates)
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(multi_polygon: &MultiPolygon) -> Self {
        let polygons = multi_polygon
            .coordinates
            .iter()
            .map(|rings| polygon(rings))
            .collect();
        geo_types::MultiPolygon(polygons)
    }
}

impl From<&GeometryCollection> for geo_types::GeometryCollection<f64> {
    fn from(collection: &GeometryCollection) -> Self {
        let geometries = collection.geometries.iter().map(|g| g.into()).collect();
        geo_types::GeometryCollection(geometries)
    }
}

/// Altitudes are dropped.
impl From<&Geometry> for geo_types::Geometry<f64> {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(p) => geo_types::Geometry::Point(p.into()),
            Geometry::MultiPoint(mp) => geo_types::Geometry::MultiPoint(mp.into()),
            Geometry::LineString(ls) => geo_types::Geometry::LineString(ls.into()),
            Geometry::MultiLineString(mls) => geo_types::Geometry::MultiLineString(mls.into()),
            Geometry::Polygon(p) => geo_types::Geometry::Polygon(p.into()),
            Geometry::MultiPolygon(mp) => geo_types::Geometry::MultiPolygon(mp.into()),
            Geometry::GeometryCollection(gc) => {
                geo_types::Geometry::GeometryCollection(gc.into())
            }
        }
    }
}

fn collect_positions(geometry: &Geometry, out: &mut Vec<Position>) {
    match geometry {
        Geometry::Point(p) => out.push(p.coordinates),
        Geometry::MultiPoint(MultiPoint { coordinates, .. })
        | Geometry::LineString(LineString { coordinates, .. }) => out.extend(coordinates),
        Geometry::MultiLineString(MultiLineString { coordinates, .. })
        | Geometry::Polygon(Polygon { coordinates, .. }) => {
            out.extend(coordinates.iter().flatten())
        }
        Geometry::MultiPolygon(mp) => out.extend(mp.coordinates.iter().flatten().flatten()),
        Geometry::GeometryCollection(gc) => {
            for g in gc.geometries.iter() {
                collect_positions(g, out);
            }
        }
    }
}

impl Geometry {
    /// `[west, south, east, north]` over all positions, `None` if there are none.
    ///
    /// This is computed, the stored `bbox` member is left alone.
    pub fn bounding_box(&self) -> Option<[f64; 4]> {
        let mut positions = vec![];
        collect_positions(self, &mut positions);
        let rect = line_string(&positions).bounding_rect()?;
        Some([rect.min().x, rect.min().y, rect.max().x, rect.max().y])
    }
}
