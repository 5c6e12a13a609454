use std::fmt::{self, Display};
use std::str::FromStr;

use geojson::feature::Id;
use geojson::JsonObject;

use crate::dimension::Dimension;
use crate::error::{GeosError, Result};
use crate::geometry::Geometry;

/// A geometry with an optional id and free-form properties.
///
/// Writing drops measures, so only `XY` and `XYZ` features read back as the same dimension.
/// A written `XYZM` feature reads back as `XYZ`, a written `XYM` one as `XY`.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<D: Dimension> {
    pub geometry: Option<Geometry<D>>,
    pub id: Option<Id>,
    pub properties: Option<JsonObject>,
}

impl<D: Dimension> Feature<D> {
    pub fn new(geometry: Geometry<D>) -> Self {
        Self {
            geometry: Some(geometry),
            id: None,
            properties: None,
        }
    }

    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref()?.get(key)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.properties
            .get_or_insert_with(JsonObject::new)
            .insert(key.into(), value.into());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection<D: Dimension> {
    pub features: Vec<Feature<D>>,
}

/// Any GeoJSON document.
///
/// Like [`Feature`], documents are written without measures.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson<D: Dimension> {
    Geometry(Geometry<D>),
    Feature(Feature<D>),
    FeatureCollection(FeatureCollection<D>),
}

impl<D: Dimension> TryFrom<geojson::GeoJson> for GeoJson<D> {
    type Error = GeosError;

    fn try_from(value: geojson::GeoJson) -> Result<Self> {
        Ok(match value {
            geojson::GeoJson::Geometry(g) => GeoJson::Geometry(Geometry::try_from(&g)?),
            geojson::GeoJson::Feature(f) => GeoJson::Feature(Feature::try_from(f)?),
            geojson::GeoJson::FeatureCollection(fc) => {
                GeoJson::FeatureCollection(FeatureCollection::try_from(fc)?)
            }
        })
    }
}

impl<D: Dimension> From<&GeoJson<D>> for geojson::GeoJson {
    fn from(value: &GeoJson<D>) -> Self {
        match value {
            GeoJson::Geometry(g) => geojson::GeoJson::Geometry(g.into()),
            GeoJson::Feature(f) => geojson::GeoJson::Feature(f.into()),
            GeoJson::FeatureCollection(fc) => geojson::GeoJson::FeatureCollection(fc.into()),
        }
    }
}

impl<D: Dimension> FromStr for GeoJson<D> {
    type Err = GeosError;

    fn from_str(s: &str) -> Result<Self> {
        GeoJson::try_from(s.parse::<geojson::GeoJson>()?)
    }
}

impl<D: Dimension> Display for GeoJson<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&geojson::GeoJson::from(self), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimension::{XY, XYZ};
    use crate::test::polygon::unit_square;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "a",
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": {"name": "first", "rank": 1}
            },
            {
                "type": "Feature",
                "id": 7,
                "geometry": null,
                "properties": null
            }
        ]
    }"#;

    #[test]
    fn feature_collection_round_trip() {
        let parsed: GeoJson<XY> = COLLECTION.parse().unwrap();
        let GeoJson::FeatureCollection(collection) = &parsed else {
            panic!("expected a feature collection");
        };
        assert_eq!(collection.features.len(), 2);

        let first = &collection.features[0];
        assert_eq!(first.id, Some(Id::String("a".to_string())));
        assert_eq!(first.property("name"), Some(&serde_json::json!("first")));
        assert_eq!(first.property("missing"), None);
        assert_eq!(collection.features[1].geometry, None);
        assert_eq!(
            collection.features[1].id,
            Some(Id::Number(serde_json::Number::from(7)))
        );

        let reparsed: GeoJson<XY> = parsed.to_string().parse().unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn geometry_document() {
        let document = GeoJson::Geometry(Geometry::Polygon(unit_square()));
        let text = document.to_string();
        assert!(text.contains(r#""type":"Polygon""#));
        assert_eq!(text.parse::<GeoJson<XY>>().unwrap(), document);
    }

    #[test]
    fn build_feature() {
        let mut feature = Feature::new(Geometry::Polygon(unit_square()));
        feature.set_property("area", 1.0);
        feature.id = Some(Id::Number(3.into()));

        let document = GeoJson::Feature(feature.clone());
        let GeoJson::Feature(parsed) = document.to_string().parse::<GeoJson<XY>>().unwrap() else {
            panic!("expected a feature");
        };
        assert_eq!(parsed, feature);
        assert_eq!(parsed.property("area"), Some(&serde_json::json!(1.0)));
    }

    #[test]
    fn flat_positions_are_not_three_dimensional() {
        assert!(matches!(
            COLLECTION.parse::<GeoJson<XYZ>>(),
            Err(GeosError::CannotConvertCoordinateTypes { .. })
        ));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            "{\"type\": \"Nope\"}".parse::<GeoJson<XY>>(),
            Err(GeosError::GeoJson(_))
        ));
    }
}
