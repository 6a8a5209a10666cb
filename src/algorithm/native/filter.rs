use tracing::warn;

use crate::io::geojson::{Feature, FeatureCollection, Properties};

/// Property holding a feature's heat risk level.
pub const RISK_LEVEL_PROPERTY: &str = "raster_value";

/// A numeric property value. Nulls, non-numeric values and NaN have none.
fn numeric_property(properties: &Properties, name: &str) -> Option<f64> {
    properties
        .get(name)
        .and_then(serde_json::Value::as_f64)
        .filter(|value| !value.is_nan())
}

impl FeatureCollection {
    /// The value of `indicator` at `percentile` (0 to 100) over all features.
    ///
    /// Features without a numeric `indicator` are ignored. With no values the threshold is `0`.
    /// A percentile at or below 0 gives the smallest value and one at or above 100 the largest;
    /// otherwise the value at sorted index `floor(percentile / 100 * n)` is returned.
    ///
    /// ```
    /// use serde_json::json;
    /// use wkb_features::io::geojson::{Feature, FeatureCollection, Properties};
    /// use wkb_features::Geometry;
    ///
    /// let collection: FeatureCollection = [4., 1., 3., 2.]
    ///     .into_iter()
    ///     .map(|value| {
    ///         let mut properties = Properties::new();
    ///         properties.insert("hhi".to_string(), json!(value));
    ///         Feature::new(Geometry::Absent, properties)
    ///     })
    ///     .collect();
    ///
    /// assert_eq!(collection.percentile_threshold("hhi", 50.), 3.);
    /// ```
    pub fn percentile_threshold(&self, indicator: &str, percentile: f64) -> f64 {
        let mut values: Vec<f64> = self
            .iter()
            .filter_map(|feature| numeric_property(&feature.properties, indicator))
            .collect();
        values.sort_by(f64::total_cmp);

        let (Some(first), Some(last)) = (values.first(), values.last()) else {
            return 0.;
        };
        if percentile <= 0. {
            return *first;
        }
        if percentile >= 100. {
            return *last;
        }

        let index = (percentile / 100. * values.len() as f64).floor() as usize;
        values.get(index).copied().unwrap_or(0.)
    }

    /// Keep the features whose risk level is one of `risk_levels` and whose `indicator` is at
    /// least `threshold`.
    ///
    /// Features without a numeric `indicator` never match. Skipped rows are carried over.
    pub fn filter_by_risk(
        &self,
        risk_levels: &[i64],
        indicator: &str,
        threshold: f64,
    ) -> FeatureCollection {
        let features: Vec<Feature> = self
            .iter()
            .filter(|feature| {
                let risk_match = numeric_property(&feature.properties, RISK_LEVEL_PROPERTY)
                    .is_some_and(|level| risk_levels.iter().any(|l| *l as f64 == level));
                let indicator_match = numeric_property(&feature.properties, indicator)
                    .is_some_and(|value| value >= threshold);
                risk_match && indicator_match
            })
            .cloned()
            .collect();

        if features.is_empty() && !self.is_empty() {
            warn!(
                ?risk_levels,
                indicator, threshold, "No features match the selected filters"
            );
        }

        FeatureCollection {
            features,
            skipped: self.skipped.clone(),
        }
    }

    /// [`filter_by_risk`](Self::filter_by_risk) with the threshold taken at `percentile` of
    /// `indicator`.
    pub fn filter_by_risk_percentile(
        &self,
        risk_levels: &[i64],
        indicator: &str,
        percentile: f64,
    ) -> FeatureCollection {
        let threshold = self.percentile_threshold(indicator, percentile);
        self.filter_by_risk(risk_levels, indicator, threshold)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Geometry;
    use crate::io::geojson::{SkipReason, SkippedRow};
    use crate::test::polygon::square;
    use serde_json::{json, Value};

    fn feature(risk: Value, hhi: Value) -> Feature {
        let mut properties = Properties::new();
        properties.insert(RISK_LEVEL_PROPERTY.to_string(), risk);
        properties.insert("hhi".to_string(), hhi);
        Feature::new(Geometry::Polygon(square(0., 0.)), properties)
    }

    fn collection(rows: &[(Value, Value)]) -> FeatureCollection {
        rows.iter()
            .map(|(risk, hhi)| feature(risk.clone(), hhi.clone()))
            .collect()
    }

    fn hhi_values(values: &[f64]) -> FeatureCollection {
        values
            .iter()
            .map(|value| feature(json!(1), json!(value)))
            .collect()
    }

    #[test]
    fn threshold_without_values_is_zero() {
        assert_eq!(FeatureCollection::default().percentile_threshold("hhi", 50.), 0.);

        let nulls = collection(&[(json!(1), Value::Null), (json!(2), json!("high"))]);
        assert_eq!(nulls.percentile_threshold("hhi", 50.), 0.);
        assert_eq!(nulls.percentile_threshold("missing", 0.), 0.);
    }

    #[test]
    fn threshold_at_bounds() {
        let collection = hhi_values(&[5., -2., 9., 3.]);
        assert_eq!(collection.percentile_threshold("hhi", 0.), -2.);
        assert_eq!(collection.percentile_threshold("hhi", -10.), -2.);
        assert_eq!(collection.percentile_threshold("hhi", 100.), 9.);
        assert_eq!(collection.percentile_threshold("hhi", 150.), 9.);
    }

    #[test]
    fn threshold_uses_floor_index() {
        let collection = hhi_values(&[50., 10., 40., 20., 30.]);
        // floor(0.5 * 5) = 2
        assert_eq!(collection.percentile_threshold("hhi", 50.), 30.);
        // floor(0.19 * 5) = 0
        assert_eq!(collection.percentile_threshold("hhi", 19.), 10.);
        // floor(0.99 * 5) = 4
        assert_eq!(collection.percentile_threshold("hhi", 99.), 50.);
    }

    #[test]
    fn threshold_ignores_nulls() {
        let collection = collection(&[
            (json!(1), Value::Null),
            (json!(1), json!(1.)),
            (json!(1), json!("n/a")),
            (json!(1), json!(2.)),
        ]);
        assert_eq!(collection.percentile_threshold("hhi", 50.), 2.);
    }

    #[test]
    fn filter_by_risk_levels_and_threshold() {
        let collection = collection(&[
            (json!(0), json!(10.)),
            (json!(2), json!(10.)),
            (json!(3), json!(1.)),
            (json!(3.0), json!(5.)),
            (json!(4), Value::Null),
            (Value::Null, json!(10.)),
        ]);

        let filtered = collection.filter_by_risk(&[2, 3, 4], "hhi", 5.);
        let risks: Vec<_> = filtered
            .iter()
            .map(|f| f.properties[RISK_LEVEL_PROPERTY].clone())
            .collect();
        assert_eq!(risks, vec![json!(2), json!(3.0)]);
    }

    #[test]
    fn filter_by_percentile() {
        let collection = collection(&[
            (json!(1), json!(1.)),
            (json!(1), json!(2.)),
            (json!(2), json!(3.)),
            (json!(2), json!(4.)),
        ]);

        // threshold is 3
        let filtered = collection.filter_by_risk_percentile(&[1, 2], "hhi", 50.);
        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .iter()
            .all(|f| f.properties[RISK_LEVEL_PROPERTY] == json!(2)));

        assert_eq!(collection.filter_by_risk_percentile(&[1, 2], "hhi", 0.).len(), 4);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let mut collection = hhi_values(&[1., 2.]);
        collection.skipped.push(SkippedRow {
            row: 7,
            reason: SkipReason::MissingGeometry,
        });

        let filtered = collection.filter_by_risk(&[4], "hhi", 0.);
        assert!(filtered.is_empty());
        assert_eq!(filtered.skipped, collection.skipped);
        assert!(collection.filter_by_risk(&[], "hhi", 0.).is_empty());
    }
}
