//! Feature vectors consumed by the classifier artifacts.

use crate::core::distribution::CLASS_COUNT;

/// Number of first-stage model features.
pub const FEATURE_COUNT: usize = 12;

/// Column names in the exact order the artifacts were trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "DayOfWeek",
    "DayofMonth",
    "Month",
    "Distance",
    "CRSDepMin",
    "CRSArrMin",
    "ScheduledElapsedTime",
    "OriginReliability",
    "DestReliability",
    "CarrierReliability",
    "DepTimeOfDay_enc",
    "ArrTimeOfDay_enc",
];

/// Encoded feature vector for one flight.
///
/// Every classifier artifact was trained on the column order of
/// [`FEATURE_NAMES`]; [`FeatureVector::to_array`] is the only way values
/// leave this struct, so a reordering here would corrupt every prediction.
/// Normally constructed by [`crate::encoding::encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub day_of_week: f64,
    pub day_of_month: f64,
    pub month: f64,
    pub distance: f64,
    pub crs_dep_min: f64,
    pub crs_arr_min: f64,
    pub scheduled_elapsed_time: f64,
    pub origin_reliability: f64,
    pub dest_reliability: f64,
    pub carrier_reliability: f64,
    pub dep_time_of_day: f64,
    pub arr_time_of_day: f64,
}

impl FeatureVector {
    /// Values in training column order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.day_of_week,
            self.day_of_month,
            self.month,
            self.distance,
            self.crs_dep_min,
            self.crs_arr_min,
            self.scheduled_elapsed_time,
            self.origin_reliability,
            self.dest_reliability,
            self.carrier_reliability,
            self.dep_time_of_day,
            self.arr_time_of_day,
        ]
    }
}

/// Second-stage feature vector built from the staged binary scores.
///
/// Consumed by the meta-classifier, which was trained on the column order
/// `P_Diverted, P_Cancelled, P_Delayed, P_OnTime`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaFeatureVector {
    pub p_diverted: f64,
    pub p_cancelled: f64,
    pub p_delayed: f64,
    pub p_on_time: f64,
}

impl MetaFeatureVector {
    /// Build the meta features from the four staged binary scores.
    ///
    /// * `p_div` — P(diverted) from the diverted-vs-rest classifier.
    /// * `p_ot_del` — P(on-time) from the on-time-vs-delayed classifier.
    /// * `p_del_can` — P(not-cancelled) from the delayed-vs-cancelled
    ///   classifier, read as the delayed-side probability.
    /// * `p_ot_can` — P(not-cancelled) from the on-time-vs-cancelled
    ///   classifier, read as the on-time-side probability.
    pub fn from_stage_scores(p_div: f64, p_ot_del: f64, p_del_can: f64, p_ot_can: f64) -> Self {
        Self {
            p_diverted: p_div,
            p_cancelled: (p_del_can + p_ot_can) / 2.0,
            p_delayed: (1.0 - p_ot_del) * (1.0 - p_del_can),
            p_on_time: p_ot_del * p_ot_can,
        }
    }

    /// Values in training column order.
    pub fn to_array(&self) -> [f64; CLASS_COUNT] {
        [
            self.p_diverted,
            self.p_cancelled,
            self.p_delayed,
            self.p_on_time,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn feature_array_follows_training_order() {
        let fv = FeatureVector {
            day_of_week: 1.0,
            day_of_month: 2.0,
            month: 3.0,
            distance: 4.0,
            crs_dep_min: 5.0,
            crs_arr_min: 6.0,
            scheduled_elapsed_time: 7.0,
            origin_reliability: 8.0,
            dest_reliability: 9.0,
            carrier_reliability: 10.0,
            dep_time_of_day: 11.0,
            arr_time_of_day: 12.0,
        };
        let arr = fv.to_array();
        assert_eq!(arr.len(), FEATURE_NAMES.len());
        // Each position carries the field the matching column name says it does.
        assert_eq!(
            arr,
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
        );
    }

    #[test]
    fn meta_features_combine_stage_scores() {
        let meta = MetaFeatureVector::from_stage_scores(0.1, 0.8, 0.7, 0.9);
        assert_relative_eq!(meta.p_diverted, 0.1);
        assert_relative_eq!(meta.p_cancelled, 0.8); // (0.7 + 0.9) / 2
        assert_relative_eq!(meta.p_delayed, 0.2 * 0.3);
        assert_relative_eq!(meta.p_on_time, 0.72);
    }

    #[test]
    fn meta_on_time_is_product_of_on_time_sides() {
        let meta = MetaFeatureVector::from_stage_scores(0.0, 0.8, 0.0, 0.9);
        assert_relative_eq!(meta.p_on_time, 0.72);
    }
}
