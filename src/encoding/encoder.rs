//! Feature encoding for one flight itinerary.

use crate::core::{FeatureVector, FlightDetails};
use crate::encoding::ReliabilityTables;
use crate::error::Result;

/// Bucket an hour of day into the encoding the models were trained on:
/// morning 0 for hours 5..11, midday 1 for 11..17, evening 2 for 17..22,
/// night 3 otherwise.
pub fn time_of_day(hour: u8) -> u8 {
    match hour {
        5..=10 => 0,
        11..=16 => 1,
        17..=21 => 2,
        _ => 3,
    }
}

/// Encode raw flight details into the fixed-order [`FeatureVector`].
///
/// Validates the numeric ranges, derives the schedule features, and looks
/// up the three reliability scores. Pure given the tables; fails before
/// any scoring backend is touched.
///
/// Departure and arrival minutes are minutes since midnight. A negative
/// scheduled elapsed time means the flight lands past midnight, so one day
/// is added; the result is never negative.
pub fn encode(flight: &FlightDetails, tables: &ReliabilityTables) -> Result<FeatureVector> {
    flight.validate()?;

    let crs_dep_min = flight.dep_hour as f64 * 60.0;
    let crs_arr_min = flight.arr_hour as f64 * 60.0;
    let mut elapsed = crs_arr_min - crs_dep_min;
    if elapsed < 0.0 {
        elapsed += 1440.0;
    }

    let carrier_reliability = tables.carrier().get(&flight.carrier)?;
    let origin_reliability = tables.origin().get(&flight.origin)?;
    let dest_reliability = tables.dest().get(&flight.dest)?;

    Ok(FeatureVector {
        day_of_week: flight.day_of_week as f64,
        day_of_month: flight.day_of_month as f64,
        month: flight.month as f64,
        distance: flight.distance as f64,
        crs_dep_min,
        crs_arr_min,
        scheduled_elapsed_time: elapsed,
        origin_reliability,
        dest_reliability,
        carrier_reliability,
        dep_time_of_day: time_of_day(flight.dep_hour) as f64,
        arr_time_of_day: time_of_day(flight.arr_hour) as f64,
    })
}
