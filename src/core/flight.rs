//! Raw flight itinerary input.

use crate::error::{PredictError, Result};

/// Raw flight details as supplied by the caller, before encoding.
///
/// Categorical codes must exist in the corresponding reliability table;
/// numeric fields must pass [`FlightDetails::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightDetails {
    /// Day of week, 1..=7.
    pub day_of_week: u8,
    /// Day of month, 1..=31.
    pub day_of_month: u8,
    /// Month, 1..=12.
    pub month: u8,
    /// Flight distance in miles, 50..=5000.
    pub distance: u32,
    /// Scheduled departure hour, 0..=23.
    pub dep_hour: u8,
    /// Scheduled arrival hour, 0..=23.
    pub arr_hour: u8,
    /// Carrier code, e.g. "AA".
    pub carrier: String,
    /// Origin airport code, e.g. "JFK".
    pub origin: String,
    /// Destination airport code, e.g. "LAX".
    pub dest: String,
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(PredictError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl FlightDetails {
    /// Check all numeric fields against their documented ranges.
    ///
    /// Runs before encoding; a failure here means no table lookup and no
    /// backend invocation happens for this request.
    pub fn validate(&self) -> Result<()> {
        check_range("day_of_week", self.day_of_week as i64, 1, 7)?;
        check_range("day_of_month", self.day_of_month as i64, 1, 31)?;
        check_range("month", self.month as i64, 1, 12)?;
        check_range("distance", self.distance as i64, 50, 5000)?;
        check_range("dep_hour", self.dep_hour as i64, 0, 23)?;
        check_range("arr_hour", self.arr_hour as i64, 0, 23)?;
        Ok(())
    }
}
