//! Cloud occupancy "weather report"
//!
//! Maps how full the cloud is (percent of capacity in use) to a forecast
//! shown in the header.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forecast {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl Forecast {
    /// `None` for negative (unknown) occupancy
    pub fn from_occupancy(percent: i32) -> Option<Self> {
        match percent {
            p if p > 85 => Some(Forecast::Stormy),
            p if p > 60 => Some(Forecast::Rainy),
            p if p > 35 => Some(Forecast::Cloudy),
            p if p >= 0 => Some(Forecast::Sunny),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Forecast::Sunny => "sunny",
            Forecast::Cloudy => "cloudy",
            Forecast::Rainy => "rainy",
            Forecast::Stormy => "stormy",
        }
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-line report for the header, `None` when occupancy is unknown
pub fn weather_report(percent: i32) -> Option<String> {
    Forecast::from_occupancy(percent).map(|forecast| {
        format!(
            "Atmosphere is at {}% capacity. The forecast is {}.",
            percent, forecast
        )
    })
}
