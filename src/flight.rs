use crate::airport::Airport;
use crate::error::DeparturesError;
use jiff::Zoned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlightStatus {
    EnRoute,
    Scheduled,
    Canceled,
    Delayed,
    Landed,
    OnTime,
    Boarding,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 7] = [
        FlightStatus::EnRoute,
        FlightStatus::Scheduled,
        FlightStatus::Canceled,
        FlightStatus::Delayed,
        FlightStatus::Landed,
        FlightStatus::OnTime,
        FlightStatus::Boarding,
    ];

    /// Canonical display label, also the scenario file spelling.
    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::EnRoute => "enRoute",
            FlightStatus::Scheduled => "scheduled",
            FlightStatus::Canceled => "canceled",
            FlightStatus::Delayed => "delayed",
            FlightStatus::Landed => "landed",
            FlightStatus::OnTime => "onTime",
            FlightStatus::Boarding => "boarding",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlightStatus {
    type Err = DeparturesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| DeparturesError::UnknownStatus(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Flight {
    pub destination: Airport,
    pub airline: String,
    pub flight_number: String,
    /// Absent while canceled or not yet scheduled.
    pub departure_time: Option<Zoned>,
    /// Absent until a terminal is assigned.
    pub terminal: Option<String>,
    pub status: FlightStatus,
}
