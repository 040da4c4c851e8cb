use crate::airport::Airport;
use crate::error::DeparturesResult;
use crate::flight::FlightStatus::{Canceled, Delayed, EnRoute};
use crate::flight::{Flight, FlightStatus};
use crate::printer::TBD;
use crate::time::{build_departure_time, short_time};
use serde::Deserialize;
use std::path::Path;
use tabled::Tabled;
use tracing::{debug, info};

pub struct DepartureBoard {
    pub current_airport: Airport,
    flights: Vec<Flight>,
}

#[derive(Deserialize)]
struct RawDeparture {
    month: i8,
    day: i8,
    time_zone: String,
    hour: i8,
    minute: i8,
}

#[derive(Deserialize)]
struct RawFlight {
    destination: Airport,
    airline: String,
    flight_number: String,
    departure: Option<RawDeparture>,
    terminal: Option<String>,
    status: FlightStatus,
}

#[derive(Tabled)]
pub struct BoardRow {
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Airline")]
    airline: String,
    #[tabled(rename = "Flight")]
    flight_number: String,
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "Terminal")]
    terminal: String,
    #[tabled(rename = "Status")]
    status: FlightStatus,
}

impl From<&Flight> for BoardRow {
    fn from(flight: &Flight) -> Self {
        BoardRow {
            destination: flight.destination.city.clone(),
            airline: flight.airline.clone(),
            flight_number: flight.flight_number.clone(),
            departure: flight.departure_time.as_ref().map_or_else(|| TBD.to_string(), short_time),
            terminal: flight.terminal.clone().unwrap_or_else(|| TBD.to_string()),
            status: flight.status,
        }
    }
}

impl DepartureBoard {
    pub fn new(current_airport: Airport) -> DepartureBoard {
        DepartureBoard {
            current_airport,
            flights: Vec::new(),
        }
    }

    pub fn add_flight(&mut self, flight: Flight) {
        debug!(flight = %flight.flight_number, status = %flight.status, "Adding flight");
        self.flights.push(flight);
    }

    /// Departures in the order they were added.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn rows(&self) -> Vec<BoardRow> {
        self.flights.iter().map(BoardRow::from).collect()
    }

    /// Rives Air Park with one en-route, one delayed and one canceled departure.
    pub fn sample() -> DepartureBoard {
        let mut board = DepartureBoard::new(Airport::new("Rives Air Park", "Royse City, TX"));

        board.add_flight(Flight {
            destination: Airport::new("Dallas Love Field", "Dallas, TX"),
            airline: "American Airlines".to_string(),
            flight_number: "AA 5576".to_string(),
            departure_time: Some(build_departure_time(7, 9, "CST", 22, 45)),
            terminal: Some("B34".to_string()),
            status: EnRoute,
        });
        board.add_flight(Flight {
            destination: Airport::new("Seattle-Tacoma International Airport", "Seattle, WA"),
            airline: "Delta Airlines".to_string(),
            flight_number: "D 2236".to_string(),
            departure_time: Some(build_departure_time(7, 9, "CST", 7, 0)),
            terminal: None,
            status: Delayed,
        });
        board.add_flight(Flight {
            destination: Airport::new("LaGuardia Airport", "New York, NY"),
            airline: "Virgin Airlines".to_string(),
            flight_number: "VI 9954".to_string(),
            departure_time: None,
            terminal: None,
            status: Canceled,
        });

        info!(airport = %board.current_airport, flights = board.flights.len(), "Built sample board");
        board
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> DeparturesResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        #[derive(Deserialize)]
        struct RawData {
            airport: Airport,
            flights: Vec<RawFlight>,
        }
        let raw: RawData = serde_json::from_str(&data)?;

        let mut board = DepartureBoard::new(raw.airport);
        for f in raw.flights {
            board.add_flight(Flight {
                destination: f.destination,
                airline: f.airline,
                flight_number: f.flight_number,
                departure_time: f
                    .departure
                    .map(|d| build_departure_time(d.month, d.day, &d.time_zone, d.hour, d.minute)),
                terminal: f.terminal,
                status: f.status,
            });
        }

        info!(path = %path.display(), airport = %board.current_airport, flights = board.flights.len(), "Loaded board");
        Ok(board)
    }
}
