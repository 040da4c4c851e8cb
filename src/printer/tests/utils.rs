use crate::airport::Airport;
use crate::flight::{Flight, FlightStatus};
use crate::time::build_departure_time;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn flight(
    airline: &str,
    flight_number: &str,
    destination: (&str, &str),
    departure: Option<(i8, i8)>,
    terminal: Option<&str>,
    status: FlightStatus,
) -> Flight {
    Flight {
        destination: Airport::new(destination.0, destination.1),
        airline: airline.to_string(),
        flight_number: flight_number.to_string(),
        departure_time: departure.map(|(hour, minute)| build_departure_time(7, 9, "CST", hour, minute)),
        terminal: terminal.map(str::to_string),
        status,
    }
}

pub fn arb_status() -> impl Strategy<Value = FlightStatus> {
    prop_oneof![
        Just(FlightStatus::EnRoute),
        Just(FlightStatus::Scheduled),
        Just(FlightStatus::Canceled),
        Just(FlightStatus::Delayed),
        Just(FlightStatus::Landed),
        Just(FlightStatus::OnTime),
        Just(FlightStatus::Boarding),
    ]
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (
        "[A-Z][a-z]{2,10}",
        "[A-Z]{1,2} [0-9]{1,4}",
        "[A-Z][a-z]{3,12}",
        proptest::option::of((0..24i8, 0..60i8)),
        proptest::option::of("[A-D][0-9]{1,2}"),
        arb_status(),
    )
        .prop_map(|(airline, number, city, departure, terminal, status)| {
            flight(
                &airline,
                &number,
                (&format!("{} Airport", city), &city),
                departure,
                terminal.as_deref(),
                status,
            )
        })
}
