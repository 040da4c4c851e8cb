use crate::board::DepartureBoard;
use crate::flight::Flight;
use crate::flight::FlightStatus::{Boarding, Canceled, Delayed, EnRoute, Landed, OnTime, Scheduled};
use crate::time::short_time;


pub const TBD: &str = "TBD";

fn departure_time_str(flight: &Flight) -> String {
    flight
        .departure_time
        .as_ref()
        .map_or_else(|| TBD.to_string(), short_time)
}

fn terminal_str(flight: &Flight) -> &str {
    flight.terminal.as_deref().unwrap_or(TBD)
}

pub fn status_line(flight: &Flight, departure_time: &str) -> String {
    match flight.status {
        Canceled => format!(
            "{} airlines flight {} to {} is {}.",
            flight.airline, flight.flight_number, flight.destination.city, flight.status
        ),
        _ => format!(
            "Destination: {} Airline: {} Flight: {} Departure Time: {} ",
            flight.destination.city, flight.airline, flight.flight_number, departure_time
        ),
    }
}

pub fn passenger_alert(flight: &Flight, departure_time: &str, terminal: &str) -> String {
    let city = &flight.destination.city;
    match flight.status {
        Canceled => format!("We're sorry your flight to {city} was canceled, here is a $500 voucher."),
        Scheduled => format!(
            "Your flight to {city} is scheduled to depart at {departure_time} from terminal: {terminal}"
        ),
        Boarding => format!(
            "Your flight is boarding, please head to terminal: {terminal} immediately. The doors are closing soon."
        ),
        Delayed => format!("your flight {} to {city} has been delayed.", flight.flight_number),
        EnRoute => format!("your flight {} to {city} is on its way!", flight.flight_number),
        Landed => format!(
            "The {} flight number {} has landed.",
            flight.airline, flight.flight_number
        ),
        OnTime => format!(
            "Your flight {} to {city} is {}",
            flight.flight_number, flight.status
        ),
    }
}

pub fn information_desk_line(flight: &Flight) -> String {
    format!(
        "Passengers on {} flight {} towards {}, your terminal is currently unavailable. Please see the nearest information desk for more details.",
        flight.airline, flight.flight_number, flight.destination.name
    )
}

/// Status line, passenger alert and, without a terminal, the information desk notice.
pub fn flight_lines(flight: &Flight) -> Vec<String> {
    let departure_time = departure_time_str(flight);
    let terminal = terminal_str(flight);

    let mut lines = vec![
        status_line(flight, &departure_time),
        passenger_alert(flight, &departure_time, terminal),
    ];
    if flight.terminal.is_none() {
        lines.push(information_desk_line(flight));
    }
    lines
}

pub fn departure_lines(board: &DepartureBoard) -> Vec<String> {
    board.flights().iter().flat_map(flight_lines).collect()
}

pub fn print_departures(board: &DepartureBoard) -> Vec<String> {
    let lines = departure_lines(board);
    for line in &lines {
        println!("{}", line);
    }
    lines
}
