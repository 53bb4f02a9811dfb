use crate::model::{Astronaut, Flight};
use crate::ops::Agency;

/// One-line summary of an astronaut
pub fn render_astronaut(astronaut: &Astronaut) -> String {
    format!(
        "Id: {}, Name: {}, Age: {}",
        astronaut.id, astronaut.name, astronaut.age
    )
}

/// Flight header plus its passenger roster
///
/// The outcome is only shown once the flight has finished.
pub fn render_flight(flight: &Flight) -> String {
    let mut output = format!("Flight code: {}, Status: {}", flight.code, flight.status);

    if let Some(succeeded) = flight.outcome() {
        let outcome = if succeeded { "success" } else { "failure" };
        output.push_str(&format!(", Outcome: {}", outcome));
    }
    output.push('\n');

    output.push_str("Passengers:\n");
    for id in &flight.passengers {
        output.push_str(&format!(" - {}\n", id));
    }

    output
}

/// Render every astronaut, one per line, in registration order
pub fn render_astronauts(agency: &Agency) -> String {
    let astronauts = agency.list_astronauts();
    if astronauts.is_empty() {
        return "No astronauts registered.\n".to_string();
    }

    astronauts
        .iter()
        .map(|a| format!("{}\n", render_astronaut(a)))
        .collect()
}

/// Render every flight block, separated by blank lines
pub fn render_flights(agency: &Agency) -> String {
    let flights = agency.list_flights();
    if flights.is_empty() {
        return "No flights registered.\n".to_string();
    }

    flights
        .iter()
        .map(|f| format!("{}\n", render_flight(f)))
        .collect()
}

/// Render deceased astronauts together with their full flight history
pub fn render_deceased(agency: &Agency) -> String {
    let deceased = agency.list_deceased_astronauts();
    if deceased.is_empty() {
        return "No deceased astronauts.\n".to_string();
    }

    let mut output = String::new();
    for astronaut in deceased {
        output.push_str(&render_astronaut(astronaut));
        output.push('\n');

        let history: Vec<String> = astronaut
            .flight_history
            .iter()
            .map(|code| code.to_string())
            .collect();
        output.push_str(&format!("Flights: {}\n", history.join(" ")));
    }

    output
}
