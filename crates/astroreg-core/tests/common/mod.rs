use astroreg_core::{AcceptDuplicatesPolicy, Agency, Astronaut, Flight, FlightCode};

/// Create a new empty Agency for testing
#[allow(dead_code)]
pub fn new_agency() -> Agency {
    Agency::new()
}

/// Register an astronaut with a placeholder name and age
#[allow(dead_code)]
pub fn register_astronaut(agency: &mut Agency, id: &str) {
    agency
        .register_astronaut(
            Astronaut::new(id, format!("Astronaut {}", id), 30),
            &AcceptDuplicatesPolicy,
        )
        .unwrap();
}

/// Register a planned flight
#[allow(dead_code)]
pub fn register_flight(agency: &mut Agency, code: FlightCode) {
    agency
        .register_flight(Flight::new(code), &AcceptDuplicatesPolicy)
        .unwrap();
}

/// Setup one astronaut assigned to one planned flight
#[allow(dead_code)]
pub fn setup_crewed_flight(agency: &mut Agency, id: &str, code: FlightCode) {
    register_astronaut(agency, id);
    register_flight(agency, code);
    agency.assign(id, code).unwrap();
}

/// Setup a crewed flight that has already launched
#[allow(dead_code)]
pub fn setup_launched_flight(agency: &mut Agency, id: &str, code: FlightCode) {
    setup_crewed_flight(agency, id, code);
    agency.launch(code).unwrap();
}
