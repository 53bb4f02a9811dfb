use crate::model::{FlightCode, FlightStatus};
use crate::ops::Agency;

/// Find astronauts marked deceased that are still flagged available
///
/// Returns the identifiers of offending records.
pub fn find_deceased_but_available(agency: &Agency) -> Vec<String> {
    agency
        .astronauts()
        .list()
        .iter()
        .filter(|a| a.deceased && a.available)
        .map(|a| a.id.clone())
        .collect()
}

/// Find roster entries that reference no registered astronaut
///
/// Returns list of (flight_code, astronaut_id) tuples
pub fn find_unknown_passengers(agency: &Agency) -> Vec<(FlightCode, String)> {
    let astronauts = agency.astronauts();
    let mut unknown = Vec::new();

    for flight in agency.flights().list() {
        for id in &flight.passengers {
            if !astronauts.contains(id) {
                unknown.push((flight.code, id.clone()));
            }
        }
    }

    unknown
}

/// Find roster entries whose flight is missing from the astronaut's history
///
/// Every assignment appends to both sides and unassignment only trims the
/// roster, so the roster must always be covered by the history.
///
/// Returns list of (flight_code, astronaut_id) tuples
pub fn find_roster_entries_missing_from_history(agency: &Agency) -> Vec<(FlightCode, String)> {
    let mut missing = Vec::new();

    for flight in agency.flights().list() {
        for id in &flight.passengers {
            // Unknown passengers are reported by find_unknown_passengers
            let Ok(astronaut) = agency.astronauts().find(id) else {
                continue;
            };
            if !astronaut.flight_history.contains(&flight.code) {
                missing.push((flight.code, id.clone()));
            }
        }
    }

    missing
}

/// Find flights whose lifecycle timestamps disagree with their status
pub fn find_lifecycle_mismatches(agency: &Agency) -> Vec<FlightCode> {
    agency
        .flights()
        .list()
        .iter()
        .filter(|f| {
            let launched = f.launched_at.is_some();
            let finished = f.finished_at.is_some();
            match f.status {
                FlightStatus::Planned => launched || finished || f.succeeded,
                FlightStatus::InFlight => !launched || finished || f.succeeded,
                FlightStatus::Finished => !launched || !finished,
            }
        })
        .map(|f| f.code)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Astronaut, Flight};
    use crate::policy::AcceptDuplicatesPolicy;

    fn crewed_agency() -> Agency {
        let mut agency = Agency::new();
        agency
            .register_astronaut(Astronaut::new("111", "Yuri", 27), &AcceptDuplicatesPolicy)
            .unwrap();
        agency
            .register_flight(Flight::new(1), &AcceptDuplicatesPolicy)
            .unwrap();
        agency.assign("111", 1).unwrap();
        agency
    }

    #[test]
    fn test_consistent_agency_has_no_findings() {
        let mut agency = crewed_agency();
        agency.launch(1).unwrap();
        agency.report_accident(1).unwrap();

        assert!(find_deceased_but_available(&agency).is_empty());
        assert!(find_unknown_passengers(&agency).is_empty());
        assert!(find_roster_entries_missing_from_history(&agency).is_empty());
        assert!(find_lifecycle_mismatches(&agency).is_empty());
    }

    #[test]
    fn test_detects_deceased_but_available() {
        let mut agency = crewed_agency();
        let astronaut = agency.astronauts.find_mut("111").unwrap();
        astronaut.deceased = true;

        assert_eq!(find_deceased_but_available(&agency), vec!["111"]);
    }

    #[test]
    fn test_detects_unknown_passenger() {
        let mut agency = crewed_agency();
        agency
            .flights
            .find_mut(1)
            .unwrap()
            .add_passenger("ghost".to_string());

        assert_eq!(
            find_unknown_passengers(&agency),
            vec![(1, "ghost".to_string())]
        );
    }

    #[test]
    fn test_detects_roster_missing_from_history() {
        let mut agency = crewed_agency();
        agency
            .astronauts
            .find_mut("111")
            .unwrap()
            .flight_history
            .clear();

        assert_eq!(
            find_roster_entries_missing_from_history(&agency),
            vec![(1, "111".to_string())]
        );
    }

    #[test]
    fn test_detects_lifecycle_mismatch() {
        let mut agency = crewed_agency();
        agency.flights.find_mut(1).unwrap().status = FlightStatus::InFlight;

        assert_eq!(find_lifecycle_mismatches(&agency), vec![1]);
    }
}
