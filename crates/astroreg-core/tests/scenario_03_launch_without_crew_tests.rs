//! Scenario 03: launching a flight with no passengers
//!
//! Launch requires at least one passenger even when the flight is planned.

#![allow(clippy::unwrap_used)]

mod common;

use astroreg_core::{AgencyError, ExErrorKind};
use common::{new_agency, register_astronaut, register_flight};

#[test]
fn test_launch_without_passengers_fails() {
    let mut agency = new_agency();
    register_flight(&mut agency, 3);

    let result = agency.launch(3);

    let err = result.unwrap_err();
    assert_eq!(err, AgencyError::NoPassengers { flight_code: 3 });
    assert_eq!(err.kind(), ExErrorKind::InvalidTransition);

    let flight = agency.flights().find(3).unwrap();
    assert!(flight.is_planned());
    assert!(flight.launched_at.is_none());
}

#[test]
fn test_launch_after_everyone_unassigned_fails() {
    let mut agency = new_agency();
    register_astronaut(&mut agency, "111");
    register_flight(&mut agency, 3);
    agency.assign("111", 3).unwrap();
    agency.unassign("111", 3).unwrap();

    let result = agency.launch(3);

    assert!(matches!(result, Err(AgencyError::NoPassengers { .. })));
    assert!(agency.astronauts().find("111").unwrap().is_available());
}

#[test]
fn test_launch_unknown_flight_is_not_found() {
    let mut agency = new_agency();

    let err = agency.launch(404).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
}
