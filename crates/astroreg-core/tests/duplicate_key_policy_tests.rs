//! Duplicate-key behavior under both policies

#![allow(clippy::unwrap_used)]

mod common;

use astroreg_core::{
    AcceptDuplicatesPolicy, AgencyError, Astronaut, DuplicateKeyMode, Flight,
    RejectDuplicatesPolicy,
};

#[test]
fn test_accept_policy_keeps_first_astronaut_for_lookup() {
    let mut agency = common::new_agency();

    agency
        .register_astronaut(Astronaut::new("111", "First", 30), &AcceptDuplicatesPolicy)
        .unwrap();
    agency
        .register_astronaut(Astronaut::new("111", "Second", 40), &AcceptDuplicatesPolicy)
        .unwrap();

    assert_eq!(agency.astronauts().len(), 2);
    assert_eq!(agency.astronauts().find("111").unwrap().name, "First");
}

#[test]
fn test_accept_policy_operations_target_first_flight() {
    let mut agency = common::new_agency();
    common::register_astronaut(&mut agency, "111");
    common::register_flight(&mut agency, 5);
    common::register_flight(&mut agency, 5);

    agency.assign("111", 5).unwrap();

    let flights = agency.list_flights();
    assert_eq!(flights[0].passengers, vec!["111"]);
    assert!(flights[1].passengers.is_empty());
}

#[test]
fn test_reject_policy_refuses_second_astronaut() {
    let mut agency = common::new_agency();
    common::register_astronaut(&mut agency, "111");

    let result =
        agency.register_astronaut(Astronaut::new("111", "Other", 33), &RejectDuplicatesPolicy);

    assert_eq!(
        result,
        Err(AgencyError::DuplicateAstronaut {
            astronaut_id: "111".to_string()
        })
    );
    assert_eq!(agency.astronauts().len(), 1);
}

#[test]
fn test_reject_policy_allows_fresh_keys() {
    let mut agency = common::new_agency();
    let policy = DuplicateKeyMode::Reject.policy();

    agency.register_flight(Flight::new(1), policy).unwrap();
    agency.register_flight(Flight::new(2), policy).unwrap();
    let result = agency.register_flight(Flight::new(1), policy);

    assert_eq!(result, Err(AgencyError::DuplicateFlight { flight_code: 1 }));
    assert_eq!(agency.flights().len(), 2);
}
