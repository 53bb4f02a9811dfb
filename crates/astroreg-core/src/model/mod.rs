pub mod astronaut;
pub mod flight;

pub use astronaut::Astronaut;
pub use flight::{Flight, FlightCode, FlightStatus};
