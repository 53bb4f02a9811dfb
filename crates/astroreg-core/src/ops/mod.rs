pub mod agency;
pub mod astronaut_registry;
pub mod flight_registry;

pub use agency::Agency;
pub use astronaut_registry::AstronautRegistry;
pub use flight_registry::FlightRegistry;
