mod flight;

pub use flight::{flight_vehicle, FlightDynamicsPlugin, FlightSet};
