//! Text rendering for the menu's listing options

pub mod roster_render;

pub use roster_render::{
    render_astronaut, render_astronauts, render_deceased, render_flight, render_flights,
};
