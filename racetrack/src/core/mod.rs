pub mod closed_loop;
pub mod racecar;
pub mod renderer;
pub mod track;
pub mod waypoint;
