pub mod recrystallize;

pub use recrystallize::{SimulationResult, Simulation};
