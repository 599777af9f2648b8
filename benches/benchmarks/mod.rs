pub mod analysis;
pub mod solver;
