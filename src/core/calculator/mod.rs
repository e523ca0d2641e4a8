pub mod classifier;
pub mod duration;
pub mod monthly;
pub mod pause;
