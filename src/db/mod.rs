pub mod initialize;
pub mod log;
pub mod migrate;
pub mod palettes;
pub mod pool;
pub mod queries;
