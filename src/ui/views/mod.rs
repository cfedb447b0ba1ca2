pub mod celebration;
pub mod pending;
pub mod quiz;
pub mod welcome;
