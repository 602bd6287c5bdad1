pub mod logic;
pub mod rounding;
pub mod walker;
