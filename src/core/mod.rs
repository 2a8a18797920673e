pub mod calculator;
pub mod factors;
pub mod logic;

pub use logic::Core;
