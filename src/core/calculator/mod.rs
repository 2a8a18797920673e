pub mod breakdown;
pub mod reference;
pub mod suggestions;
pub mod totals;
