pub mod checker;
pub mod probe;
pub mod report;
