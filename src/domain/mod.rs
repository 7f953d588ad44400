// Domain layer: existence outcomes, reports and the metadata port.

pub mod model;
pub mod ports;
