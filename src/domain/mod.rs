// Domain layer: identifier and report models plus the ports the batch pipeline runs against.

pub mod model;
pub mod ports;
