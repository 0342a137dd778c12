// Domain layer: score record, classification and the input port. No I/O here.

pub mod model;
pub mod ports;
