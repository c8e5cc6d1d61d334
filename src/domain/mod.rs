// Domain layer: plain data and ports (interfaces). Adapters implement the ports.

pub mod model;
pub mod ports;
