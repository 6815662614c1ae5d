// Domain layer: load records, stored entities and the ports the pipeline is built against.

pub mod model;
pub mod ports;
pub mod store;
