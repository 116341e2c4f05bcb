// Domain layer: location records, the fixed catalog, and the ports the adapters implement.

pub mod catalog;
pub mod model;
pub mod ports;
