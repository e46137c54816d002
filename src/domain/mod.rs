// Domain layer: record model and ports. No dependencies beyond serde and the
// error type.

pub mod model;
pub mod ports;
