// Domain layer: models and capability ports. Variants live in adapters, coordinators in core.

pub mod model;
pub mod ports;
