// Domain layer: money, catalog items, cart lines and the ports the rest of the crate talks through.

pub mod catalog;
pub mod model;
pub mod money;
pub mod ports;
