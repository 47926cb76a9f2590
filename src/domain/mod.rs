// Domain layer: records, filter state, login wire types and the ports the core depends on.

pub mod login;
pub mod model;
pub mod ports;
