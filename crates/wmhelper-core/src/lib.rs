pub mod engine;
pub mod event_bus;
pub mod nav;
pub mod ports;
pub mod session;
pub mod usage;
