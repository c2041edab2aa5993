//! Adapters that drive the domain from the outside world.

pub mod cli;
