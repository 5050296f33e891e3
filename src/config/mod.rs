//! Static configuration

pub mod defaults;
