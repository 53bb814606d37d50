//! Algorithm-level constants

pub mod symmetric;
