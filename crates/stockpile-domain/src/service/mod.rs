//! Domain Services - Logic that spans entities or repositories

pub mod grouping;
pub mod stock;
