//! Core types used throughout the SimSimi client

pub mod identifier;
pub mod locale;
