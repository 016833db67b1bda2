#![forbid(unsafe_code)]

pub mod catalog;
pub mod derive;
pub mod ids;
pub mod model;
pub mod session;
