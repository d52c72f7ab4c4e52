//! Domain building blocks shared by the persistence and HTTP layers:
//! entities, form commands, and the converters between them.

pub mod commands;
pub mod converters;
pub mod domain;
pub mod error;
pub mod types;
