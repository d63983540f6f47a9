//! Command-line front end over a JSON catalog.

pub mod commands;
