//! Live progress output

pub mod reporter;
