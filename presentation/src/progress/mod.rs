//! Progress display while a crew runs

pub mod reporter;
