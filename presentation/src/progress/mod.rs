//! Progress display for launcher runs

pub mod reporter;
