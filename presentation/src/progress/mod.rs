//! Progress reporting while a flow runs

pub mod reporter;
