//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, link, API base, and interceptor resolution
//! - `operation_mode`: Operation mode determination tests
//! - `loading`: Environment and CLI loading through ortho-config

mod field_resolution;
mod helpers;
mod operation_mode;
