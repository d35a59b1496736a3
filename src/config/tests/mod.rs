//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Page size, status, and feedback option resolution
//! - `loading`: End-to-end loading from CLI arguments and environment
//! - `validation`: Configuration consistency validation tests

mod helpers;
