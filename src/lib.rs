#![forbid(unsafe_code)]

pub mod cloudwatch;
pub mod collector;
pub mod config;
pub mod datamodel;
pub mod plugin;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
