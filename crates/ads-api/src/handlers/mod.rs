//! HTTP request handlers for the ADS gateway
//!
//! Each handler extracts its parameters, makes exactly one device call and
//! hands the outcome to [`crate::envelope::respond`].

pub mod device;
pub mod symbols;
