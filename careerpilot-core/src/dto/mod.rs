//! Data Transfer Objects for the Copilot API
//!
//! This module contains the request bodies sent to the API and the report
//! bodies it returns. Field names follow the wire format exactly; payload
//! defaulting rules live on the request constructors.

pub mod report;
pub mod request;
