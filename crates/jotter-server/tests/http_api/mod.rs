//! HTTP API integration tests
//!
//! Tests for the member directory, note ledger, and health endpoints

pub mod member_api_test;
