//! PIES Description Generation Service
//!
//! This library provides the core functionality for the pies-desc-genie
//! system, which generates Auto Care PIES-compliant product descriptions
//! for automotive aftermarket parts using an LLM generation backend.

pub mod app_state;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;
