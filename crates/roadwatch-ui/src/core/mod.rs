//! Core, DOM-free primitives and helpers for the dashboard.
pub mod chart;
pub mod config;
pub mod connectivity;
pub mod demo;
pub mod detections;
pub mod errors;
pub mod export;
pub mod stats;
pub mod store;
pub mod ui;
