//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that presenters query while a scan is in flight.

pub mod scan_results_view;

pub use scan_results_view::{ScanResultEntry, ScanResultsView};
