#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal wizard that records one timber quality inspection per pass as a
//! row in a shared Google Sheets worksheet.

pub mod config;
pub mod logging;
pub mod model;
pub mod sheets;
pub mod tui;
pub mod wizard;
