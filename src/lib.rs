//! Far Away Library
//!
//! Headless host for the packing list, disclosure and step wizard state
//! machines. State and update logic live in `faraway-app`.

pub mod headless;

pub use headless::run_headless;
