//! Duty Roster Assignment Engine with fairness balancing and calendar export.
//!
//! This crate assigns one responsible person per calendar day over a date range,
//! subject to per-person blocked dates, fairness balancing, and day-adjacency
//! constraints, and serializes the result as an RFC 5545 `VCALENDAR` document.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
