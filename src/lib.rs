//! Strategy Mapper - Derived metrics for AI strategy planning
//!
//! This crate scores organizational AI readiness, computes initiative
//! financials and NPV scenarios, places initiatives on a complexity/impact
//! portfolio, maps stakeholders, and derives a dated action plan that can be
//! exported as a JSON report.
//!
//! # Layers
//!
//! - `domain` - Value objects, scoring tables, metric engines and the planning session
//! - `ports` - The report file storage trait
//! - `adapters` - Local-filesystem and in-memory report storage
//! - `application` - YAML seed loading and report export/load handlers
//! - `config` - Environment-driven configuration and tracing setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
