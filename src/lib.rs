//! tourscout - Plan nearest-first tourist visits and analyze nearby service
//! availability from OpenStreetMap data

pub mod analytics;
pub mod api;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod osm;
pub mod planner;
pub mod report;
