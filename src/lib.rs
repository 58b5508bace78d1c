// src/lib.rs

pub mod cli;
pub mod config;
pub mod params;

pub mod compare;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod history;
pub mod model;
pub mod report;
pub mod runner;
