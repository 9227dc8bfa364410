pub mod aggregator;
pub mod canonical;
pub mod error;
pub mod repo;
pub mod service;
