//! Persistence for the counter: one `calculations` table, accessed via sea-orm.
//!
//! - `db` - connection setup and schema migration
//! - `entity` - the table definition
//! - `mapper` - row to `CalculationRecord` conversion
//! - `sea_orm_repo` - `CounterRepository` and `CounterScan` implementations

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;
