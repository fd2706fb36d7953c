//! Adapters implementing domain ports.

pub mod csv_grid;
pub mod in_memory_grid;

pub use csv_grid::CsvGridSource;
pub use in_memory_grid::InMemoryGridSource;
