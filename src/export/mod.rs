//! Result export formats.

pub mod csv;

pub use csv::render_csv;
