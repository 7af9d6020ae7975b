//! I/O modules for writing spectrum tables, plots, and reports

pub mod table;
pub mod plot;
pub mod console;

pub use table::SpectrumTableWriter;
pub use plot::SpectrumPlotter;
pub use console::run_report;
