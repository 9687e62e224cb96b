//! Output formatting for reports

mod terminal;

pub use terminal::TerminalReport;
