//! Shared UI crate for the launch records dashboard: controls, SVG charts
//! and the page that wires them to the server functions.

pub mod charts;
pub mod controls;
pub mod i18n;

pub mod core {
    pub mod format;
}

pub mod components {
    mod header;
    pub use header::DashboardHeader;
}

pub mod views {
    mod dashboard;
    pub use dashboard::Dashboard;
}
