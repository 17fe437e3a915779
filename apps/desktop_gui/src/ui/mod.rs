//! UI layer for the portfolio app: app shell, theme, and shared widgets.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::PortfolioApp;
