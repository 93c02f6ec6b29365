//! Terminal rendering of users and diagnostics

pub mod colors;
pub mod icons;
pub mod table;

pub use colors::{table_color_to_colored_str, ColorTheme};
pub use icons::StatusIcon;
pub use table::TableRenderer;
