//! Table rendering for CLI output

use super::{table_color_to_colored_str, ColorTheme, StatusIcon};
use crate::domain::reconcile::Diagnostic;
use crate::domain::record::UserRecord;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render users query results as a formatted table
    pub fn render_users(&self, users: &[UserRecord]) -> String {
        if users.is_empty() {
            return "No users found".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("EMAIL").set_alignment(CellAlignment::Left),
                Cell::new("FIRST NAME").set_alignment(CellAlignment::Left),
                Cell::new("LAST NAME").set_alignment(CellAlignment::Left),
                Cell::new("GROUPS").set_alignment(CellAlignment::Left),
                Cell::new("ROLES").set_alignment(CellAlignment::Left),
            ]);

        for user in users {
            let groups = user.groups.join(", ");
            let roles = user
                .roles
                .iter()
                .map(|r| match (&r.project, &r.namespace) {
                    (Some(p), Some(ns)) => format!("{}@{}/{}", r.role, p, ns),
                    (Some(p), None) => format!("{}@{}", r.role, p),
                    _ => r.role.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ");

            table.add_row(vec![
                Cell::new(&user.email).fg(self.theme.info),
                Cell::new(&user.first_name).fg(self.theme.value_color(&user.first_name)),
                Cell::new(&user.last_name).fg(self.theme.value_color(&user.last_name)),
                Cell::new(&groups).fg(self.theme.value_color(&groups)),
                Cell::new(&roles).fg(self.theme.value_color(&roles)),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Users {} ─╮\n",
            format!("[{} matched]", users.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    /// Render diagnostics one per line, icon first
    pub fn render_diagnostics(&self, diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(|d| {
                let color = table_color_to_colored_str(self.theme.severity_color(d.severity));
                format!(
                    "{} {}: {}\n    {}",
                    StatusIcon::severity_icon(d.severity).color(color),
                    StatusIcon::severity_text(d.severity).color(color),
                    d.summary,
                    d.detail.bright_black()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
