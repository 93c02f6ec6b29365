//! Status icons for CLI output

use crate::domain::reconcile::Severity;

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    pub const SUCCESS: &'static str = "✓";

    pub const WARNING: &'static str = "⚠";

    pub const ERROR: &'static str = "✗";

    /// Resource no longer exists remotely
    pub const GONE: &'static str = "∅";

    pub fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => Self::WARNING,
            Severity::Error => Self::ERROR,
        }
    }

    pub fn severity_text(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}
