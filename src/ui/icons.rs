//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and
//! colors used across the report formatters and the summary table.

use super::theme::ShipshapeTheme;
use crate::report::CheckStatus;

/// Canonical status kinds used across all Shipshape output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Verification step succeeded.
    Ok,
    /// Verification step failed.
    Failed,
    /// Non-fatal warning.
    Warning,
    /// Informational line (echoed file content, hints).
    Info,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Info => "·",
        }
    }

    /// Bracketed text for the summary table and non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Failed => "[ERROR]",
            Self::Warning => "[WARN]",
            Self::Info => "[info]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &ShipshapeTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Ok => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Info => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &ShipshapeTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Ok => Self::Ok,
            CheckStatus::Error => Self::Failed,
            CheckStatus::Warning => Self::Warning,
            CheckStatus::Info => Self::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Ok.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
        assert_eq!(StatusKind::Info.icon(), "·");
    }

    #[test]
    fn bracketed_returns_text_labels() {
        assert_eq!(StatusKind::Ok.bracketed(), "[OK]");
        assert_eq!(StatusKind::Failed.bracketed(), "[ERROR]");
        assert_eq!(StatusKind::Warning.bracketed(), "[WARN]");
        assert_eq!(StatusKind::Info.bracketed(), "[info]");
    }

    #[test]
    fn styled_returns_string_with_icon() {
        let theme = ShipshapeTheme::plain();
        for kind in [
            StatusKind::Ok,
            StatusKind::Failed,
            StatusKind::Warning,
            StatusKind::Info,
        ] {
            let styled = kind.styled(&theme);
            assert!(
                styled.contains(kind.icon()),
                "styled({:?}) missing icon",
                kind
            );
        }
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = ShipshapeTheme::plain();
        let result = StatusKind::Ok.format(&theme, "src/main.rs exists");
        assert!(result.contains("✓"));
        assert!(result.contains("src/main.rs exists"));
    }

    #[test]
    fn format_plain_uses_brackets() {
        let result = StatusKind::Failed.format_plain("Dockerfile is missing");
        assert_eq!(result, "[ERROR] Dockerfile is missing");
    }

    #[test]
    fn from_check_status() {
        assert_eq!(StatusKind::from(CheckStatus::Ok), StatusKind::Ok);
        assert_eq!(StatusKind::from(CheckStatus::Error), StatusKind::Failed);
        assert_eq!(StatusKind::from(CheckStatus::Warning), StatusKind::Warning);
        assert_eq!(StatusKind::from(CheckStatus::Info), StatusKind::Info);
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let icons = [
            StatusKind::Ok.icon(),
            StatusKind::Failed.icon(),
            StatusKind::Warning.icon(),
            StatusKind::Info.icon(),
        ];
        let mut unique = icons.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), icons.len(), "All icons should be unique");
    }
}
