//! Theme configuration for the desktop app

use std::sync::OnceLock;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Theme matching the operating system preference
    #[must_use]
    pub fn system() -> Self {
        if is_system_dark_mode() {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Value for the `data-theme` attribute
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout).contains("0x0"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light mode.", e);
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light mode.", e);
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode() -> bool {
    false
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub code_bg: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    bg_tertiary: "#f1f3f4",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#3ecf8e",
    accent_text: "#0b2e1f",
    warning: "#b45309",
    error: "#dc2626",
    success: "#16a34a",
    code_bg: "#fbfbfb",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1c1c1c",
    bg_secondary: "#232323",
    bg_tertiary: "#2a2a2a",
    text_primary: "#ededed",
    text_secondary: "#a0a0a0",
    text_muted: "#707070",
    border: "#3a3a3a",
    accent: "#3ecf8e",
    accent_text: "#0b2e1f",
    warning: "#f59e0b",
    error: "#f87171",
    success: "#4ade80",
    code_bg: "#181818",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_match_their_theme() {
        assert_eq!(ResolvedTheme::Light.palette().bg_primary, "#ffffff");
        assert_eq!(ResolvedTheme::Dark.palette().bg_primary, "#1c1c1c");
        assert_eq!(ResolvedTheme::Dark.as_attr(), "dark");
    }

    #[test]
    fn system_theme_is_stable() {
        assert_eq!(ResolvedTheme::system(), ResolvedTheme::system());
    }
}
