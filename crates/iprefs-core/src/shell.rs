//! Supported command shells
//!
//! [`Shell`] is a closed set. Each variant has a stable display label which is
//! also its serialized form. Labels coming from the UI or from a settings file
//! go through [`Shell::parse`], which never fails: anything unrecognised
//! resolves to [`Shell::default()`], the host platform's default shell.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A command shell the application can launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Shell {
    // macOS
    Terminal,
    Hyper,
    ITerm2,
    PowerShellCore,
    Kitty,
    Alacritty,
    WezTerm,
    Warp,

    // Linux
    Gnome,
    Mate,
    Tilix,
    Terminator,
    Urxvt,
    Konsole,
    Xterm,

    // Windows
    CommandPrompt,
    PowerShell,
    GitBash,
    Cygwin,
    Wsl,
    WindowsTerminal,
}

impl Shell {
    /// Every supported shell, in display order
    pub const ALL: &'static [Shell] = &[
        Shell::Terminal,
        Shell::Hyper,
        Shell::ITerm2,
        Shell::PowerShellCore,
        Shell::Kitty,
        Shell::Alacritty,
        Shell::WezTerm,
        Shell::Warp,
        Shell::Gnome,
        Shell::Mate,
        Shell::Tilix,
        Shell::Terminator,
        Shell::Urxvt,
        Shell::Konsole,
        Shell::Xterm,
        Shell::CommandPrompt,
        Shell::PowerShell,
        Shell::GitBash,
        Shell::Cygwin,
        Shell::Wsl,
        Shell::WindowsTerminal,
    ];

    /// Display label, also used as the serialized value
    pub fn label(&self) -> &'static str {
        match self {
            Shell::Terminal => "Terminal",
            Shell::Hyper => "Hyper",
            Shell::ITerm2 => "iTerm2",
            Shell::PowerShellCore => "PowerShell Core",
            Shell::Kitty => "Kitty",
            Shell::Alacritty => "Alacritty",
            Shell::WezTerm => "WezTerm",
            Shell::Warp => "Warp",
            Shell::Gnome => "GNOME Terminal",
            Shell::Mate => "MATE Terminal",
            Shell::Tilix => "Tilix",
            Shell::Terminator => "Terminator",
            Shell::Urxvt => "URxvt",
            Shell::Konsole => "Konsole",
            Shell::Xterm => "XTerm",
            Shell::CommandPrompt => "Command Prompt",
            Shell::PowerShell => "PowerShell",
            Shell::GitBash => "Git Bash",
            Shell::Cygwin => "Cygwin",
            Shell::Wsl => "WSL",
            Shell::WindowsTerminal => "Windows Terminal",
        }
    }

    /// Parse a raw label, falling back to [`Shell::default()`].
    ///
    /// Use this at UI and file boundaries where a bad value must not surface
    /// as an error. Use [`str::parse`] when the caller needs to know.
    pub fn parse(raw: &str) -> Shell {
        match raw.parse() {
            Ok(shell) => shell,
            Err(e) => {
                tracing::debug!("{}, using {}", e, Shell::default());
                Shell::default()
            }
        }
    }
}

impl Default for Shell {
    #[cfg(target_os = "macos")]
    fn default() -> Self {
        Shell::Terminal
    }

    #[cfg(target_os = "windows")]
    fn default() -> Self {
        Shell::CommandPrompt
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn default() -> Self {
        Shell::Gnome
    }
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Shell::ALL
            .iter()
            .copied()
            .find(|shell| shell.label() == trimmed)
            .ok_or_else(|| Error::unknown_shell(s))
    }
}

impl From<String> for Shell {
    fn from(raw: String) -> Self {
        Shell::parse(&raw)
    }
}

impl From<Shell> for String {
    fn from(shell: Shell) -> Self {
        shell.label().to_string()
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
