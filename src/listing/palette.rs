//! Terminal colors for listing output
//!
//! Colors follow the `ls` conventions and can be overridden through an
//! `LS_COLORS`-style string. Only the keys this tool uses are honored:
//! `di` (directories), `ln` (symlinks), `ex` (executables) and `cid`.

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::str::FromStr;

const RESET: &str = "\x1b[0m";

/// What a piece of output represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Directory,
    Symlink,
    Executable,
    DotFile,
    Cid,
}

/// When to emit color escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve `auto` against the environment
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "Invalid color mode: {} (must be 'auto', 'always', or 'never')",
                other
            )),
        }
    }
}

/// SGR parameter strings per role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub dir: String,
    pub symlink: String,
    pub executable: String,
    pub dotfile: String,
    pub cid: String,
    pub enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dir: "34".to_string(),
            symlink: "36".to_string(),
            executable: "31".to_string(),
            dotfile: "37".to_string(),
            cid: "35".to_string(),
            enabled: true,
        }
    }
}

impl Palette {
    /// Palette with every escape disabled
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Build a palette from the `LS_COLORS` environment variable
    pub fn from_env(enabled: bool) -> Self {
        let ls_colors = std::env::var("LS_COLORS").ok();
        Self {
            enabled,
            ..Self::from_ls_colors(ls_colors.as_deref())
        }
    }

    /// Apply overrides from an `LS_COLORS`-style string on top of the defaults
    pub fn from_ls_colors(spec: Option<&str>) -> Self {
        let mut palette = Self::default();
        let Some(spec) = spec.filter(|s| !s.is_empty()) else {
            return palette;
        };

        for setting in spec.split(':') {
            let parts: Vec<&str> = setting.split('=').collect();
            if parts.len() != 2 {
                continue;
            }
            let code = parts[1].to_string();
            match parts[0] {
                "di" => palette.dir = code,
                "ln" => palette.symlink = code,
                "ex" => palette.executable = code,
                "cid" => palette.cid = code,
                _ => {}
            }
        }

        palette
    }

    fn code(&self, role: Role) -> &str {
        match role {
            Role::Directory => &self.dir,
            Role::Symlink => &self.symlink,
            Role::Executable => &self.executable,
            Role::DotFile => &self.dotfile,
            Role::Cid => &self.cid,
        }
    }

    /// Wrap `text` in the escape for `role`
    pub fn paint(&self, role: Role, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[{}m{}{}", self.code(role), text, RESET)
    }

    /// Highlight an error message
    pub fn error(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.red().to_string()
    }
}
