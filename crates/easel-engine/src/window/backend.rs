use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

/// Environment variable that overrides [`BackendPreference`] at startup.
pub const BACKEND_ENV: &str = "EASEL_BACKEND";

/// Concrete presenter a window ended up with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Backend {
    /// wgpu surface + instanced SDF shape renderer.
    Gpu,
    /// tiny-skia pixmap blitted through softbuffer.
    Software,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Gpu => write!(f, "gpu"),
            Backend::Software => write!(f, "software"),
        }
    }
}

/// Which presenters the runtime may try, in order.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BackendPreference {
    /// GPU first, software if the GPU path cannot be brought up.
    #[default]
    Auto,
    Gpu,
    Software,
}

impl BackendPreference {
    /// Candidate backends in the order they are attempted.
    pub fn candidates(self) -> &'static [Backend] {
        match self {
            BackendPreference::Auto => &[Backend::Gpu, Backend::Software],
            BackendPreference::Gpu => &[Backend::Gpu],
            BackendPreference::Software => &[Backend::Software],
        }
    }

    /// Reads [`BACKEND_ENV`]. Unset or empty yields `None`; anything unparsable is an error.
    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var(BACKEND_ENV) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => value.parse().map(Some),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => bail!("{BACKEND_ENV} is not valid unicode: {e}"),
        }
    }

    /// Environment override if present, `self` otherwise.
    pub fn or_env(self) -> Result<Self> {
        Ok(Self::from_env()?.unwrap_or(self))
    }
}

impl FromStr for BackendPreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "gpu" | "wgpu" => Ok(BackendPreference::Gpu),
            "software" | "cpu" => Ok(BackendPreference::Software),
            other => bail!("unknown backend {other:?} (expected auto, gpu or software)"),
        }
    }
}
