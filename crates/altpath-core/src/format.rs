//! How distance reports and errors are printed
//!
//! `human` writes one `vertex: distance` line per vertex, `json` a single
//! document, and `records` line-oriented `H`/`D` records for scripts.
//! Errors follow the same choice: a `json` run reports failures as a JSON
//! envelope on stderr.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AltPathError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Records,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Human,
        OutputFormat::Json,
        OutputFormat::Records,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Records => "records",
        }
    }

    /// A command-line choice wins over the config file; human otherwise
    pub fn resolve(flag: Option<Self>, configured: Option<Self>) -> Self {
        flag.or(configured).unwrap_or_default()
    }

    /// Whether failures should be reported as a JSON envelope
    pub fn wants_structured_errors(self) -> bool {
        self == OutputFormat::Json
    }
}

impl FromStr for OutputFormat {
    type Err = AltPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AltPathError::UnknownFormat(s.to_lowercase()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
