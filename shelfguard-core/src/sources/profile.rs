//! TOML-backed rule profiles.
//!
//! Format:
//!
//! ```toml
//! [[profile]]
//! user = "ada"
//!
//!   [[profile.rule]]
//!   type = "allergy"
//!   value = "peanuts"
//!
//!   [[profile.rule]]
//!   type = "ethics"
//!   value = "palm oil"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use screening::Rule;

use super::{RuleSource, SourceError};

#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default, rename = "profile")]
    profiles: Vec<ProfileEntry>,
}

#[derive(Debug, Deserialize)]
struct ProfileEntry {
    user: String,
    #[serde(default, rename = "rule")]
    rules: Vec<Rule>,
}

/// Rule profiles loaded once from a TOML file. Rule order within a profile
/// follows file order, which is also the order violations are reported in.
#[derive(Debug, Clone, Default)]
pub struct ProfileRules {
    by_user: HashMap<String, Vec<Rule>>,
}

impl ProfileRules {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading profile file {}", path.display()))?;
        let file: ProfileFile = toml::from_str(&text)
            .with_context(|| format!("parsing profile file {}", path.display()))?;
        Ok(Self {
            by_user: file
                .profiles
                .into_iter()
                .map(|p| (p.user, p.rules))
                .collect(),
        })
    }
}

impl RuleSource for ProfileRules {
    fn rules_for_user(&self, user_id: &str) -> Result<Vec<Rule>, SourceError> {
        // Unknown user: empty rule set, not an error.
        Ok(self.by_user.get(user_id).cloned().unwrap_or_default())
    }
}
