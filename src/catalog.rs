//! Job catalog: canonical roles and the skills each one requires

use crate::config::CatalogConfig;
use crate::error::{CareerFitError, Result};
use crate::processing::tokenizer::{normalize_name, skill_key};
use log::{info, warn};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../data/jobs_db.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub required_skills: Vec<String>,
}

/// Immutable, validated set of roles in data-source order.
///
/// Every role has a unique name (case-insensitive) and at least one required
/// skill. Skills repeated within a role are collapsed to their first spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct JobCatalog {
    roles: Vec<Role>,
}

impl Role {
    pub fn new(name: impl Into<String>, required_skills: Vec<String>) -> Self {
        Self {
            name: name.into(),
            required_skills,
        }
    }
}

impl JobCatalog {
    /// Validate and normalize a list of roles
    pub fn new(roles: Vec<Role>) -> Result<Self> {
        if roles.is_empty() {
            return Err(CareerFitError::EmptyCatalog);
        }

        let mut seen_names = HashSet::new();
        let mut validated = Vec::with_capacity(roles.len());

        for role in roles {
            let name = role.name.trim().to_string();
            if name.is_empty() {
                return Err(CareerFitError::Catalog("role with an empty name".to_string()));
            }
            if !seen_names.insert(normalize_name(&name)) {
                return Err(CareerFitError::Catalog(format!("duplicate role: {}", name)));
            }

            let mut seen_skills = HashSet::new();
            let mut required_skills = Vec::with_capacity(role.required_skills.len());
            for skill in role.required_skills {
                let key = skill_key(&skill);
                if key.is_empty() {
                    warn!("Ignoring blank skill in role '{}'", name);
                    continue;
                }
                if !seen_skills.insert(key) {
                    warn!("Ignoring repeated skill '{}' in role '{}'", skill.trim(), name);
                    continue;
                }
                required_skills.push(skill.trim().to_string());
            }

            if required_skills.is_empty() {
                return Err(CareerFitError::DegenerateRole(name));
            }

            validated.push(Role {
                name,
                required_skills,
            });
        }

        Ok(Self { roles: validated })
    }

    /// Parse a JSON object of role name to required skills, keeping key order
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|e| CareerFitError::Catalog(format!("Failed to parse catalog: {}", e)))?;

        Self::new(
            raw.0
                .into_iter()
                .map(|(name, skills)| Role::new(name, skills))
                .collect(),
        )
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CareerFitError::Catalog(format!("Failed to read catalog '{}': {}", path.display(), e))
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!("Loaded {} roles from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn load(config: &CatalogConfig) -> Result<Self> {
        match &config.path {
            Some(path) => Self::from_path(path),
            None => {
                let catalog = Self::builtin()?;
                info!("Loaded {} roles from the built-in catalog", catalog.len());
                Ok(catalog)
            }
        }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Case-insensitive lookup by role name
    pub fn role(&self, name: &str) -> Option<&Role> {
        let wanted = normalize_name(name);
        self.roles.iter().find(|r| normalize_name(&r.name) == wanted)
    }

    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Role entries in the order they appear in the source document
struct RawCatalog(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawCatalogVisitor;

        impl<'de> Visitor<'de> for RawCatalogVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of role names to lists of required skills")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((role, skills)) = map.next_entry::<String, Vec<String>>()? {
                    entries.push((role, skills));
                }
                Ok(RawCatalog(entries))
            }
        }

        deserializer.deserialize_map(RawCatalogVisitor)
    }
}
