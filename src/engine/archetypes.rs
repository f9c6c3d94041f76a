//! Named enemy archetypes: AI tag + combat stats per encounter template.
//! Loaded from TOML at runtime; a built-in catalog covers the stock roster.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::engine::models::EnemyState;

/// An enemy template. The `ai` tag selects the decision policy; everything
/// else is public combat state the policies may read but never mutate.
#[derive(Debug, Deserialize, Clone)]
pub struct ArchetypeProfile {
    pub description: Option<String>,
    #[serde(default = "default_ai_tag")]
    pub ai: String,
    #[serde(default = "default_hp")]
    pub hp: i32,
    #[serde(default)]
    pub armor: i32,
    #[serde(default = "default_fury_threshold")]
    pub fury_threshold: u32,
}

fn default_ai_tag() -> String {
    "default".into()
}

fn default_hp() -> i32 {
    20
}

fn default_fury_threshold() -> u32 {
    5
}

impl ArchetypeProfile {
    /// Build the encounter-start enemy state for this archetype.
    pub fn enemy_state(&self, archetype: &str) -> EnemyState {
        EnemyState {
            archetype: archetype.to_string(),
            hp: self.hp,
            max_hp: self.hp,
            armor: self.armor,
            fury: 0,
            fury_threshold: self.fury_threshold,
        }
    }
}

/// Top-level TOML file structure.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ArchetypeFile {
    #[serde(default)]
    pub archetypes: HashMap<String, ArchetypeProfile>,
}

impl ArchetypeFile {
    pub fn get(&self, name: &str) -> Option<&ArchetypeProfile> {
        self.archetypes.get(name)
    }
}

/// Stock roster used when no archetypes.toml is found.
pub static BUILTIN_ARCHETYPES: Lazy<HashMap<String, ArchetypeProfile>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "patient_hunter".to_string(),
        ArchetypeProfile {
            description: Some("Waits for forced reads before striking.".into()),
            ai: "brute".into(),
            hp: 30,
            armor: 1,
            fury_threshold: 6,
        },
    );
    m.insert(
        "appraiser".to_string(),
        ArchetypeProfile {
            description: Some("Weighs every frontier cell before committing.".into()),
            ai: "calculator".into(),
            hp: 24,
            armor: 0,
            fury_threshold: 5,
        },
    );
    m.insert(
        "magpie".to_string(),
        ArchetypeProfile {
            description: Some("Chases gold-heavy clues over everything else.".into()),
            ai: "hoarder".into(),
            hp: 20,
            armor: 0,
            fury_threshold: 4,
        },
    );
    m.insert(
        "mind_gamer".to_string(),
        ArchetypeProfile {
            description: Some("Sweeps in patterns and punishes your bomb flags.".into()),
            ai: "illusionist".into(),
            hp: 26,
            armor: 2,
            fury_threshold: 7,
        },
    );
    m.insert(
        "grunt".to_string(),
        ArchetypeProfile {
            description: None,
            ai: "default".into(),
            hp: 18,
            armor: 0,
            fury_threshold: 5,
        },
    );
    m
});

/// Load archetypes from a TOML file at the given path.
pub fn load_archetypes(path: &Path) -> Result<ArchetypeFile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Try well-known paths, falling back to the built-in roster.
pub fn load_default_archetypes() -> ArchetypeFile {
    let candidates = [
        "archetypes.toml",
        "../archetypes.toml",
        "/etc/minecrawl/archetypes.toml",
    ];
    for path in &candidates {
        let p = Path::new(path);
        if p.exists() {
            match load_archetypes(p) {
                Ok(file) => {
                    tracing::info!(path = %p.display(), count = file.archetypes.len(), "loaded enemy archetypes");
                    return file;
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load enemy archetypes");
                }
            }
        }
    }
    tracing::info!("no archetypes.toml found, using built-in roster");
    ArchetypeFile {
        archetypes: BUILTIN_ARCHETYPES.clone(),
    }
}
