//====================================================================

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::characters::Character;

//====================================================================

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("unable to serialize character '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: ron::Error,
    },

    #[error("unable to deserialize character '{name}': {source}")]
    Deserialize {
        name: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

//====================================================================

/// Persistent part of a character, stored between battles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub hp: u32,
    pub mp: u32,
    pub level: u32,
    pub team_order: u32,
    pub hpbonus: u32,
    pub mpbonus: u32,
    pub atkbonus: u32,
    pub defbonus: u32,
    pub agtbonus: u32,
    pub luckbonus: u32,
}

impl Character {
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: self.name.clone(),
            hp: self.hp,
            mp: self.mp,
            level: self.level,
            team_order: self.team_order,
            hpbonus: self.hpbonus,
            mpbonus: self.mpbonus,
            atkbonus: self.atkbonus,
            defbonus: self.defbonus,
            agtbonus: self.agtbonus,
            luckbonus: self.luckbonus,
        }
    }

    pub fn restore(&mut self, snapshot: &CharacterSnapshot) {
        debug_assert_eq!(self.name, snapshot.name);

        self.hp = snapshot.hp;
        self.mp = snapshot.mp;
        self.level = snapshot.level;
        self.team_order = snapshot.team_order;
        self.hpbonus = snapshot.hpbonus;
        self.mpbonus = snapshot.mpbonus;
        self.atkbonus = snapshot.atkbonus;
        self.defbonus = snapshot.defbonus;
        self.agtbonus = snapshot.agtbonus;
        self.luckbonus = snapshot.luckbonus;
    }
}

//====================================================================

/// Character storage keyed by name.
pub trait SaveStore {
    fn save(&mut self, snapshot: &CharacterSnapshot) -> Result<(), SaveError>;
    fn load(&self, name: &str) -> Result<Option<CharacterSnapshot>, SaveError>;
}

/// Keeps every character as a RON document.
#[derive(Debug, Default)]
pub struct RonSave {
    documents: FxHashMap<String, String>,
}

impl RonSave {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn document(&self, name: &str) -> Option<&str> {
        self.documents.get(name).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl SaveStore for RonSave {
    fn save(&mut self, snapshot: &CharacterSnapshot) -> Result<(), SaveError> {
        let document = ron::ser::to_string_pretty(snapshot, ron::ser::PrettyConfig::default())
            .map_err(|source| SaveError::Serialize {
                name: snapshot.name.clone(),
                source,
            })?;

        log::debug!("Saving character '{}'", snapshot.name);
        self.documents.insert(snapshot.name.clone(), document);

        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<CharacterSnapshot>, SaveError> {
        let document = match self.documents.get(name) {
            Some(document) => document,
            None => return Ok(None),
        };

        ron::from_str(document)
            .map(Some)
            .map_err(|source| SaveError::Deserialize {
                name: name.to_string(),
                source,
            })
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reset(_: &mut Character) {}

    #[test]
    fn snapshot_survives_ron() {
        let mut character = Character::new("Molko", reset);
        character.hp = 70;
        character.mp = 12;
        character.level = 3;
        character.agtbonus = 4;

        let mut store = RonSave::new();
        store.save(&character.snapshot()).unwrap();

        assert!(store.document("Molko").unwrap().contains("agtbonus: 4"));

        let mut restored = Character::new("Molko", reset);
        restored.restore(&store.load("Molko").unwrap().unwrap());

        assert_eq!(restored.snapshot(), character.snapshot());
        assert!(store.load("Nobody").unwrap().is_none());
    }

    #[test]
    fn corrupted_document_is_an_error() {
        let mut store = RonSave::new();
        store
            .documents
            .insert("Molko".to_string(), "(name: \"Molko\", hp: ".to_string());

        assert!(matches!(
            store.load("Molko"),
            Err(SaveError::Deserialize { .. })
        ));
    }
}

//====================================================================
