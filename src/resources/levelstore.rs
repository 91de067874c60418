//! Level descriptions loaded at startup.
//!
//! Each level file is a small JSON document naming the tile rows, cell size,
//! and enemy spawn points. Loading happens once before the simulation starts;
//! a missing or unparsable level is a startup error surfaced to the caller,
//! never a runtime failure of the tick loop.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::resources::tilegrid::TileGrid;

/// Serialized form of one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelMap {
    pub tile_size: f32,
    pub rows: Vec<String>,
    /// Enemy spawn positions in pixels (camera space at offset 0).
    #[serde(default)]
    pub enemy_spawns: Vec<[f32; 2]>,
}

impl LevelMap {
    pub fn build_grid(&self) -> TileGrid {
        TileGrid::from_rows(&self.rows, self.tile_size)
    }
}

/// All authored levels, in play order. Level indices are 1-based.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelStore {
    levels: Vec<LevelMap>,
}

impl LevelStore {
    pub fn new(levels: Vec<LevelMap>) -> Self {
        Self { levels }
    }

    /// Load `level1.json` .. `levelN.json` from a directory, stopping at the
    /// first missing index. At least one level must parse.
    pub fn load_dir(dir: &str) -> Result<Self, String> {
        let mut levels = Vec::new();
        loop {
            let path = format!("{}/level{}.json", dir, levels.len() + 1);
            let text = match std::fs::read_to_string(&path) {
                Ok(t) => t,
                Err(_) => break,
            };
            let map: LevelMap = serde_json::from_str(&text)
                .map_err(|e| format!("failed to parse {}: {}", path, e))?;
            levels.push(map);
        }
        if levels.is_empty() {
            return Err(format!("no level files found under {}", dir));
        }
        Ok(Self { levels })
    }

    /// Level by 1-based index.
    pub fn get(&self, level_index: u32) -> Option<&LevelMap> {
        if level_index == 0 {
            return None;
        }
        self.levels.get(level_index as usize - 1)
    }

    pub fn last_level(&self) -> u32 {
        self.levels.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_one_based() {
        let store = LevelStore::new(vec![LevelMap {
            tile_size: 32.0,
            rows: vec!["mm".into()],
            enemy_spawns: vec![],
        }]);
        assert!(store.get(0).is_none());
        assert!(store.get(1).is_some());
        assert!(store.get(2).is_none());
        assert_eq!(store.last_level(), 1);
    }
}
