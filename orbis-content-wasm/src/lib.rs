//! WASM bindings for orbis-content — lets a JS-hosted engine build room
//! content at startup and pass it straight to its own loader.

use wasm_bindgen::prelude::*;

use orbis_content::content::coast_maze;
use orbis_content::core::maze::{
    MazeBuilder, DEFAULT_ID_PREFIX, DEFAULT_ROOM_COLOR, DEFAULT_ROOM_ICON, MAX_DIM,
};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Deserialize)]
#[serde(default)]
struct MazeInput {
    width: usize,
    height: usize,
    id_prefix: String,
    room_icon: String,
    room_color: String,
    seed: Option<u64>,
}

impl Default for MazeInput {
    fn default() -> Self {
        Self {
            width: MAX_DIM,
            height: MAX_DIM,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            room_icon: DEFAULT_ROOM_ICON.to_string(),
            room_color: DEFAULT_ROOM_COLOR.to_string(),
            seed: None,
        }
    }
}

impl MazeInput {
    fn builder(&self) -> MazeBuilder {
        let builder = MazeBuilder::new()
            .width(self.width)
            .height(self.height)
            .id_prefix(&self.id_prefix)
            .room_icon(&self.room_icon)
            .room_color(&self.room_color);
        match self.seed {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
    }
}

/// Generate a maze from a JSON options object; every field is optional and
/// unrecognized fields are ignored. Returns the id→entity mapping as JSON,
/// ready for the host's `load`.
#[wasm_bindgen]
pub fn generate_maze(options_json: &str) -> Result<String, JsValue> {
    let input: MazeInput =
        serde_json::from_str(options_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let rooms = input.builder().generate();
    serde_json::to_string(&rooms).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The built-in coastal maze content set as JSON.
#[wasm_bindgen]
pub fn coast_maze_rooms(seed: u64) -> Result<String, JsValue> {
    serde_json::to_string(&coast_maze::rooms(seed)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_apply() {
        let input: MazeInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.width, 10);
        assert_eq!(input.height, 10);
        assert_eq!(input.id_prefix, "Maze");
        assert!(input.seed.is_none());
    }

    #[test]
    fn seeded_input_generates_full_grid() {
        let input: MazeInput =
            serde_json::from_str(r#"{"width": 3, "height": 2, "id_prefix": "W", "seed": 5}"#)
                .unwrap();
        let rooms = input.builder().generate();
        assert_eq!(rooms.len(), 6);
        assert!(rooms.contains_key("W_r1_c2"));
    }
}
