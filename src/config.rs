use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "GRAPH_SKETCH_CONFIG";

/// RGB color triple
pub type Rgb = [u8; 3];

/// Presentation settings for the editor window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub window_title: String,
    pub window_size: [f32; 2],

    /// Radius of the drawn vertex circle
    pub node_radius: f32,

    /// Click distance that counts as "on" a vertex; falls back to `node_radius`
    pub hit_radius: Option<f32>,

    pub edge_width: f32,
    pub label_font_size: f32,
    pub legend_font_size: f32,
    pub prompt_font_size: f32,

    pub node_color: Rgb,
    pub selected_node_color: Rgb,
    pub edge_color: Rgb,
    pub background_color: Rgb,
    pub text_color: Rgb,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_title: "Graph Sketch".to_string(),
            window_size: [800.0, 600.0],
            node_radius: 20.0,
            hit_radius: None,
            edge_width: 2.0,
            label_font_size: 20.0,
            legend_font_size: 18.0,
            prompt_font_size: 24.0,
            node_color: [135, 206, 235],
            selected_node_color: [255, 165, 0],
            edge_color: [169, 169, 169],
            background_color: [200, 200, 200],
            text_color: [0, 0, 0],
        }
    }
}

impl EditorConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config from: {}", path.display()))
    }

    /// Load from the file named by `GRAPH_SKETCH_CONFIG`, or use defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = Path::new(&path);
                log::info!("loading config from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius.unwrap_or(self.node_radius)
    }

    /// Center of the initial window, where the first vertex is placed
    pub fn center(&self) -> (f32, f32) {
        (self.window_size[0] / 2.0, self.window_size[1] / 2.0)
    }
}
