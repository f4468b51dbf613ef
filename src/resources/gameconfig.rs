//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! vsync = true
//! title = Petal Trail
//! background = 2b0e2e
//!
//! [camera]
//! zoom = 2.0
//! lerp_x = 0.08
//! lerp_y = 0.08
//! round_pixels = true
//!
//! [render]
//! pixel_art = true
//!
//! [assets]
//! dir = ./assets
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use raylib::prelude::Color;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TITLE: &str = "Petal Trail";
const DEFAULT_BACKGROUND: Color = Color::new(0x2b, 0x0e, 0x2e, 0xff);
const DEFAULT_ZOOM: f32 = 2.0;
const DEFAULT_LERP: f32 = 0.08;
const DEFAULT_ROUND_PIXELS: bool = true;
const DEFAULT_PIXEL_ART: bool = true;
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, camera follow parameters and the asset root.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    pub title: String,
    /// Clear color behind the scene.
    pub background: Color,
    pub camera_zoom: f32,
    /// Per-frame follow factor on the x axis.
    pub camera_lerp_x: f32,
    /// Per-frame follow factor on the y axis.
    pub camera_lerp_y: f32,
    pub round_pixels: bool,
    /// Nearest-neighbour texture filtering.
    pub pixel_art: bool,
    /// Root directory that asset paths are resolved against.
    pub assets_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            title: DEFAULT_TITLE.to_string(),
            background: DEFAULT_BACKGROUND,
            camera_zoom: DEFAULT_ZOOM,
            camera_lerp_x: DEFAULT_LERP,
            camera_lerp_y: DEFAULT_LERP,
            round_pixels: DEFAULT_ROUND_PIXELS,
            pixel_art: DEFAULT_PIXEL_ART,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, zoom={}, assets={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.camera_zoom,
            self.assets_dir
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(bg) = config.get("window", "background") {
            match parse_hex_color(&bg) {
                Some(color) => self.background = color,
                None => warn!("Ignoring invalid background color {:?}", bg),
            }
        }

        // [camera] section
        if let Some(zoom) = config.getfloat("camera", "zoom").ok().flatten() {
            if zoom > 0.0 {
                self.camera_zoom = zoom as f32;
            } else {
                warn!("Ignoring non-positive camera zoom {}", zoom);
            }
        }
        if let Some(lerp) = config.getfloat("camera", "lerp_x").ok().flatten() {
            self.camera_lerp_x = (lerp as f32).clamp(0.0, 1.0);
        }
        if let Some(lerp) = config.getfloat("camera", "lerp_y").ok().flatten() {
            self.camera_lerp_y = (lerp as f32).clamp(0.0, 1.0);
        }
        if let Some(round) = config.getbool("camera", "round_pixels").ok().flatten() {
            self.round_pixels = round;
        }

        // [render] section
        if let Some(pixel_art) = config.getbool("render", "pixel_art").ok().flatten() {
            self.pixel_art = pixel_art;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "background", Some(format_hex_color(self.background)));

        // [camera] section
        config.set("camera", "zoom", Some(self.camera_zoom.to_string()));
        config.set("camera", "lerp_x", Some(self.camera_lerp_x.to_string()));
        config.set("camera", "lerp_y", Some(self.camera_lerp_y.to_string()));
        config.set("camera", "round_pixels", Some(self.round_pixels.to_string()));

        // [render] section
        config.set("render", "pixel_art", Some(self.pixel_art.to_string()));

        // [assets] section
        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Parse `#rrggbb` or `rrggbb` into an opaque color.
///
/// The INI reader treats `#` as a comment marker, so files store the bare form.
pub fn parse_hex_color(text: &str) -> Option<Color> {
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::new(r, g, b, 255))
}

fn format_hex_color(color: Color) -> String {
    format!("{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
