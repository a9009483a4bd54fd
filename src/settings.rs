//! Presentation preferences
//!
//! Persisted in LocalStorage on wasm, defaults elsewhere. None of this feeds
//! back into the simulation; it only shapes how the front ends draw.

use serde::{Deserialize, Serialize};

/// Which front end draws the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RendererMode {
    /// 2D DOM/SVG scene
    #[default]
    Dom,
    /// 3D WebGL scene graph
    WebGl,
}

impl RendererMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererMode::Dom => "dom",
            RendererMode::WebGl => "webgl",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dom" | "2d" | "svg" => Some(RendererMode::Dom),
            "webgl" | "3d" => Some(RendererMode::WebGl),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Active scene renderer
    pub renderer: RendererMode,
    /// Show FPS counter in the HUD
    pub show_fps: bool,
    /// Reduced motion (suppress confetti and banner animations)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            renderer: RendererMode::Dom,
            show_fps: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Whether the confetti sequence should play at all
    pub fn confetti_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "neon_runner_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_mode_round_trip() {
        assert_eq!(RendererMode::from_str("dom"), Some(RendererMode::Dom));
        assert_eq!(RendererMode::from_str("3d"), Some(RendererMode::WebGl));
        assert_eq!(RendererMode::from_str("vulkan"), None);
        assert_eq!(RendererMode::WebGl.as_str(), "webgl");
    }

    #[test]
    fn test_reduced_motion_disables_confetti() {
        let mut settings = Settings::default();
        assert!(settings.confetti_enabled());
        settings.reduced_motion = true;
        assert!(!settings.confetti_enabled());
    }
}
