use std::path::PathBuf;

use winit::dpi::LogicalSize;

use quadview_engine::coords::ColorRgba;
use quadview_engine::window::RuntimeConfig;

/// Image shown when nothing else is configured, relative to the working directory.
pub const DEFAULT_IMAGE: &str = "tiger.png";

/// Everything the viewer needs to know before the window opens.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub image_path: PathBuf,
    pub clear_color: ColorRgba,
    /// Spin the quad about X by the time since startup.
    pub rotate: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "quadview".to_string(),
            width: 800.0,
            height: 600.0,
            image_path: PathBuf::from(DEFAULT_IMAGE),
            clear_color: ColorRgba::black(),
            rotate: cfg!(feature = "cam-rotate"),
        }
    }
}

impl ViewerConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            resizable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_tiger_png() {
        let config = ViewerConfig::default();
        assert_eq!(config.image_path, PathBuf::from("tiger.png"));
        assert_eq!(config.clear_color, ColorRgba::black());
        assert_eq!(config.rotate, cfg!(feature = "cam-rotate"));
    }

    #[test]
    fn runtime_config_is_fixed_size() {
        let config = ViewerConfig {
            title: "t".into(),
            width: 320.0,
            height: 240.0,
            ..ViewerConfig::default()
        };
        let rc = config.runtime_config();
        assert_eq!(rc.title, "t");
        assert_eq!(rc.initial_size, LogicalSize::new(320.0, 240.0));
        assert!(!rc.resizable);
    }
}
