use anyhow::Result;

use quadview_engine::coords::{quad_projection, ColorRgba};
use quadview_engine::core::{App, AppControl, FrameCtx};
use quadview_engine::image::RgbaImage;
use quadview_engine::input::{InputFrame, Key};
use quadview_engine::render::TexturedQuadRenderer;
use quadview_engine::time::FrameTime;

use crate::config::ViewerConfig;

/// Shows one image on a quad until Escape or window close.
pub struct Viewer {
    renderer: TexturedQuadRenderer,
    clear_color: ColorRgba,
    rotate: bool,
}

impl Viewer {
    /// Decodes the configured image. Runs before the window opens, so a bad
    /// path fails without flashing an empty window.
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let image = RgbaImage::load_png(&config.image_path)?;
        Ok(Self::with_image(image, config.clear_color, config.rotate))
    }

    pub fn with_image(image: RgbaImage, clear_color: ColorRgba, rotate: bool) -> Self {
        Self {
            renderer: TexturedQuadRenderer::new(image),
            clear_color,
            rotate,
        }
    }
}

impl App for Viewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        if wants_exit(ctx.input_frame) {
            log::info!("escape pressed, closing");
            return Ok(AppControl::Exit);
        }

        let mvp = quad_projection(ctx.viewport(), rotation_angle(self.rotate, &ctx.time));
        let renderer = &mut self.renderer;

        ctx.render(self.clear_color, |rctx, target| renderer.render(rctx, target, &mvp))
    }
}

fn wants_exit(frame: &InputFrame) -> bool {
    frame.pressed(Key::Escape)
}

fn rotation_angle(rotate: bool, time: &FrameTime) -> f32 {
    if rotate { time.elapsed } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use quadview_engine::input::{InputEvent, InputState, KeyState, Modifiers};

    use super::*;

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key) {
        state.apply_event(
            frame,
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                modifiers: Modifiers::default(),
                code: 0,
                repeat: false,
            },
        );
    }

    fn time_at(elapsed: f32) -> FrameTime {
        FrameTime {
            dt: 0.016,
            elapsed,
            now: Instant::now(),
            frame_index: 0,
        }
    }

    #[test]
    fn escape_requests_exit() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        press(&mut state, &mut frame, Key::Escape);
        assert!(wants_exit(&frame));
    }

    #[test]
    fn other_keys_do_not_exit() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        press(&mut state, &mut frame, Key::Q);
        press(&mut state, &mut frame, Key::Space);
        assert!(!wants_exit(&frame));
    }

    #[test]
    fn rotation_follows_elapsed_time_only_when_enabled() {
        assert_eq!(rotation_angle(false, &time_at(2.5)), 0.0);
        assert_eq!(rotation_angle(true, &time_at(2.5)), 2.5);
    }

    #[test]
    fn missing_image_fails_before_window_opens() {
        let config = ViewerConfig {
            image_path: std::env::temp_dir().join("quadview-no-such-image.png"),
            ..ViewerConfig::default()
        };
        let err = Viewer::new(&config).err().expect("load should fail");
        assert!(format!("{err:#}").contains("quadview-no-such-image.png"));
    }

    #[test]
    fn viewer_holds_image_until_first_frame() {
        let image = RgbaImage {
            width: 4,
            height: 2,
            pixels: vec![255; 32],
        };
        let viewer = Viewer::with_image(image, ColorRgba::black(), false);
        assert_eq!(viewer.renderer.image_size(), (4, 2));
        assert!(!viewer.renderer.is_uploaded());
    }
}
