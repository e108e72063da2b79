//! Text measurement backed by `cosmic-text`.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::canvas::TextMetrics;

/// Owns a reusable FontSystem, which is expensive to create.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn measure(&self, text: &str, font_family: &str, font_size: u16) -> TextMetrics {
        let font_size_px = f32::from(font_size);
        let line_height = font_size_px * 1.15;
        let fallback_ascent = font_size_px * 0.8;

        if text.is_empty() {
            return TextMetrics {
                width: 0,
                height: to_px(line_height),
                ascent: to_px(fallback_ascent),
            };
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let metrics = Metrics::new(font_size_px, line_height);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font_family));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        let mut ascent: Option<f32> = None;

        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                width = width.max(last.x + last.w);
            }
            ascent.get_or_insert(run.line_y - run.line_top);
            height += metrics.line_height;
        }

        // No usable fonts: approximate from the character count.
        if width <= 0.0 {
            width = text.chars().count() as f32 * (font_size_px * 0.55);
        }
        if height <= 0.0 {
            height = metrics.line_height;
        }

        TextMetrics {
            width: to_px(width),
            height: to_px(height),
            ascent: to_px(ascent.unwrap_or(fallback_ascent)),
        }
    }
}

fn to_px(value: f32) -> i32 {
    value.ceil() as i32
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

/// Measures a single line of text in the given font.
pub(crate) fn measure(text: &str, font_family: &str, font_size: u16) -> TextMetrics {
    TEXT_MANAGER
        .get_or_init(TextManager::new)
        .measure(text, font_family, font_size)
}
