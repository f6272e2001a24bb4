// File: crates/chart-layout/src/text.rs
// Summary: Text measurement seam (fixed-advance default, Skia textlayout behind `skia`) and the title text element.

use std::fmt;
use std::rc::Rc;

use crate::element::{ElementBase, LeafContent};
use crate::geometry::{MaxSize, Size};
use crate::types::{MarginSides, Margins};

/// Measures a single-line string; returns (width, height) in pixels.
pub trait TextMetrics {
    fn measure(&self, text: &str, point_size: f32) -> (f32, f32);
}

/// Deterministic approximation: every glyph advances `advance * point_size`,
/// lines are `line_height * point_size` tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self { advance: 0.6, line_height: 1.2 }
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn measure(&self, text: &str, point_size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let size = point_size.max(1.0);
        let chars = text.chars().count() as f32;
        (chars * self.advance * size, self.line_height * size)
    }
}

/// Whole-pixel size of `text`, rounded up.
pub fn text_size(metrics: &dyn TextMetrics, text: &str, point_size: f32) -> Size {
    let (w, h) = metrics.measure(text, point_size);
    Size::new(w.ceil() as i32, h.ceil() as i32)
}

#[cfg(feature = "skia")]
pub use skia_metrics::SkiaTextMetrics;

#[cfg(feature = "skia")]
mod skia_metrics {
    use skia_safe as skia;
    use skia::textlayout::{FontCollection, ParagraphBuilder, ParagraphStyle, TextStyle};

    use super::TextMetrics;

    /// Paragraph-layout measurement with the system font manager.
    pub struct SkiaTextMetrics {
        fonts: FontCollection,
    }

    impl SkiaTextMetrics {
        pub fn new() -> Self {
            let mut fc = FontCollection::new();
            // Use system manager fallback
            fc.set_default_font_manager(skia::FontMgr::default(), None);
            Self { fonts: fc }
        }
    }

    impl Default for SkiaTextMetrics {
        fn default() -> Self { Self::new() }
    }

    impl TextMetrics for SkiaTextMetrics {
        fn measure(&self, text: &str, point_size: f32) -> (f32, f32) {
            let mut pstyle = ParagraphStyle::new();
            pstyle.set_text_align(skia::textlayout::TextAlign::Left);
            let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
            let mut style = TextStyle::new();
            style.set_font_size(point_size.max(1.0));
            style.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
            builder.push_style(&style);
            builder.add_text(text);
            let mut paragraph = builder.build();
            paragraph.layout(10_000.0);
            // width of the longest line
            (paragraph.longest_line(), paragraph.height())
        }
    }
}

/// Single-line text element, e.g. a plot title spanning a grid row.
///
/// Its minimum outer size is the text size plus margins; its height never
/// stretches beyond that, its width is unbounded.
#[derive(Clone)]
pub struct TextElement {
    pub text: String,
    pub point_size: f32,
    metrics: Rc<dyn TextMetrics>,
}

impl TextElement {
    pub fn new(text: impl Into<String>, point_size: f32, metrics: Rc<dyn TextMetrics>) -> Self {
        Self { text: text.into(), point_size, metrics }
    }

    pub fn text_size(&self) -> Size {
        text_size(self.metrics.as_ref(), &self.text, self.point_size)
    }
}

impl fmt::Debug for TextElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextElement")
            .field("text", &self.text)
            .field("point_size", &self.point_size)
            .finish_non_exhaustive()
    }
}

impl LeafContent for TextElement {
    fn init(&self, base: &mut ElementBase) {
        base.set_auto_margins(MarginSides::empty());
        base.set_margins(Margins::new(2, 2, 2, 2));
    }

    fn minimum_outer_size_hint(&self, base: &ElementBase) -> Size {
        let text = self.text_size();
        let margins = base.margins();
        Size::new(text.width + margins.hsum(), text.height + margins.vsum())
    }

    fn maximum_outer_size_hint(&self, base: &ElementBase) -> MaxSize {
        let min = self.minimum_outer_size_hint(base);
        MaxSize::new(None, Some(min.height))
    }
}
