// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;
use std::sync::Arc;

use resvg::usvg;
use scissors_core::style::{a, b, g, r};
use scissors_core::{Point, Rect, Surface};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::error::SurfaceError;

/// Raster page backed by a tiny-skia pixmap.
///
/// Text goes through resvg, so the font database is loaded once here and
/// shared by every label drawn on this surface.
pub struct PixmapSurface {
    pixmap: Pixmap,
    fonts: Arc<usvg::fontdb::Database>,
}

impl PixmapSurface {
    /// Surface with the system fonts loaded.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self::with_fonts(width, height, Arc::new(db))
    }

    pub fn with_fonts(
        width: u32,
        height: u32,
        fonts: Arc<usvg::fontdb::Database>,
    ) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;
        Ok(Self { pixmap, fonts })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, argb: u32) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(r(argb), g(argb), b(argb), a(argb)));
    }

    /// Straight (non-premultiplied) ARGB at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(
            ((c.alpha() as u32) << 24)
                | ((c.red() as u32) << 16)
                | ((c.green() as u32) << 8)
                | (c.blue() as u32),
        )
    }

    pub fn save_png(&self, path: &Path) -> Result<(), SurfaceError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| SurfaceError::Png(e.to_string()))
    }
}

fn paint_for(argb: u32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r(argb), g(argb), b(argb), a(argb));
    paint.anti_alias = false;
    paint
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Surface for PixmapSurface {
    fn fill_rect(&mut self, rect: Rect, argb: u32) {
        if rect.is_empty() {
            return;
        }
        let Some(area) =
            tiny_skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
        else {
            return;
        };
        self.pixmap
            .fill_rect(area, &paint_for(argb), Transform::identity(), None);
    }

    fn stroke_dashed_rect(&mut self, rect: Rect, argb: u32, width: f32, dash: f32) {
        if rect.is_empty() {
            return;
        }
        // Half-pixel offset keeps a 1px line on one row/column.
        let Some(outline) = tiny_skia::Rect::from_xywh(
            rect.x as f32 + 0.5,
            rect.y as f32 + 0.5,
            rect.w as f32,
            rect.h as f32,
        ) else {
            return;
        };
        let path = PathBuilder::from_rect(outline);

        let stroke = Stroke {
            width,
            dash: StrokeDash::new(vec![dash, dash], 0.0),
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint_for(argb), &stroke, Transform::identity(), None);
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: f32, argb: u32) {
        let svg = format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}"><text x="{x}" y="{y}" font-family="sans-serif" font-size="{size}" fill="#{rgb:06X}" fill-opacity="{alpha:.3}">{text}</text></svg>"##,
            w = self.pixmap.width(),
            h = self.pixmap.height(),
            x = origin.x,
            y = origin.y,
            rgb = argb & 0x00FF_FFFF,
            alpha = a(argb) as f32 / 255.0,
            text = escape_xml(text),
        );

        let opt = usvg::Options {
            fontdb: self.fonts.clone(),
            ..usvg::Options::default()
        };
        // Labels are best effort; an unparsable label just isn't drawn.
        let Ok(tree) = usvg::Tree::from_data(svg.as_bytes(), &opt) else {
            return;
        };
        resvg::render(&tree, Transform::identity(), &mut self.pixmap.as_mut());
    }
}
