use anyhow::Context;

use crate::foundation::error::{QuadlifeError, QuadlifeResult};

/// Straight (non-premultiplied) RGBA8 image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

// Avoid pathological allocations from a hostile config or scale.
const MAX_DIM: u32 = 16_384;

/// Rasterize an SVG document at `scale` (1.0 = one pixel per user unit).
///
/// Animations are ignored; this is meant for documents from
/// [`crate::render_snapshot_svg`].
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str, scale: f32) -> QuadlifeResult<Frame> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(QuadlifeError::validation("raster scale must be > 0"));
    }

    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    fn to_px(v: f32) -> QuadlifeResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(QuadlifeError::render("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let width = to_px(size.width() * scale)?;
    let height = to_px(size.height() * scale)?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(QuadlifeError::render(format!(
            "svg raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| QuadlifeError::render("failed to allocate svg pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = pixmap.take();
    unpremultiply_rgba8_in_place(&mut data);
    tracing::debug!(width, height, "svg rasterized");
    Ok(Frame {
        width,
        height,
        data,
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
