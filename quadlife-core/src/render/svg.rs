//! SVG document writer.
//!
//! The animated document carries one `<rect>` per grid position. Each rect holds a fill and a
//! stroke `<animate>` per generation, scheduled at `generation_index * step_secs` with
//! `fill="freeze"`, so the browser replays the whole sequence on load without scripting.

use std::fmt::{self, Write as _};

use chrono::Datelike;

use crate::{
    calendar::grid::Grid,
    foundation::{
        core::{Bucket, Rgb8},
        error::{QuadlifeError, QuadlifeResult},
    },
    render::config::RenderConfig,
};

/// Geometry derived from grid extents and a config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub columns: usize,
    pub rows: usize,
    pub width: f64,
    pub height: f64,
    pitch: f64,
    top: f64,
    left: f64,
}

impl Layout {
    pub fn new(columns: usize, rows: usize, cfg: &RenderConfig) -> Self {
        let pitch = cfg.pitch();
        Self {
            columns,
            rows,
            width: columns as f64 * pitch + cfg.left_margin + cfg.right_padding,
            height: rows as f64 * pitch + cfg.top_margin + cfg.bottom_margin,
            pitch,
            top: cfg.top_margin,
            left: cfg.left_margin,
        }
    }

    pub fn cell_x(&self, col: usize) -> f64 {
        col as f64 * self.pitch + self.left
    }

    pub fn cell_y(&self, row: usize) -> f64 {
        row as f64 * self.pitch + self.top
    }
}

enum Paint<'a> {
    Animated(&'a [Grid]),
    Static,
}

/// Render the animated document for a generation sequence.
///
/// All generations must share the shape of the first one.
#[tracing::instrument(skip_all, fields(generations = generations.len()))]
pub fn render_svg(generations: &[Grid], cfg: &RenderConfig) -> QuadlifeResult<String> {
    let first = generations
        .first()
        .ok_or_else(|| QuadlifeError::validation("cannot render an empty generation sequence"))?;
    if let Some(i) = generations.iter().position(|g| !g.same_shape(first)) {
        return Err(QuadlifeError::validation(format!(
            "generation {i} does not match the shape of generation 0"
        )));
    }
    cfg.validate()?;
    write_document(first, Paint::Animated(generations), cfg)
}

/// Render one generation as a static document (no animation), e.g. for previews.
#[tracing::instrument(skip_all, fields(columns = grid.column_count()))]
pub fn render_snapshot_svg(grid: &Grid, cfg: &RenderConfig) -> QuadlifeResult<String> {
    cfg.validate()?;
    write_document(grid, Paint::Static, cfg)
}

fn write_document(shape: &Grid, paint: Paint<'_>, cfg: &RenderConfig) -> QuadlifeResult<String> {
    let layout = Layout::new(shape.column_count(), shape.row_count(), cfg);
    let mut body = String::new();
    write_body(&mut body, shape, &paint, &layout, cfg)
        .map_err(|e| QuadlifeError::render(format!("format svg: {e}")))?;

    let doc = format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">{body}</svg>"#,
        num(layout.width),
        num(layout.height),
    );
    tracing::debug!(
        bytes = doc.len(),
        width = layout.width,
        height = layout.height,
        "svg document written"
    );
    Ok(doc)
}

fn write_body(
    out: &mut String,
    shape: &Grid,
    paint: &Paint<'_>,
    layout: &Layout,
    cfg: &RenderConfig,
) -> fmt::Result {
    write_style(out, cfg)?;
    if let Some(bg) = cfg.background {
        write!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{bg}" />"#,
            num(layout.width),
            num(layout.height)
        )?;
    }
    write_day_labels(out, cfg)?;
    write_legend(out, layout, cfg)?;
    write_month_labels(out, shape, layout, cfg)?;
    write_cells(out, shape, paint, layout, cfg)
}

fn write_style(out: &mut String, cfg: &RenderConfig) -> fmt::Result {
    let font = escape(&cfg.font_family);
    let size = num(cfg.font_size);
    write!(
        out,
        "<style>\
         text {{ font-family: {font}; fill: {text}; font-size: {size}px; }} \
         .day-cell {{ stroke-width: {stroke}; }} \
         .day-label {{ font-family: {font}; fill: {label}; font-size: {size}px; text-anchor: start; }} \
         .month-label {{ font-family: {font}; fill: {label}; font-size: {size}px; }} \
         a:hover text {{ fill: {hover}; }}\
         </style>",
        text = cfg.text_color,
        stroke = num(cfg.stroke_width),
        label = cfg.label_color,
        hover = cfg.link_hover_color,
    )
}

fn write_day_labels(out: &mut String, cfg: &RenderConfig) -> fmt::Result {
    for (i, label) in cfg.day_labels.iter().enumerate() {
        let y = cfg.top_margin + cfg.pitch() * (1 + i * 2) as f64 + cfg.cell_size / 1.25;
        write!(
            out,
            r#"<text x="{}" y="{}" class="day-label">{}</text>"#,
            num(cfg.day_label_x),
            num(y),
            escape(label)
        )?;
    }
    Ok(())
}

fn write_legend(out: &mut String, layout: &Layout, cfg: &RenderConfig) -> fmt::Result {
    let legend_y = layout.rows as f64 * cfg.pitch() + cfg.top_margin + cfg.legend_offset;
    let swatches = Bucket::ALL.len() as f64;
    let total = swatches * cfg.cell_size + (swatches - 1.0) * cfg.legend_gap;
    let start_x = layout.width - total - cfg.legend_right_inset - cfg.right_padding;

    write!(
        out,
        r#"<a href="{}"><text x="{}" y="{}" class="legend-label">{}</text></a>"#,
        escape(&cfg.legend_href),
        num(cfg.left_margin),
        num(legend_y),
        escape(&cfg.legend_title)
    )?;
    write!(
        out,
        r#"<text x="{}" y="{}" class="legend-label">{}</text>"#,
        num(start_x - cfg.legend_gap - cfg.legend_text_width),
        num(legend_y),
        escape(&cfg.legend_less)
    )?;
    for (i, bucket) in Bucket::ALL.iter().enumerate() {
        let x = start_x + i as f64 * (cfg.cell_size + cfg.legend_gap);
        let fill = cfg.palette.for_bucket(*bucket);
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{size}" height="{size}" fill="{fill}" stroke="{}" stroke-width="{}" rx="{r}" ry="{r}"></rect>"#,
            num(x),
            num(legend_y - cfg.cell_size),
            cfg.stroke_for(fill),
            num(cfg.stroke_width),
            size = num(cfg.cell_size),
            r = num(cfg.corner_radius),
        )?;
    }
    write!(
        out,
        r#"<text x="{}" y="{}" class="legend-label">{}</text>"#,
        num(start_x + total + cfg.legend_gap),
        num(legend_y),
        escape(&cfg.legend_more)
    )
}

/// Month names, emitted where a column's first day falls in a different month than the last
/// label. Columns without a first-row cell are skipped.
pub fn month_labels(grid: &Grid) -> Vec<(usize, String)> {
    let mut last = None;
    let mut labels = Vec::new();
    for (col, column) in grid.columns().iter().enumerate() {
        let Some(first) = column.first() else {
            continue;
        };
        let month = first.date.month0();
        if last != Some(month) {
            labels.push((col, first.date.format("%b").to_string()));
            last = Some(month);
        }
    }
    labels
}

fn write_month_labels(
    out: &mut String,
    grid: &Grid,
    layout: &Layout,
    cfg: &RenderConfig,
) -> fmt::Result {
    let y = cfg.top_margin - cfg.month_label_offset;
    for (col, name) in month_labels(grid) {
        write!(
            out,
            r#"<text x="{}" y="{}" class="month-label">{}</text>"#,
            num(layout.cell_x(col)),
            num(y),
            escape(&name)
        )?;
    }
    Ok(())
}

fn write_cells(
    out: &mut String,
    shape: &Grid,
    paint: &Paint<'_>,
    layout: &Layout,
    cfg: &RenderConfig,
) -> fmt::Result {
    let side = num(cfg.cell_size - cfg.stroke_width);
    let stroke_width = num(cfg.stroke_width);
    let r = num(cfg.corner_radius);
    let dur = secs(cfg.transition_secs);

    // Week by week, then day by day within a week.
    for col in 0..layout.columns {
        for row in 0..layout.rows {
            let Some(cell) = shape.get(col, row) else {
                continue;
            };
            let x = num(layout.cell_x(col));
            let y = num(layout.cell_y(row));
            match paint {
                Paint::Static => {
                    let fill = cfg.palette.for_count(cell.contribution_count);
                    write!(
                        out,
                        r#"<rect x="{x}" y="{y}" width="{side}" height="{side}" fill="{fill}" stroke="{}" stroke-width="{stroke_width}" rx="{r}" ry="{r}" class="day-cell"></rect>"#,
                        cfg.stroke_for(fill)
                    )?;
                }
                Paint::Animated(generations) => {
                    write!(
                        out,
                        r#"<rect x="{x}" y="{y}" width="{side}" height="{side}" stroke-width="{stroke_width}" rx="{r}" ry="{r}" class="day-cell">"#
                    )?;
                    for (i, grid) in generations.iter().enumerate() {
                        let Some(c) = grid.get(col, row) else {
                            continue;
                        };
                        let fill = cfg.palette.for_count(c.contribution_count);
                        let begin = secs(i as f64 * cfg.step_secs);
                        write_animate(out, "fill", &begin, &dur, fill)?;
                        write_animate(out, "stroke", &begin, &dur, cfg.stroke_for(fill))?;
                    }
                    out.push_str("</rect>");
                }
            }
        }
    }
    Ok(())
}

fn write_animate(out: &mut String, attr: &str, begin: &str, dur: &str, to: Rgb8) -> fmt::Result {
    write!(
        out,
        r#"<animate attributeName="{attr}" begin="{begin}" dur="{dur}" fill="freeze" to="{to}" />"#
    )
}

/// Format a length with at most three decimals and no trailing zeros.
pub(crate) fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let s = format!("{rounded:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}

fn secs(v: f64) -> String {
    format!("{}s", num(v))
}

/// Escape text and attribute content.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
