use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::{Bucket, Rgb8},
    error::{QuadlifeError, QuadlifeResult},
};

/// Five-tier fill palette, one color per [`Bucket`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// No contributions. Never lightened for strokes.
    pub empty: Rgb8,
    /// 1 to 4.
    pub low: Rgb8,
    /// 5 to 9.
    pub medium: Rgb8,
    /// 10 to 14.
    pub high: Rgb8,
    /// 15 and above.
    pub max: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Rgb8::new(0x16, 0x1b, 0x22),
            low: Rgb8::new(0x0d, 0x33, 0x44),
            medium: Rgb8::new(0x00, 0x46, 0x6e),
            high: Rgb8::new(0x25, 0x70, 0xa5),
            max: Rgb8::new(0x39, 0xd1, 0xd3),
        }
    }
}

impl Palette {
    pub fn for_bucket(&self, bucket: Bucket) -> Rgb8 {
        match bucket {
            Bucket::Dead => self.empty,
            Bucket::Low => self.low,
            Bucket::Medium => self.medium,
            Bucket::High => self.high,
            Bucket::Max => self.max,
        }
    }

    pub fn for_count(&self, count: u32) -> Rgb8 {
        self.for_bucket(Bucket::of(count))
    }
}

/// Layout, timing and styling of the rendered document. All lengths are SVG user units.
///
/// Every field has a default, so a JSON config only needs the fields it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub cell_size: f64,
    pub gap: f64,
    pub corner_radius: f64,
    pub stroke_width: f64,
    /// Stroke = fill lightened by this percentage (0..=100).
    pub border_lighten_percent: f64,

    pub top_margin: f64,
    pub left_margin: f64,
    pub right_padding: f64,
    pub bottom_margin: f64,

    /// Generation `i` starts transitioning at `i * step_secs`.
    pub step_secs: f64,
    /// Duration of each color transition.
    pub transition_secs: f64,

    pub palette: Palette,
    /// Optional full-canvas background; transparent when unset.
    pub background: Option<Rgb8>,

    pub font_family: String,
    pub font_size: f64,
    pub text_color: Rgb8,
    pub label_color: Rgb8,
    pub link_hover_color: Rgb8,

    /// Weekday labels, placed on rows 1, 3, 5, ...
    pub day_labels: Vec<String>,
    pub day_label_x: f64,
    /// Distance of month labels above the first row.
    pub month_label_offset: f64,

    pub legend_title: String,
    pub legend_href: String,
    pub legend_less: String,
    pub legend_more: String,
    /// Distance from the last grid row to the legend baseline.
    pub legend_offset: f64,
    pub legend_gap: f64,
    /// Space between the swatches and the right edge (before `right_padding`).
    pub legend_right_inset: f64,
    /// Room reserved for the "Less" label.
    pub legend_text_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: 9.0,
            gap: 3.0,
            corner_radius: 2.0,
            stroke_width: 0.8,
            border_lighten_percent: 5.0,
            top_margin: 30.0,
            left_margin: 50.0,
            right_padding: 10.0,
            bottom_margin: 50.0,
            step_secs: 0.4,
            transition_secs: 0.4,
            palette: Palette::default(),
            background: None,
            font_family: "Arial, sans-serif".to_owned(),
            font_size: 12.0,
            text_color: Rgb8::new(0x84, 0x8d, 0x97),
            label_color: Rgb8::new(0xc9, 0xd1, 0xd9),
            link_hover_color: Rgb8::new(0x44, 0x94, 0xf8),
            day_labels: vec!["Mon".to_owned(), "Wed".to_owned(), "Fri".to_owned()],
            day_label_x: 18.0,
            month_label_offset: 5.0,
            legend_title: "Quad Color Game of Life".to_owned(),
            legend_href: "https://conwaylife.com/wiki/Colourised_Life#Quadlife".to_owned(),
            legend_less: "Less".to_owned(),
            legend_more: "More".to_owned(),
            legend_offset: 20.0,
            legend_gap: 5.0,
            legend_right_inset: 60.0,
            legend_text_width: 25.0,
        }
    }
}

impl RenderConfig {
    /// Load a (possibly partial) JSON config.
    pub fn from_path(path: impl AsRef<Path>) -> QuadlifeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            QuadlifeError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> QuadlifeResult<()> {
        fn finite_at_least(name: &str, v: f64, min: f64) -> QuadlifeResult<()> {
            if !v.is_finite() || v < min {
                return Err(QuadlifeError::validation(format!(
                    "{name} must be finite and >= {min} (got {v})"
                )));
            }
            Ok(())
        }

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(QuadlifeError::validation("cell_size must be > 0"));
        }
        if !self.transition_secs.is_finite() || self.transition_secs <= 0.0 {
            return Err(QuadlifeError::validation("transition_secs must be > 0"));
        }
        finite_at_least("gap", self.gap, 0.0)?;
        finite_at_least("corner_radius", self.corner_radius, 0.0)?;
        finite_at_least("stroke_width", self.stroke_width, 0.0)?;
        finite_at_least("step_secs", self.step_secs, 0.0)?;
        finite_at_least("font_size", self.font_size, 0.0)?;
        finite_at_least("legend_gap", self.legend_gap, 0.0)?;
        for (name, v) in [
            ("top_margin", self.top_margin),
            ("left_margin", self.left_margin),
            ("right_padding", self.right_padding),
            ("bottom_margin", self.bottom_margin),
        ] {
            finite_at_least(name, v, 0.0)?;
        }
        if self.stroke_width >= self.cell_size {
            return Err(QuadlifeError::validation(
                "stroke_width must be smaller than cell_size",
            ));
        }
        if !(0.0..=100.0).contains(&self.border_lighten_percent) {
            return Err(QuadlifeError::validation(
                "border_lighten_percent must be within 0..=100",
            ));
        }
        Ok(())
    }

    /// Stroke color paired with `fill`. The empty-tier color is returned unchanged.
    pub fn stroke_for(&self, fill: Rgb8) -> Rgb8 {
        if fill == self.palette.empty {
            return fill;
        }
        fill.lighten(self.border_lighten_percent)
    }

    /// Distance between the origins of adjacent cells.
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.gap
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/config.rs"]
mod tests;
