use std::str::FromStr;

use crate::error::Error;

/// An RGBA color with straight alpha, components in `[0, 1]`.
///
/// The host framework owns theming; this record only carries the stroke
/// color through the renderer seam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Neutral gray used by the default grid style.
    pub const GRAY: Self = Self::from_rgb(0.75, 0.75, 0.75);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Line styling options for strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    /// Solid continuous line.
    Solid,
    /// Dotted line with configurable spacing.
    Dotted { spacing: f32 },
    /// Dashed line with configurable dash length.
    Dashed { length: f32 },
}

/// A resolved stroke handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub line_style: LineStyle,
    /// Width in logical pixels.
    pub width: f32,
    /// Opacity multiplier applied on top of the color's alpha.
    pub alpha: f32,
}

/// Style record for one grid tick level (major or minor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub visible: bool,
    pub color: Color,
    pub line_style: LineStyle,
    pub width: f32,
    pub alpha: f32,
}

impl Default for GridStyle {
    /// Present but invisible: a neutral gray dotted hairline.
    fn default() -> Self {
        Self {
            visible: false,
            color: Color::GRAY,
            line_style: LineStyle::Dotted { spacing: 2.0 },
            width: 0.5,
            alpha: 1.0,
        }
    }
}

impl GridStyle {
    pub(crate) fn stroke(&self) -> Stroke {
        Stroke {
            color: self.color,
            line_style: self.line_style,
            width: self.width,
            alpha: self.alpha,
        }
    }

    pub(crate) fn merge(&mut self, update: &StyleUpdate) {
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(line_style) = update.line_style {
            self.line_style = line_style;
        }
        if let Some(width) = update.width {
            self.width = width;
        }
        if let Some(alpha) = update.alpha {
            self.alpha = alpha;
        }
    }
}

/// Partial style override merged into a [`GridStyle`] by `grid(...)` calls.
///
/// Unset fields leave the current style untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleUpdate {
    pub color: Option<Color>,
    pub line_style: Option<LineStyle>,
    pub width: Option<f32>,
    pub alpha: Option<f32>,
}

impl StyleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

/// Tick-level selector for grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLevel {
    Major,
    Minor,
    Both,
}

impl GridLevel {
    pub(crate) fn includes_major(self) -> bool {
        matches!(self, Self::Major | Self::Both)
    }

    pub(crate) fn includes_minor(self) -> bool {
        matches!(self, Self::Minor | Self::Both)
    }
}

impl FromStr for GridLevel {
    type Err = Error;

    /// Parse a `which` selector. Anything outside the three supported
    /// spellings is a programming error and fails fast.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "both" => Ok(Self::Both),
            other => Err(Error::InvalidGridSelector(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parsing() {
        assert_eq!("major".parse::<GridLevel>(), Ok(GridLevel::Major));
        assert_eq!("minor".parse::<GridLevel>(), Ok(GridLevel::Minor));
        assert_eq!("both".parse::<GridLevel>(), Ok(GridLevel::Both));
        assert_eq!(
            "diagonal".parse::<GridLevel>(),
            Err(Error::InvalidGridSelector("diagonal".to_string()))
        );
    }

    #[test]
    fn both_includes_each_level() {
        assert!(GridLevel::Both.includes_major());
        assert!(GridLevel::Both.includes_minor());
        assert!(!GridLevel::Major.includes_minor());
        assert!(!GridLevel::Minor.includes_major());
    }

    #[test]
    fn merge_only_touches_set_fields() {
        let mut style = GridStyle::default();
        style.merge(&StyleUpdate::new().with_color(Color::BLACK).with_width(1.5));
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.width, 1.5);
        // Untouched fields keep their defaults.
        assert_eq!(style.line_style, LineStyle::Dotted { spacing: 2.0 });
        assert_eq!(style.alpha, 1.0);
        assert!(!style.visible);
    }
}
