//! Core geometry types for the grid engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tolerance for pixel comparisons; grid math mixes fractional offsets with
/// whole-cell multiples.
pub const EPSILON: f64 = 1e-6;

/// A 2D point in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle in pixel space (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn with_position(self, position: Point) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    pub fn with_size(self, size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self
        }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Strict intersection: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.x + EPSILON < other.right()
            && other.x + EPSILON < self.right()
            && self.y + EPSILON < other.bottom()
            && other.y + EPSILON < self.bottom()
    }

    /// Area shared with another rectangle (zero when disjoint)
    pub fn intersection_area(&self, other: &PixelRect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }
}

/// A rectangle in integer grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridRect {
    pub col: i32,
    pub row: i32,
    pub w: i32,
    pub h: i32,
}

impl GridRect {
    pub fn new(col: i32, row: i32, w: i32, h: i32) -> Self {
        Self { col, row, w, h }
    }

    pub fn right(&self) -> i32 {
        self.col + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.row + self.h
    }

    pub fn intersects(&self, other: &GridRect) -> bool {
        self.col < other.right()
            && other.col < self.right()
            && self.row < other.bottom()
            && other.row < self.bottom()
    }

    /// Same footprint, regardless of position
    pub fn same_size(&self, other: &GridRect) -> bool {
        self.w == other.w && self.h == other.h
    }
}

/// Translation that centers the usable grid inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CenterOffset {
    pub x: f64,
    pub y: f64,
}

impl CenterOffset {
    pub const ZERO: CenterOffset = CenterOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle inside which widgets must stay for a layout variant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UsableAreaBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl UsableAreaBounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    /// Zero width or zero height
    pub fn is_empty(&self) -> bool {
        self.width() <= EPSILON || self.height() <= EPSILON
    }

    /// Whether `rect` lies fully inside these bounds (edges inclusive)
    pub fn contains(&self, rect: &PixelRect) -> bool {
        rect.x >= self.min_x - EPSILON
            && rect.y >= self.min_y - EPSILON
            && rect.right() <= self.max_x + EPSILON
            && rect.bottom() <= self.max_y + EPSILON
    }
}

/// Current viewport (window) dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero or negative in either direction
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl FromStr for Viewport {
    type Err = String;

    /// Parse `WIDTHxHEIGHT`, e.g. `1920x1080`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = w
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid viewport width '{}': {}", w, e))?;
        let height = h
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid viewport height '{}': {}", h, e))?;
        Ok(Self::new(width, height))
    }
}

/// Grid-dimension configuration a page is laid out with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    Main,
    Mobile,
    Cv,
    GameDetail,
    GameDetailMobile,
    CvDetail,
    CvDetailMobile,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 7] = [
        LayoutVariant::Main,
        LayoutVariant::Mobile,
        LayoutVariant::Cv,
        LayoutVariant::GameDetail,
        LayoutVariant::GameDetailMobile,
        LayoutVariant::CvDetail,
        LayoutVariant::CvDetailMobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutVariant::Main => "main",
            LayoutVariant::Mobile => "mobile",
            LayoutVariant::Cv => "cv",
            LayoutVariant::GameDetail => "game-detail",
            LayoutVariant::GameDetailMobile => "game-detail-mobile",
            LayoutVariant::CvDetail => "cv-detail",
            LayoutVariant::CvDetailMobile => "cv-detail-mobile",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(
            self,
            LayoutVariant::Mobile | LayoutVariant::GameDetailMobile | LayoutVariant::CvDetailMobile
        )
    }

    /// The mobile counterpart of a desktop variant (and vice versa when `mobile` is false)
    pub fn for_form_factor(self, mobile: bool) -> Self {
        match (self, mobile) {
            (LayoutVariant::Main | LayoutVariant::Mobile, true) => LayoutVariant::Mobile,
            (LayoutVariant::Main | LayoutVariant::Mobile, false) => LayoutVariant::Main,
            (LayoutVariant::GameDetail | LayoutVariant::GameDetailMobile, true) => {
                LayoutVariant::GameDetailMobile
            }
            (LayoutVariant::GameDetail | LayoutVariant::GameDetailMobile, false) => {
                LayoutVariant::GameDetail
            }
            (LayoutVariant::CvDetail | LayoutVariant::CvDetailMobile, true) => {
                LayoutVariant::CvDetailMobile
            }
            (LayoutVariant::CvDetail | LayoutVariant::CvDetailMobile, false) => {
                LayoutVariant::CvDetail
            }
            (LayoutVariant::Cv, _) => LayoutVariant::Cv,
        }
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = LayoutVariant::ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown layout variant '{}' (valid: {})", s, valid.join(", "))
            })
    }
}
