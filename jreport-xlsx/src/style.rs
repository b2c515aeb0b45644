//! # Cell Styles
//!
//! A small, library-independent description of how a cell looks. Styles are
//! layered: every cell starts from [`CellStyle::base`], takes its role style
//! (header or data) on top, then any conditional style. A later layer only
//! overrides the attributes it sets.

/// 24-bit RGB colour, e.g. `Rgb(0xFFFF00)` for yellow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
  pub const YELLOW: Rgb = Rgb(0xFFFF00);
  pub const LIGHT_PINK: Rgb = Rgb(0xF8E5D5);
  pub const LIGHT_BLUE: Rgb = Rgb(0xDBEDF4);
  pub const LIGHT_GREEN: Rgb = Rgb(0xCCFFCE);
  pub const LIGHT_GRAY: Rgb = Rgb(0xD3D3D3);
}

impl std::fmt::Display for Rgb {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{:06X}", self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
  /// Thin line on all four sides
  Thin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
  Center,
}

/// Visual attributes of a cell; `None` means "inherit from the layer below"
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellStyle {
  pub font_name: Option<&'static str>,
  pub font_size: Option<f64>,
  pub bold: Option<bool>,
  /// Solid background fill
  pub fill: Option<Rgb>,
  pub border: Option<Border>,
  pub vertical_align: Option<VerticalAlign>,
}

impl CellStyle {
  pub const BASE_FONT: &'static str = "Calibri";
  pub const BASE_FONT_SIZE: f64 = 11.0;

  /// A layer that sets nothing
  pub const EMPTY: CellStyle = CellStyle {
    font_name: None,
    font_size: None,
    bold: None,
    fill: None,
    border: None,
    vertical_align: None,
  };

  /// Worksheet-wide fallback applied under every other layer
  pub const fn base() -> Self {
    Self {
      font_name: Some(Self::BASE_FONT),
      font_size: Some(Self::BASE_FONT_SIZE),
      bold: Some(false),
      ..Self::EMPTY
    }
  }

  /// Header cells: bold, bordered, vertically centred
  pub const fn header() -> Self {
    Self {
      bold: Some(true),
      border: Some(Border::Thin),
      vertical_align: Some(VerticalAlign::Center),
      ..Self::EMPTY
    }
  }

  /// Issue cells: bordered
  pub const fn data() -> Self {
    Self {
      border: Some(Border::Thin),
      ..Self::EMPTY
    }
  }

  /// A layer that only sets a solid fill
  pub const fn filled(color: Rgb) -> Self {
    Self {
      fill: Some(color),
      ..Self::EMPTY
    }
  }

  /// Layer `overlay` on top of `self`.
  pub fn merge(&self, overlay: &CellStyle) -> CellStyle {
    CellStyle {
      font_name: overlay.font_name.or(self.font_name),
      font_size: overlay.font_size.or(self.font_size),
      bold: overlay.bold.or(self.bold),
      fill: overlay.fill.or(self.fill),
      border: overlay.border.or(self.border),
      vertical_align: overlay.vertical_align.or(self.vertical_align),
    }
  }

  /// Merge a sequence of layers over the base style, in order.
  pub fn resolve<'a>(layers: impl IntoIterator<Item = &'a CellStyle>) -> CellStyle {
    layers
      .into_iter()
      .fold(CellStyle::base(), |acc, layer| acc.merge(layer))
  }
}
