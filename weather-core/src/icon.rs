//! Maps provider icon ids to display glyphs.
//!
//! OpenWeather icon ids are a two-digit group code followed by a day/night
//! letter (`01d`, `10n`, ...). Only the group code matters here.

use console::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Sun,
    Cloud,
    CloudRain,
}

impl Shape {
    pub fn symbol(&self) -> &'static str {
        match self {
            Shape::Sun => "☀",
            Shape::Cloud => "☁",
            Shape::CloudRain => "🌧",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    Yellow,
    LightGray,
    Gray,
    Blue,
    Red,
    White,
    Muted,
}

impl Tint {
    pub fn style(&self) -> Style {
        let style = Style::new();
        match self {
            Tint::Yellow => style.yellow(),
            Tint::LightGray => style.color256(250),
            Tint::Gray => style.color256(244),
            Tint::Blue => style.blue(),
            Tint::Red => style.red(),
            Tint::White => style.white().bold(),
            Tint::Muted => style.dim(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub shape: Shape,
    pub tint: Tint,
}

impl Glyph {
    const fn new(shape: Shape, tint: Tint) -> Self {
        Self { shape, tint }
    }

    /// The shape's symbol, coloured by tint when `colors` is set.
    pub fn paint(&self, colors: bool) -> String {
        self.tint
            .style()
            .force_styling(colors)
            .apply_to(self.shape.symbol())
            .to_string()
    }
}

/// Glyph for an icon id. Total: ids with an unknown or missing group code get
/// a muted sun.
pub fn glyph_for_icon(icon: &str) -> Glyph {
    let mut chars = icon.chars();
    let group = match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => [a, b],
        _ => return Glyph::new(Shape::Sun, Tint::Muted),
    };

    match group {
        ['0', '1'] => Glyph::new(Shape::Sun, Tint::Yellow),
        ['0', '2'] => Glyph::new(Shape::Cloud, Tint::LightGray),
        ['0', '3'] | ['0', '4'] => Glyph::new(Shape::Cloud, Tint::Gray),
        ['0', '9'] | ['1', '0'] => Glyph::new(Shape::CloudRain, Tint::Blue),
        ['1', '1'] => Glyph::new(Shape::CloudRain, Tint::Red),
        ['1', '3'] => Glyph::new(Shape::Cloud, Tint::White),
        ['5', '0'] => Glyph::new(Shape::Cloud, Tint::LightGray),
        _ => Glyph::new(Shape::Sun, Tint::Muted),
    }
}
