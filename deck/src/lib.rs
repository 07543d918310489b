//! Emits slide markup for shapes that've already been mapped onto the canvas. There are three
//! dialects: `deck` XML markup, the `decksh` scripting language, and a plain coordinate dump. Pick
//! one `Renderer` per run with `Style::renderer` and thread an output sink through every call.

use std::io::{self, Write};
use std::str::FromStr;

use geom::Pt2D;

pub use crate::decksh::Decksh;
pub use crate::markup::DeckMarkup;
pub use crate::plain::Plain;
pub use crate::renderer::Renderer;

mod decksh;
mod markup;
mod plain;
mod renderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Deck,
    Decksh,
    Plain,
}

impl Style {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Style::Deck => Box::new(DeckMarkup),
            Style::Decksh => Box::new(Decksh),
            Style::Plain => Box::new(Plain),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(x: &str) -> Result<Self, Self::Err> {
        match x {
            "deck" => Ok(Style::Deck),
            "decksh" => Ok(Style::Decksh),
            "plain" | "dump" => Ok(Style::Plain),
            _ => Err(format!("unknown style {}; use deck, decksh, or plain", x)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Closed: the last point connects back to the first
    Polyline,
    Polygon,
    Dot,
}

impl Shape {
    /// Returns `None` for names that don't match any shape; callers draw nothing in that case.
    pub fn parse(x: &str) -> Option<Shape> {
        match x {
            "polyline" | "line" => Some(Shape::Polyline),
            "polygon" | "fill" => Some(Shape::Polygon),
            "circle" | "dot" => Some(Shape::Dot),
            _ => None,
        }
    }
}

/// A color name plus opacity, written on the command line as "name" or "name:opacity".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub name: String,
    pub opacity: String,
}

impl Color {
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, opacity: S2) -> Color {
        Color {
            name: name.into(),
            opacity: opacity.into(),
        }
    }

    /// Opacity defaults to 100.
    pub fn parse(raw: &str) -> Color {
        Color::with_default_opacity(raw, "100")
    }

    /// Splits on the first colon. Anything after it is the opacity, taken verbatim.
    pub fn with_default_opacity(raw: &str, opacity: &str) -> Color {
        match raw.split_once(':') {
            Some((name, opacity)) => Color::new(name, opacity),
            None => Color::new(raw, opacity),
        }
    }
}

/// What to draw for one set of points.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSpec {
    pub shape: Shape,
    /// Line width for polylines, diameter for dots. Polygons ignore this.
    pub size: f64,
    pub color: Color,
}

/// How to label named points.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    /// "b", "c", or "e": begin, center, or end alignment
    pub align: String,
    pub size: f64,
    pub color: Color,
}

/// Writes one tab-separated pair per line, with no shape semantics.
pub fn dump_coords(out: &mut dyn Write, pts: &[Pt2D]) -> io::Result<()> {
    for pt in pts {
        writeln!(out, "{}\t{}", pt.x(), pt.y())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style() {
        assert_eq!(Ok(Style::Deck), "deck".parse());
        assert_eq!(Ok(Style::Decksh), "decksh".parse());
        assert_eq!(Ok(Style::Plain), "plain".parse());
        assert_eq!(Ok(Style::Plain), "dump".parse());
        assert!("svg".parse::<Style>().is_err());
        assert_eq!(Style::Decksh, Style::Decksh.renderer().style());
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!(Some(Shape::Polyline), Shape::parse("line"));
        assert_eq!(Some(Shape::Polygon), Shape::parse("fill"));
        assert_eq!(Some(Shape::Dot), Shape::parse("circle"));
        assert_eq!(None, Shape::parse("hexagon"));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(Color::new("red", "50"), Color::parse("red:50"));
        assert_eq!(Color::new("red", "100"), Color::parse("red"));
        assert_eq!(
            Color::new("rgb(1,2,3)", "20:30"),
            Color::parse("rgb(1,2,3):20:30")
        );
        assert_eq!(
            Color::new("blue", "10"),
            Color::with_default_opacity("blue", "10")
        );
    }

    #[test]
    fn test_dump_coords() {
        let mut out = Vec::new();
        dump_coords(&mut out, &[Pt2D::new(-74.5, 40.0), Pt2D::new(1.0, 2.25)]).unwrap();
        assert_eq!("-74.5\t40\n1\t2.25\n", String::from_utf8(out).unwrap());
    }
}
