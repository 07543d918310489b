use std::io::{self, Write};

use geom::Pt2D;

use crate::{Color, Renderer, Style};

/// The `decksh` scripting dialect: one command per line, strings in double quotes.
#[derive(Clone, Copy, Debug)]
pub struct Decksh;

impl Renderer for Decksh {
    fn style(&self) -> Style {
        Style::Decksh
    }

    fn begin_deck(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "deck")
    }

    fn end_deck(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "edeck")
    }

    fn begin_slide(&self, out: &mut dyn Write, bgcolor: &str) -> io::Result<()> {
        if bgcolor.is_empty() {
            writeln!(out, "slide")
        } else {
            writeln!(out, "slide {}", quote(bgcolor))
        }
    }

    fn end_slide(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "eslide")
    }

    fn comment(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        writeln!(out, "// {}", text)
    }

    fn line(
        &self,
        out: &mut dyn Write,
        from: Pt2D,
        to: Pt2D,
        width: f64,
        color: &Color,
    ) -> io::Result<()> {
        writeln!(
            out,
            "line {:.3} {:.3} {:.3} {:.3} {:.3} {} {}",
            from.x(),
            from.y(),
            to.x(),
            to.y(),
            width,
            quote(&color.name),
            color.opacity
        )
    }

    fn polygon(&self, out: &mut dyn Write, pts: &[Pt2D], color: &Color) -> io::Result<()> {
        let xs: Vec<String> = pts.iter().map(|pt| format!("{:.3}", pt.x())).collect();
        let ys: Vec<String> = pts.iter().map(|pt| format!("{:.3}", pt.y())).collect();
        writeln!(
            out,
            "polygon \"{}\" \"{}\" {} {}",
            xs.join(" "),
            ys.join(" "),
            quote(&color.name),
            color.opacity
        )
    }

    fn dot(
        &self,
        out: &mut dyn Write,
        center: Pt2D,
        diameter: f64,
        color: &Color,
    ) -> io::Result<()> {
        writeln!(
            out,
            "circle {:.3} {:.3} {:.3} {} {}",
            center.x(),
            center.y(),
            diameter,
            quote(&color.name),
            color.opacity
        )
    }

    fn text(
        &self,
        out: &mut dyn Write,
        pos: Pt2D,
        label: &str,
        align: &str,
        size: f64,
        color: &Color,
    ) -> io::Result<()> {
        let cmd = match align {
            "c" => "ctext",
            "e" => "etext",
            _ => "text",
        };
        writeln!(
            out,
            "{} {} {:.3} {:.3} {:.3} \"sans\" {} {}",
            cmd,
            quote(label),
            pos.x(),
            pos.y(),
            size,
            quote(&color.name),
            color.opacity
        )
    }

    fn rect(
        &self,
        out: &mut dyn Write,
        center: Pt2D,
        width: f64,
        height: f64,
        color: &Color,
    ) -> io::Result<()> {
        writeln!(
            out,
            "rect {:.3} {:.3} {:.3} {:.3} {} {}",
            center.x(),
            center.y(),
            width,
            height,
            quote(&color.name),
            color.opacity
        )
    }
}

// decksh strings have no escapes, so swap embedded double quotes for single ones.
fn quote(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "'"))
}
