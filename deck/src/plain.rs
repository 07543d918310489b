use std::io::{self, Write};

use geom::{Bounds, Pt2D};

use crate::{dump_coords, Color, Renderer, ShapeSpec, Style};

/// Just the coordinates, as tab-separated pairs. There's no document structure, so framing, text,
/// and boxes produce nothing.
#[derive(Clone, Copy, Debug)]
pub struct Plain;

impl Renderer for Plain {
    fn style(&self) -> Style {
        Style::Plain
    }

    fn begin_deck(&self, _: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn end_deck(&self, _: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn begin_slide(&self, _: &mut dyn Write, _: &str) -> io::Result<()> {
        Ok(())
    }

    fn end_slide(&self, _: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn comment(&self, _: &mut dyn Write, _: &str) -> io::Result<()> {
        Ok(())
    }

    fn line(&self, _: &mut dyn Write, _: Pt2D, _: Pt2D, _: f64, _: &Color) -> io::Result<()> {
        Ok(())
    }

    fn polygon(&self, _: &mut dyn Write, _: &[Pt2D], _: &Color) -> io::Result<()> {
        Ok(())
    }

    fn dot(&self, _: &mut dyn Write, _: Pt2D, _: f64, _: &Color) -> io::Result<()> {
        Ok(())
    }

    fn text(
        &self,
        _: &mut dyn Write,
        _: Pt2D,
        _: &str,
        _: &str,
        _: f64,
        _: &Color,
    ) -> io::Result<()> {
        Ok(())
    }

    fn rect(&self, _: &mut dyn Write, _: Pt2D, _: f64, _: f64, _: &Color) -> io::Result<()> {
        Ok(())
    }

    // Every shape kind dumps the same way, with no clipping.
    fn shape(
        &self,
        out: &mut dyn Write,
        _: &ShapeSpec,
        pts: &[Pt2D],
        _: &Bounds,
    ) -> io::Result<()> {
        dump_coords(out, pts)
    }
}
