use std::io::{self, Write};

use geom::{Bounds, Geometry, Pt2D};

use crate::{Color, Shape, ShapeSpec, Style, TextSpec};

/// One output dialect. Implementors only spell out the primitives; deciding which primitives to
/// draw (clipping, vertex-count checks, framing) lives in the provided methods so every dialect
/// agrees.
pub trait Renderer: std::fmt::Debug {
    fn style(&self) -> Style;

    fn begin_deck(&self, out: &mut dyn Write) -> io::Result<()>;
    fn end_deck(&self, out: &mut dyn Write) -> io::Result<()>;
    /// An empty `bgcolor` leaves the background unset.
    fn begin_slide(&self, out: &mut dyn Write, bgcolor: &str) -> io::Result<()>;
    fn end_slide(&self, out: &mut dyn Write) -> io::Result<()>;
    fn comment(&self, out: &mut dyn Write, text: &str) -> io::Result<()>;

    fn line(
        &self,
        out: &mut dyn Write,
        from: Pt2D,
        to: Pt2D,
        width: f64,
        color: &Color,
    ) -> io::Result<()>;
    fn polygon(&self, out: &mut dyn Write, pts: &[Pt2D], color: &Color) -> io::Result<()>;
    fn dot(&self, out: &mut dyn Write, center: Pt2D, diameter: f64, color: &Color)
        -> io::Result<()>;
    fn text(
        &self,
        out: &mut dyn Write,
        pos: Pt2D,
        label: &str,
        align: &str,
        size: f64,
        color: &Color,
    ) -> io::Result<()>;
    fn rect(
        &self,
        out: &mut dyn Write,
        center: Pt2D,
        width: f64,
        height: f64,
        color: &Color,
    ) -> io::Result<()>;

    /// Opens a document and its only slide.
    fn begin(&self, out: &mut dyn Write, bgcolor: &str) -> io::Result<()> {
        self.begin_deck(out)?;
        self.begin_slide(out, bgcolor)
    }

    fn end(&self, out: &mut dyn Write) -> io::Result<()> {
        self.end_slide(out)?;
        self.end_deck(out)
    }

    /// Draws points that are already in canvas space.
    ///
    /// - Polylines get one segment per consecutive pair plus a closing segment from the last
    ///   point to the first. A segment with either end outside `canvas` is dropped entirely.
    ///   Fewer than 2 points draws nothing.
    /// - Polygons need at least 3 points and aren't clipped.
    /// - Dots are drawn for every point, without clipping.
    fn shape(
        &self,
        out: &mut dyn Write,
        spec: &ShapeSpec,
        pts: &[Pt2D],
        canvas: &Bounds,
    ) -> io::Result<()> {
        match spec.shape {
            Shape::Polyline => {
                if pts.len() < 2 {
                    return Ok(());
                }
                let closing = (pts[pts.len() - 1], pts[0]);
                let segments = pts
                    .windows(2)
                    .map(|pair| (pair[0], pair[1]))
                    .chain(std::iter::once(closing));
                for (from, to) in segments {
                    if canvas.contains(from) && canvas.contains(to) {
                        self.line(out, from, to, spec.size, &spec.color)?;
                    }
                }
                Ok(())
            }
            Shape::Polygon => {
                if pts.len() < 3 {
                    return Ok(());
                }
                self.polygon(out, pts, &spec.color)
            }
            Shape::Dot => {
                for pt in pts {
                    self.dot(out, *pt, spec.size, &spec.color)?;
                }
                Ok(())
            }
        }
    }

    /// Labels every point that has a name. `names` lines up with `pts`; extra entries on either
    /// side are ignored.
    fn labels(
        &self,
        out: &mut dyn Write,
        pts: &[Pt2D],
        names: &[Option<String>],
        spec: &TextSpec,
    ) -> io::Result<()> {
        for (pt, name) in pts.iter().zip(names) {
            if let Some(name) = name {
                self.text(out, *pt, name, &spec.align, spec.size, &spec.color)?;
            }
        }
        Ok(())
    }

    /// Labels each canvas corner with its geographic coordinate, then shades the whole canvas
    /// box. Unless `color` carries its own opacity, the shading is faint.
    fn bounding_box(&self, out: &mut dyn Write, geom: &Geometry, color: &str) -> io::Result<()> {
        let label_color = Color::new("black", "100");
        for (corner, gps) in geom
            .canvas
            .get_corners()
            .into_iter()
            .zip(geom.gps.get_corners())
        {
            let label = format!("({:.2}, {:.2})", gps.longitude, gps.latitude);
            self.text(out, corner, &label, "c", 1.2, &label_color)?;
        }
        self.rect(
            out,
            geom.canvas.center(),
            geom.canvas.width(),
            geom.canvas.height(),
            &Color::with_default_opacity(color, "10"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeckMarkup;
    use geom::GPSBounds;

    fn canvas() -> Bounds {
        Bounds::new(5.0, 95.0, 5.0, 95.0)
    }

    fn render(spec: &ShapeSpec, pts: &[Pt2D]) -> Vec<String> {
        let mut out = Vec::new();
        DeckMarkup.shape(&mut out, spec, pts, &canvas()).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|x| x.to_string())
            .collect()
    }

    fn spec(shape: Shape) -> ShapeSpec {
        ShapeSpec {
            shape,
            size: 0.1,
            color: Color::parse("black"),
        }
    }

    #[test]
    fn test_polyline_closes() {
        let pts = vec![
            Pt2D::new(10.0, 10.0),
            Pt2D::new(20.0, 20.0),
            Pt2D::new(30.0, 30.0),
        ];
        let lines = render(&spec(Shape::Polyline), &pts);
        assert_eq!(3, lines.len());
        assert!(lines[2].starts_with(r#"<line xp1="30.000" yp1="30.000" xp2="10.000" yp2="10.000""#));
    }

    #[test]
    fn test_polyline_clips_whole_segments() {
        let pts = vec![
            Pt2D::new(10.0, 10.0),
            Pt2D::new(96.0, 20.0),
            Pt2D::new(30.0, 30.0),
        ];
        let lines = render(&spec(Shape::Polyline), &pts);
        assert_eq!(1, lines.len());
        assert!(lines[0].starts_with(r#"<line xp1="30.000" yp1="30.000" xp2="10.000""#));

        // y out of range counts too
        let pts = vec![Pt2D::new(10.0, 4.0), Pt2D::new(20.0, 20.0)];
        assert!(render(&spec(Shape::Polyline), &pts).is_empty());
    }

    #[test]
    fn test_polyline_needs_two_points() {
        assert!(render(&spec(Shape::Polyline), &[Pt2D::new(10.0, 10.0)]).is_empty());
        assert!(render(&spec(Shape::Polyline), &[]).is_empty());
        assert_eq!(
            2,
            render(
                &spec(Shape::Polyline),
                &[Pt2D::new(10.0, 10.0), Pt2D::new(20.0, 20.0)]
            )
            .len()
        );
    }

    #[test]
    fn test_polyline_drops_non_finite() {
        let pts = vec![
            Pt2D::new(10.0, 10.0),
            Pt2D::new(f64::NAN, 20.0),
            Pt2D::new(30.0, f64::INFINITY),
            Pt2D::new(40.0, 40.0),
        ];
        let lines = render(&spec(Shape::Polyline), &pts);
        // Only the closing segment from (40, 40) back to (10, 10) survives
        assert_eq!(1, lines.len());
    }

    #[test]
    fn test_polygon_vertex_count() {
        let two = vec![Pt2D::new(10.0, 15.0), Pt2D::new(20.0, 25.0)];
        assert!(render(&spec(Shape::Polygon), &two).is_empty());

        let three = vec![
            Pt2D::new(10.0, 15.0),
            Pt2D::new(20.0, 25.0),
            Pt2D::new(30.0, 35.0),
        ];
        assert_eq!(
            vec![r#"<polygon xc="10.000 20.000 30.000" yc="15.000 25.000 35.000" color="black" opacity="100"/>"#],
            render(&spec(Shape::Polygon), &three)
        );
    }

    #[test]
    fn test_polygon_and_dots_not_clipped() {
        let pts = vec![
            Pt2D::new(-10.0, 15.0),
            Pt2D::new(200.0, 25.0),
            Pt2D::new(30.0, f64::NAN),
        ];
        assert_eq!(1, render(&spec(Shape::Polygon), &pts).len());
        assert_eq!(3, render(&spec(Shape::Dot), &pts).len());
    }

    #[test]
    fn test_labels_only_named_points() {
        let pts = vec![
            Pt2D::new(10.0, 10.0),
            Pt2D::new(20.0, 20.0),
            Pt2D::new(30.0, 30.0),
        ];
        let names = vec![Some("NYC".to_string()), None, Some("DC".to_string())];
        let mut out = Vec::new();
        DeckMarkup
            .labels(
                &mut out,
                &pts,
                &names,
                &TextSpec {
                    align: "c".to_string(),
                    size: 0.5,
                    color: Color::parse("black"),
                },
            )
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(2, out.lines().count());
        assert!(out.contains(">NYC</text>"));
        assert!(out.contains(r#"xp="30.000" yp="30.000""#));
    }

    #[test]
    fn test_bounding_box() {
        let geom = Geometry::new(
            GPSBounds::continental_us(),
            Bounds::new(5.0, 95.0, 10.0, 80.0),
        );
        let mut out = Vec::new();
        DeckMarkup.bounding_box(&mut out, &geom, "red").unwrap();
        let lines: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();
        assert_eq!(5, lines.len());
        assert_eq!(
            r#"<text align="c" xp="5.000" yp="10.000" sp="1.200" color="black" opacity="100">(-125.00, 24.00)</text>"#,
            lines[0]
        );
        assert!(lines[2].ends_with(">(-67.00, 50.00)</text>"));
        assert_eq!(
            r#"<rect xp="50.000" yp="45.000" wp="90.000" hp="70.000" color="red" opacity="10"/>"#,
            lines[4]
        );
    }
}
