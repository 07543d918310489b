use std::io::{self, Write};

use geom::Pt2D;

use crate::{Color, Renderer, Style};

/// The XML dialect read by `deck` clients.
#[derive(Clone, Copy, Debug)]
pub struct DeckMarkup;

impl Renderer for DeckMarkup {
    fn style(&self) -> Style {
        Style::Deck
    }

    fn begin_deck(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<deck>")
    }

    fn end_deck(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "</deck>")
    }

    fn begin_slide(&self, out: &mut dyn Write, bgcolor: &str) -> io::Result<()> {
        if bgcolor.is_empty() {
            writeln!(out, "<slide>")
        } else {
            writeln!(out, "<slide bg=\"{}\">", escape(bgcolor))
        }
    }

    fn end_slide(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "</slide>")
    }

    fn comment(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        // "--" can't appear inside an XML comment
        writeln!(out, "<!-- {} -->", text.replace("--", "- -"))
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
            "<line xp1=\"{:.3}\" yp1=\"{:.3}\" xp2=\"{:.3}\" yp2=\"{:.3}\" sp=\"{:.3}\" {}/>",
            from.x(),
            from.y(),
            to.x(),
            to.y(),
            width,
            attrs(color)
        )
    }

    fn polygon(&self, out: &mut dyn Write, pts: &[Pt2D], color: &Color) -> io::Result<()> {
        writeln!(
            out,
            "<polygon xc=\"{}\" yc=\"{}\" {}/>",
            join(pts.iter().map(|pt| pt.x())),
            join(pts.iter().map(|pt| pt.y())),
            attrs(color)
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
            "<ellipse xp=\"{:.3}\" yp=\"{:.3}\" wp=\"{:.3}\" hr=\"100\" {}/>",
            center.x(),
            center.y(),
            diameter,
            attrs(color)
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
        writeln!(
            out,
            "<text align=\"{}\" xp=\"{:.3}\" yp=\"{:.3}\" sp=\"{:.3}\" {}>{}</text>",
            escape(align),
            pos.x(),
            pos.y(),
            size,
            attrs(color),
            escape(label)
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
            "<rect xp=\"{:.3}\" yp=\"{:.3}\" wp=\"{:.3}\" hp=\"{:.3}\" {}/>",
            center.x(),
            center.y(),
            width,
            height,
            attrs(color)
        )
    }
}

fn attrs(color: &Color) -> String {
    format!(
        "color=\"{}\" opacity=\"{}\"",
        escape(&color.name),
        escape(&color.opacity)
    )
}

fn join<I: Iterator<Item = f64>>(values: I) -> String {
    values
        .map(|v| format!("{:.3}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture<F: Fn(&mut dyn Write) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_framing() {
        assert_eq!(
            "<deck>\n<slide bg=\"white\">\n",
            capture(|out| DeckMarkup.begin(out, "white"))
        );
        assert_eq!("<deck>\n<slide>\n", capture(|out| DeckMarkup.begin(out, "")));
        assert_eq!("</slide>\n</deck>\n", capture(|out| DeckMarkup.end(out)));
        assert_eq!(
            "<!-- data/a- -b.txt -->\n",
            capture(|out| DeckMarkup.comment(out, "data/a--b.txt"))
        );
    }

    #[test]
    fn test_primitives() {
        let red = Color::parse("red:50");
        assert_eq!(
            "<line xp1=\"1.000\" yp1=\"2.000\" xp2=\"3.500\" yp2=\"4.000\" sp=\"0.100\" color=\"red\" opacity=\"50\"/>\n",
            capture(|out| DeckMarkup.line(out, Pt2D::new(1.0, 2.0), Pt2D::new(3.5, 4.0), 0.1, &red))
        );
        assert_eq!(
            "<ellipse xp=\"1.000\" yp=\"2.000\" wp=\"0.250\" hr=\"100\" color=\"red\" opacity=\"50\"/>\n",
            capture(|out| DeckMarkup.dot(out, Pt2D::new(1.0, 2.0), 0.25, &red))
        );
        assert_eq!(
            "<text align=\"b\" xp=\"1.000\" yp=\"2.000\" sp=\"0.500\" color=\"red\" opacity=\"50\">A &amp; B</text>\n",
            capture(|out| DeckMarkup.text(out, Pt2D::new(1.0, 2.0), "A & B", "b", 0.5, &red))
        );
    }
}
