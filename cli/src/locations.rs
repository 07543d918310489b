use std::io::{BufRead, BufReader, Write};

use anyhow::Result;
use structopt::StructOpt;

use deck::{Color, Renderer, Shape, ShapeSpec, Style, TextSpec};
use geom::{GPSBounds, Geometry};
use kml::{BadNumber, Locations};

use crate::args::GeometryArgs;

#[derive(StructOpt)]
pub struct Options {
    #[structopt(flatten)]
    pub geometry: GeometryArgs,
    /// Only report the center and bounding box of each input, as flags for a later run
    #[structopt(long)]
    pub info: bool,
    /// Fit the geographic window to the extent of each input, instead of using the geometry
    /// flags. On unless this is "false".
    #[structopt(long)]
    pub autobbox: Option<bool>,
    /// Line width for polylines, or diameter for dots
    #[structopt(long, default_value = "0.25")]
    pub shapesize: f64,
    /// Shape color, optionally with an opacity like "red:50"
    #[structopt(long, default_value = "black")]
    pub color: String,
    /// Draw a labeled bounding box in this color
    #[structopt(long)]
    pub bbox: Option<String>,
    /// polygon (fill), polyline (line), or circle (dot)
    #[structopt(long, default_value = "polyline")]
    pub shape: String,
    /// deck, decksh, or plain. Anything else is rejected when parsing flags, unlike an unknown
    /// shape, which just draws nothing.
    #[structopt(long, default_value = "decksh")]
    pub style: Style,
    /// Label named points, using this alignment (b, c, or e)
    #[structopt(long)]
    pub text: Option<String>,
    #[structopt(long, default_value = "0.5")]
    pub textsize: f64,
    #[structopt(long, default_value = "black")]
    pub textcolor: String,
    #[structopt(long, default_value = "white")]
    pub bgcolor: String,
    /// Separates fields in the input. Any whitespace by default.
    #[structopt(long = "fs")]
    pub fieldsep: Option<char>,
    /// Wrap the output in a deck, with one slide per input
    #[structopt(long)]
    pub fulldeck: bool,
    /// The files to draw. Reads STDIN if none are given.
    #[structopt()]
    pub files: Vec<String>,
}

/// Everything that stays fixed while drawing each input.
struct Drawing {
    renderer: Box<dyn Renderer>,
    geom: Geometry,
    shape: Option<ShapeSpec>,
    text: Option<TextSpec>,
    bbox: Option<String>,
    bgcolor: String,
    info: bool,
    autobbox: bool,
    fulldeck: bool,
}

pub fn run(opts: &Options, default: Geometry, dest: &mut dyn Write) -> Result<()> {
    let drawing = Drawing::new(opts, default)?;

    if drawing.fulldeck {
        drawing.renderer.begin_deck(dest)?;
    }
    if opts.files.is_empty() {
        let stdin = std::io::stdin();
        drawing.process(None, stdin.lock(), opts.fieldsep, dest)?;
    } else {
        for path in &opts.files {
            match fs_err::File::open(path) {
                Ok(file) => {
                    let reader = BufReader::new(file);
                    drawing.process(Some(path.as_str()), reader, opts.fieldsep, dest)?;
                }
                Err(err) => {
                    error!("{}", err);
                }
            }
        }
    }
    if drawing.fulldeck {
        drawing.renderer.end_deck(dest)?;
    }
    Ok(())
}

impl Drawing {
    fn new(opts: &Options, default: Geometry) -> Result<Drawing> {
        let shape = Shape::parse(&opts.shape).map(|shape| ShapeSpec {
            shape,
            size: opts.shapesize,
            color: Color::parse(&opts.color),
        });
        if shape.is_none() {
            warn!("Unknown shape {}, so only labels and boxes will be drawn", opts.shape);
        }
        Ok(Drawing {
            renderer: opts.style.renderer(),
            geom: opts.geometry.resolve(default)?,
            shape,
            text: opts.text.as_ref().map(|align| TextSpec {
                align: align.clone(),
                size: opts.textsize,
                color: Color::parse(&opts.textcolor),
            }),
            bbox: opts.bbox.clone(),
            bgcolor: opts.bgcolor.clone(),
            info: opts.info,
            autobbox: opts.autobbox.unwrap_or(true),
            // Info mode produces no markup at all
            fulldeck: opts.fulldeck && !opts.info,
        })
    }

    /// A read failure only skips this input. Failing to write the output stops everything.
    fn process<R: BufRead>(
        &self,
        name: Option<&str>,
        reader: R,
        fieldsep: Option<char>,
        dest: &mut dyn Write,
    ) -> Result<()> {
        let locations = match Locations::read(reader, fieldsep, BadNumber::Skip) {
            Ok(locations) => locations,
            Err(err) => {
                error!("{}: {}", name.unwrap_or("STDIN"), err);
                return Ok(());
            }
        };
        info!(
            "Read {} points from {}",
            abstutil::prettyprint_usize(locations.len()),
            name.unwrap_or("STDIN")
        );
        self.draw(name, &locations, dest)?;
        Ok(())
    }

    fn draw(
        &self,
        name: Option<&str>,
        locations: &Locations,
        dest: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.info {
            return writeln!(dest, "{}", GPSBounds::from(&locations.points).info_flags());
        }

        let mut geom = self.geom.clone();
        if self.autobbox {
            geom.fit_to(&locations.points);
        }

        if self.fulldeck {
            if let Some(name) = name {
                self.renderer.comment(dest, name)?;
            }
            self.renderer.begin_slide(dest, &self.bgcolor)?;
        }
        if let Some(ref color) = self.bbox {
            self.renderer.bounding_box(dest, &geom, color)?;
        }

        let pts = geom.convert_all(&locations.points);
        if let Some(ref spec) = self.shape {
            self.renderer.shape(dest, spec, &pts, &geom.canvas)?;
        }
        if let Some(ref spec) = self.text {
            self.renderer.labels(dest, &pts, &locations.names, spec)?;
        }

        if self.fulldeck {
            self.renderer.end_slide(dest)?;
        }
        Ok(())
    }
}
