use std::io::Write;

use anyhow::{Context, Result};
use structopt::StructOpt;

use deck::{dump_coords, Color, Shape, ShapeSpec, Style};
use geom::{Geometry, Pt2D};
use kml::{BadNumber, KmlDocument};

use crate::args::GeometryArgs;

#[derive(StructOpt)]
pub struct Options {
    #[structopt(flatten)]
    pub geometry: GeometryArgs,
    #[structopt(long, default_value = "0.1")]
    pub linewidth: f64,
    /// Shape color, optionally with an opacity like "red:50"
    #[structopt(long, default_value = "black")]
    pub color: String,
    /// Draw a labeled bounding box in this color
    #[structopt(long)]
    pub bbox: Option<String>,
    /// polygon (fill), polyline (line), or circle (dot)
    #[structopt(long, default_value = "polyline")]
    pub shape: String,
    /// deck, decksh, or plain. Plain dumps the raw coordinates without mapping them. Anything
    /// else is rejected when parsing flags, unlike an unknown shape, which just draws nothing.
    #[structopt(long, default_value = "deck")]
    pub style: Style,
    #[structopt(long)]
    pub bgcolor: Option<String>,
    /// Wrap the output in a deck with one slide. On unless this is "false".
    #[structopt(long)]
    pub fulldeck: Option<bool>,
    /// Drop coordinates that don't parse, instead of treating the bad field as 0
    #[structopt(long)]
    pub skip_bad_coords: bool,
}

pub enum Input {
    Stdin,
    File(String),
}

impl Input {
    fn load(&self) -> Result<KmlDocument> {
        match self {
            Input::Stdin => KmlDocument::read(std::io::stdin()).context("reading STDIN"),
            Input::File(path) => KmlDocument::load(path),
        }
    }
}

/// What to do when an input can't be read or parsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    /// Report it and carry on with the other inputs
    Skip,
    /// Stop before writing anything
    Abort,
}

pub fn run(
    opts: &Options,
    default: Geometry,
    inputs: &[Input],
    on_error: OnError,
    dest: &mut dyn Write,
) -> Result<()> {
    let geom = opts.geometry.resolve(default)?;

    let mut docs = Vec::new();
    for input in inputs {
        match input.load() {
            Ok(doc) => docs.push(doc),
            Err(err) => match on_error {
                OnError::Skip => error!("{:#}", err),
                OnError::Abort => return Err(err),
            },
        }
    }

    draw(opts, &geom, &docs, dest)?;
    Ok(())
}

fn draw(
    opts: &Options,
    geom: &Geometry,
    docs: &[KmlDocument],
    dest: &mut dyn Write,
) -> std::io::Result<()> {
    let renderer = opts.style.renderer();
    let raw_dump = renderer.style() == Style::Plain;
    let policy = if opts.skip_bad_coords {
        BadNumber::Skip
    } else {
        BadNumber::Zero
    };
    let spec = Shape::parse(&opts.shape).map(|shape| ShapeSpec {
        shape,
        size: opts.linewidth,
        color: Color::parse(&opts.color),
    });
    if spec.is_none() && !raw_dump {
        warn!("Unknown shape {}, so no placemarks will be drawn", opts.shape);
    }
    let fulldeck = opts.fulldeck.unwrap_or(true);

    if fulldeck {
        renderer.begin(dest, opts.bgcolor.as_deref().unwrap_or(""))?;
    }
    for doc in docs {
        if let Some(ref color) = opts.bbox {
            renderer.bounding_box(dest, geom, color)?;
        }
        for ring in doc.all_rings(policy) {
            if raw_dump {
                let raw: Vec<Pt2D> = ring
                    .iter()
                    .map(|pt| Pt2D::new(pt.longitude, pt.latitude))
                    .collect();
                dump_coords(dest, &raw)?;
            } else if let Some(ref spec) = spec {
                renderer.shape(dest, spec, &geom.convert_all(&ring), &geom.canvas)?;
            }
        }
    }
    if fulldeck {
        renderer.end(dest)?;
    }
    Ok(())
}
