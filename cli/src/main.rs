//! Turns geographic data into slide markup. Each subcommand handles one kind of input; they share
//! the geometry flags and the output dialects.

#[macro_use]
extern crate log;

mod args;
mod kml_deck;
mod locations;

use std::io::Write;

use anyhow::Result;
use structopt::StructOpt;

use geom::{Bounds, GPSBounds, Geometry};

use crate::kml_deck::{Input, OnError};

#[derive(StructOpt)]
#[structopt(name = "geodeck", about = "Draws maps as deck or decksh markup")]
enum Command {
    /// Draws lat/long text files, one "lat long [name]" point per line. Reads STDIN if no files
    /// are given. Unreadable files are reported and skipped.
    Locations {
        #[structopt(flatten)]
        opts: locations::Options,
    },
    /// Draws the placemarks of world KML files, by default over the whole globe. Unreadable
    /// files are reported and skipped.
    World {
        #[structopt(flatten)]
        opts: kml_deck::Options,
        /// The KML files to draw
        #[structopt()]
        files: Vec<String>,
    },
    /// Draws the placemarks of one KML document, by default framed on the contiguous United
    /// States. Any failure to read the input aborts the run.
    Usmap {
        #[structopt(flatten)]
        opts: kml_deck::Options,
        /// Read this file instead of STDIN
        #[structopt(long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cmd = Command::from_args();
    abstutil::logger::setup();

    let stdout = std::io::stdout();
    let mut dest = stdout.lock();
    match cmd {
        Command::Locations { opts } => locations::run(&opts, world_geometry(), &mut dest)?,
        Command::World { opts, files } => {
            let inputs: Vec<Input> = files.into_iter().map(Input::File).collect();
            kml_deck::run(&opts, world_geometry(), &inputs, OnError::Skip, &mut dest)?
        }
        Command::Usmap { opts, input } => {
            let input = input.map(Input::File).unwrap_or(Input::Stdin);
            kml_deck::run(&opts, us_geometry(), &[input], OnError::Abort, &mut dest)?
        }
    }
    dest.flush()?;
    Ok(())
}

fn world_geometry() -> Geometry {
    Geometry::new(GPSBounds::world(), Bounds::new(5.0, 95.0, 5.0, 95.0))
}

fn us_geometry() -> Geometry {
    Geometry::new(
        GPSBounds::continental_us(),
        Bounds::new(5.0, 95.0, 10.0, 80.0),
    )
}
