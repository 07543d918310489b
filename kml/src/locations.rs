use std::borrow::Cow;
use std::io::BufRead;

use anyhow::Result;

use geom::LonLat;

use crate::BadNumber;

/// Points read from a plain text file, one per line: latitude, longitude, and an optional name.
/// `names` always has one entry per point; lines without a third field get `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Locations {
    pub points: Vec<LonLat>,
    pub names: Vec<Option<String>>,
}

impl Locations {
    /// Splits each line on `sep`, or on any whitespace if there's no separator. Lines with fewer
    /// than two fields are ignored, so headers and comments just fall through. The parser doesn't
    /// check that values are real-world coordinates.
    pub fn parse(raw: &str, sep: Option<char>, policy: BadNumber) -> Locations {
        // Reading from memory can't fail
        Locations::read(raw.as_bytes(), sep, policy).unwrap_or_default()
    }

    /// Like `parse`, but streams lines from a reader. Fails only on I/O errors. Lines that aren't
    /// valid UTF-8 are decoded lossily, so a stray byte in a name doesn't lose the point.
    pub fn read<R: BufRead>(reader: R, sep: Option<char>, policy: BadNumber) -> Result<Locations> {
        let mut locations = Locations::default();
        let mut skipped = 0;
        let mut lossy = 0;
        for bytes in reader.split(b'\n') {
            let bytes = bytes?;
            let line = String::from_utf8_lossy(&bytes);
            if let Cow::Owned(_) = line {
                lossy += 1;
            }
            if !locations.add_line(line.trim_end_matches('\r'), sep, policy) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!("Skipped {} lines without a lat/long pair", skipped);
        }
        if lossy > 0 {
            debug!("{} lines weren't valid UTF-8", lossy);
        }
        Ok(locations)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the line produced a point.
    fn add_line(&mut self, line: &str, sep: Option<char>, policy: BadNumber) -> bool {
        let fields: Vec<&str> = match sep {
            Some(sep) => line.split(sep).filter(|x| !x.is_empty()).collect(),
            None => line.split_whitespace().collect(),
        };
        if fields.len() < 2 {
            return false;
        }
        let lat = fields[0].parse::<f64>().ok();
        let lon = fields[1].parse::<f64>().ok();
        let pt = match (lon, lat, policy) {
            (Some(lon), Some(lat), _) => LonLat::new(lon, lat),
            (_, _, BadNumber::Skip) => {
                return false;
            }
            (lon, lat, BadNumber::Zero) => LonLat::new(lon.unwrap_or(0.0), lat.unwrap_or(0.0)),
        };
        self.points.push(pt);
        self.names.push(fields.get(2).map(|x| x.to_string()));
        true
    }
}
