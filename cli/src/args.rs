use anyhow::{Context, Result};
use structopt::StructOpt;

use geom::Geometry;

/// Overrides for the canvas and the geographic window. Anything left unset keeps the value from
/// `--geometry`, or else the subcommand's default.
#[derive(StructOpt, Debug, Default)]
pub struct GeometryArgs {
    /// A JSON file describing a whole geometry, like {"gps": {"min_lon": ..}, "canvas": {"min_x":
    /// ..}}. Individual flags override it.
    #[structopt(long)]
    pub geometry: Option<String>,
    /// canvas x minimum
    #[structopt(long, allow_hyphen_values = true)]
    pub xmin: Option<f64>,
    /// canvas x maximum
    #[structopt(long, allow_hyphen_values = true)]
    pub xmax: Option<f64>,
    /// canvas y minimum
    #[structopt(long, allow_hyphen_values = true)]
    pub ymin: Option<f64>,
    /// canvas y maximum
    #[structopt(long, allow_hyphen_values = true)]
    pub ymax: Option<f64>,
    /// latitude minimum
    #[structopt(long, allow_hyphen_values = true)]
    pub latmin: Option<f64>,
    /// latitude maximum
    #[structopt(long, allow_hyphen_values = true)]
    pub latmax: Option<f64>,
    /// longitude minimum
    #[structopt(long, allow_hyphen_values = true)]
    pub longmin: Option<f64>,
    /// longitude maximum
    #[structopt(long, allow_hyphen_values = true)]
    pub longmax: Option<f64>,
}

impl GeometryArgs {
    pub fn resolve(&self, default: Geometry) -> Result<Geometry> {
        let mut geom = match self.geometry {
            Some(ref path) => {
                let raw = fs_err::read_to_string(path)?;
                serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))?
            }
            None => default,
        };
        let overrides = [
            (self.xmin, &mut geom.canvas.min_x),
            (self.xmax, &mut geom.canvas.max_x),
            (self.ymin, &mut geom.canvas.min_y),
            (self.ymax, &mut geom.canvas.max_y),
            (self.latmin, &mut geom.gps.min_lat),
            (self.latmax, &mut geom.gps.max_lat),
            (self.longmin, &mut geom.gps.min_lon),
            (self.longmax, &mut geom.gps.max_lon),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        Ok(geom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom::{Bounds, GPSBounds};

    fn world() -> Geometry {
        Geometry::new(GPSBounds::world(), Bounds::new(5.0, 95.0, 5.0, 95.0))
    }

    #[test]
    fn test_defaults_untouched() {
        assert_eq!(world(), GeometryArgs::default().resolve(world()).unwrap());
    }

    #[test]
    fn test_flags_override() {
        let args = GeometryArgs::from_iter(vec![
            "test",
            "--ymin",
            "10",
            "--ymax=80",
            "--longmin",
            "-125",
            "--latmax",
            "50",
        ]);
        let geom = args.resolve(world()).unwrap();
        assert_eq!(Bounds::new(5.0, 95.0, 10.0, 80.0), geom.canvas);
        assert_eq!(-125.0, geom.gps.min_lon);
        assert_eq!(180.0, geom.gps.max_lon);
        assert_eq!(-90.0, geom.gps.min_lat);
        assert_eq!(50.0, geom.gps.max_lat);
    }

    #[test]
    fn test_missing_geometry_file() {
        let args = GeometryArgs {
            geometry: Some("/does/not/exist.json".to_string()),
            ..Default::default()
        };
        let err = args.resolve(world()).unwrap_err();
        assert!(format!("{}", err).contains("/does/not/exist.json"));
    }
}
