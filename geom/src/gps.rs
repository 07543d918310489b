use serde::{Deserialize, Serialize};

// longitude is x, latitude is y
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }
}

/// The geographic window that gets stretched over the canvas.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GPSBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GPSBounds {
    /// An "inverted" box, seeded with the valid geographic extrema so that the first `update`
    /// collapses it onto real data. Scanning no points leaves these seeds untouched.
    pub fn new() -> GPSBounds {
        GPSBounds {
            min_lon: 180.0,
            max_lon: -180.0,
            min_lat: 90.0,
            max_lat: -90.0,
        }
    }

    /// The whole world.
    pub fn world() -> GPSBounds {
        GPSBounds {
            min_lon: -180.0,
            max_lon: 180.0,
            min_lat: -90.0,
            max_lat: 90.0,
        }
    }

    /// The contiguous United States.
    pub fn continental_us() -> GPSBounds {
        GPSBounds {
            min_lon: -125.0,
            max_lon: -67.0,
            min_lat: 24.0,
            max_lat: 50.0,
        }
    }

    /// Scans every point once to find the extrema.
    pub fn from(pts: &[LonLat]) -> GPSBounds {
        let mut b = GPSBounds::new();
        for pt in pts {
            b.update(*pt);
        }
        b
    }

    pub fn update(&mut self, pt: LonLat) {
        if pt.longitude > self.max_lon {
            self.max_lon = pt.longitude;
        }
        if pt.longitude < self.min_lon {
            self.min_lon = pt.longitude;
        }
        if pt.latitude > self.max_lat {
            self.max_lat = pt.latitude;
        }
        if pt.latitude < self.min_lat {
            self.min_lat = pt.latitude;
        }
    }

    pub fn center(&self) -> LonLat {
        LonLat::new(
            self.min_lon + (self.max_lon - self.min_lon) / 2.0,
            self.min_lat + (self.max_lat - self.min_lat) / 2.0,
        )
    }

    /// Lower left, lower right, upper right, upper left
    pub fn get_corners(&self) -> Vec<LonLat> {
        vec![
            LonLat::new(self.min_lon, self.min_lat),
            LonLat::new(self.max_lon, self.min_lat),
            LonLat::new(self.max_lon, self.max_lat),
            LonLat::new(self.min_lon, self.max_lat),
        ]
    }

    /// Describes these bounds as command-line flags, so a later run can reuse them to frame
    /// the same data.
    pub fn info_flags(&self) -> String {
        let center = self.center();
        format!(
            "--center={},{} --bbox=\"{},{}|{},{}\" --longmin={} --longmax={} --latmin={} --latmax={}",
            center.latitude,
            center.longitude,
            self.max_lat,
            self.min_lon,
            self.min_lat,
            self.max_lon,
            self.min_lon,
            self.max_lon,
            self.min_lat,
            self.max_lat
        )
    }
}
