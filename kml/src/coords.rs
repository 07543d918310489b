use geom::LonLat;

/// What to do with a numeric field that doesn't parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadNumber {
    /// Drop the whole point (or line)
    Skip,
    /// Treat the field as 0
    Zero,
}

/// Parses the text of a KML `<coordinates>` element: whitespace-separated "lon,lat[,elev]"
/// triples. Elevation is ignored. Input order is preserved.
pub fn parse_coordinates(raw: &str, policy: BadNumber) -> Vec<LonLat> {
    raw.split_whitespace()
        .filter_map(|triple| parse_pt(triple, policy))
        .collect()
}

fn parse_pt(input: &str, policy: BadNumber) -> Option<LonLat> {
    let mut fields = input.split(',');
    let lon = fields.next().and_then(|x| x.parse::<f64>().ok());
    let lat = fields.next().and_then(|x| x.parse::<f64>().ok());
    match (lon, lat, policy) {
        (Some(lon), Some(lat), _) => Some(LonLat::new(lon, lat)),
        (_, _, BadNumber::Skip) => None,
        (lon, lat, BadNumber::Zero) => Some(LonLat::new(lon.unwrap_or(0.0), lat.unwrap_or(0.0))),
    }
}
