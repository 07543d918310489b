//! Pulls coordinates out of KML documents and plain lat/long text files. Only the pieces needed to
//! draw placemarks are kept; the rest of the KML schema is ignored.

#[macro_use]
extern crate log;

use std::io::Read;

use anyhow::{Context, Result};

use abstutil::prettyprint_usize;

pub use crate::coords::{parse_coordinates, BadNumber};
pub use crate::locations::Locations;

mod coords;
mod locations;

/// Every placemark found in one KML document, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KmlDocument {
    pub placemarks: Vec<Placemark>,
}

/// A single placemark. A plain `Polygon` contributes one ring, a `MultiGeometry` contributes one
/// per polygon, and a `LineString` contributes its path. Inner boundaries (holes) are skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct Placemark {
    pub name: Option<String>,
    /// The raw text of each `<coordinates>` element: whitespace-separated "lon,lat[,elev]"
    pub rings: Vec<String>,
}

impl KmlDocument {
    /// Reads and parses a .kml file.
    pub fn load(path: &str) -> Result<KmlDocument> {
        let raw = fs_err::read_to_string(path)?;
        let doc = KmlDocument::parse(&raw).with_context(|| format!("parsing {}", path))?;
        info!(
            "Got {} placemarks from {}",
            prettyprint_usize(doc.placemarks.len()),
            path
        );
        Ok(doc)
    }

    /// Reads a whole document from something like STDIN.
    pub fn read<R: Read>(mut reader: R) -> Result<KmlDocument> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        KmlDocument::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<KmlDocument> {
        let tree = roxmltree::Document::parse(raw)?;
        let mut placemarks = Vec::new();
        recurse(tree.root(), &mut placemarks);
        Ok(KmlDocument { placemarks })
    }

    /// All rings of all placemarks, parsed into coordinates.
    pub fn all_rings(&self, policy: BadNumber) -> impl Iterator<Item = Vec<geom::LonLat>> + '_ {
        self.placemarks
            .iter()
            .flat_map(|pm| pm.rings.iter())
            .map(move |ring| parse_coordinates(ring, policy))
    }
}

// Placemarks may be directly under Document, inside a Folder, or nested deeper.
fn recurse(node: roxmltree::Node, placemarks: &mut Vec<Placemark>) {
    for child in node.children() {
        if child.tag_name().name() == "Placemark" {
            placemarks.push(scrape_placemark(child));
        } else {
            recurse(child, placemarks);
        }
    }
}

fn scrape_placemark(node: roxmltree::Node) -> Placemark {
    let name = node
        .children()
        .find(|child| child.tag_name().name() == "name")
        .and_then(|child| child.text())
        .map(|x| x.trim().to_string());
    let rings = node
        .descendants()
        .filter(|n| n.tag_name().name() == "coordinates")
        .filter(|n| {
            n.ancestors().any(|a| {
                let tag = a.tag_name().name();
                tag == "outerBoundaryIs" || tag == "LineString"
            })
        })
        .map(|n| n.text().unwrap_or("").to_string())
        .collect();
    Placemark { name, rings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom::LonLat;

    const STATES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Folder id="states">
      <Placemark id="1">
        <name>Colorado</name>
        <Polygon>
          <outerBoundaryIs>
            <LinearRing>
              <coordinates>-109.05,41.0,0 -102.05,41.0,0 -102.05,37.0,0 -109.05,37.0,0</coordinates>
            </LinearRing>
          </outerBoundaryIs>
        </Polygon>
      </Placemark>
      <Placemark id="2">
        <name>Islands</name>
        <MultiGeometry>
          <Polygon>
            <outerBoundaryIs><LinearRing><coordinates>1.0,2.0,0 3.0,4.0,0 5.0,6.0,0</coordinates></LinearRing></outerBoundaryIs>
            <innerBoundaryIs><LinearRing><coordinates>9,9 9,9 9,9</coordinates></LinearRing></innerBoundaryIs>
          </Polygon>
          <Polygon>
            <outerBoundaryIs><LinearRing><coordinates>7,8 9,10 11,12</coordinates></LinearRing></outerBoundaryIs>
          </Polygon>
        </MultiGeometry>
      </Placemark>
    </Folder>
  </Document>
</kml>"#;

    #[test]
    fn test_parse_folder_and_multigeometry() {
        let doc = KmlDocument::parse(STATES).unwrap();
        assert_eq!(2, doc.placemarks.len());
        assert_eq!(Some("Colorado".to_string()), doc.placemarks[0].name);
        assert_eq!(1, doc.placemarks[0].rings.len());
        assert_eq!(
            vec!["1.0,2.0,0 3.0,4.0,0 5.0,6.0,0", "7,8 9,10 11,12"],
            doc.placemarks[1].rings
        );
    }

    #[test]
    fn test_all_rings() {
        let doc = KmlDocument::parse(STATES).unwrap();
        let rings: Vec<Vec<LonLat>> = doc.all_rings(BadNumber::Zero).collect();
        assert_eq!(3, rings.len());
        assert_eq!(LonLat::new(-109.05, 41.0), rings[0][0]);
        assert_eq!(LonLat::new(11.0, 12.0), rings[2][2]);
    }

    #[test]
    fn test_placemarks_directly_under_document() {
        let doc = KmlDocument::parse(
            r#"<kml><Document>
                <Placemark><LineString><coordinates>0,0 1,1</coordinates></LineString></Placemark>
                <Placemark><name>Empty</name></Placemark>
            </Document></kml>"#,
        )
        .unwrap();
        assert_eq!(2, doc.placemarks.len());
        assert_eq!(None, doc.placemarks[0].name);
        assert_eq!(vec!["0,0 1,1"], doc.placemarks[0].rings);
        assert!(doc.placemarks[1].rings.is_empty());
    }

    #[test]
    fn test_malformed_xml() {
        assert!(KmlDocument::parse("<kml><Document></kml>").is_err());
    }

    #[test]
    fn test_read() {
        let doc = KmlDocument::read(STATES.as_bytes()).unwrap();
        assert_eq!(2, doc.placemarks.len());
    }
}
