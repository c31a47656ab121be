use serde::Serialize;

/// One row of a Molfile atom table.
///
/// The element symbol is kept as written; it is not checked against the
/// periodic table. Trailing integer columns (mass difference, charge,
/// stereo parity, ...) are stored in order without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    #[serde(rename = "CoordX")]
    pub x: f64,
    #[serde(rename = "CoordY")]
    pub y: f64,
    #[serde(rename = "CoordZ")]
    pub z: f64,
    #[serde(rename = "Element")]
    pub element: String,
    #[serde(rename = "MiscNumbers")]
    pub misc: Vec<i64>,
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            x: position[0],
            y: position[1],
            z: position[2],
            element: element.into(),
            misc: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
