use crate::{LsysError, Result};
use serde::{Deserialize, Serialize};

/// Initial turtle heading: straight up (π/2 radians, y grows upward).
pub const VERTICAL: f64 = std::f64::consts::FRAC_PI_2;

/// A single point of the generated path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position, rounded to the nearest integer.
    pub x: i64,
    /// Vertical position, rounded to the nearest integer.
    pub y: i64,
    /// Heading in radians at this point.
    pub angle: f64,
    /// Branch depth at creation. 0 is the trunk.
    pub level: u32,
    /// Unique identifier, assigned in traversal order. 0 is the root.
    pub index: usize,
    /// Index of the point this one extends from. `None` only for the root;
    /// serialized as `-1`.
    #[serde(with = "parent_index")]
    pub parent: Option<usize>,
}

impl Point {
    /// The implicit root at the origin, heading up.
    pub fn root() -> Self {
        Self {
            x: 0,
            y: 0,
            angle: VERTICAL,
            level: 0,
            index: 0,
            parent: None,
        }
    }
}

/// The interpreter's output: points in index order plus bounding dimensions.
///
/// `points[i].index == i` always holds, so the vector doubles as an ordered
/// map keyed by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointGraph {
    pub points: Vec<Point>,
    pub width: i64,
    pub height: i64,
    pub min_x: i64,
    pub min_y: i64,
}

impl PointGraph {
    /// A graph holding only the root point.
    pub fn with_root() -> Self {
        Self {
            points: vec![Point::root()],
            width: 0,
            height: 0,
            min_x: 0,
            min_y: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Look up a point by index.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn root(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// `(parent, child)` pairs in index order, one line segment per
    /// non-root point, as a renderer draws them.
    pub fn segments(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.parent.and_then(|i| self.points.get(i)).map(|parent| (parent, p)))
    }

    /// Deepest branch level present in the graph.
    pub fn max_level(&self) -> u32 {
        self.points.iter().map(|p| p.level).max().unwrap_or(0)
    }

    /// Verify the structural invariants: a root at index 0 without parent,
    /// contiguous indices, and every parent strictly before its child.
    pub fn check_integrity(&self) -> Result<()> {
        let broken = |index: usize, reason: &str| LsysError::BrokenGraph {
            index,
            reason: reason.to_string(),
        };

        let root = self.points.first().ok_or_else(|| broken(0, "missing root"))?;
        if root.parent.is_some() {
            return Err(broken(0, "root has a parent"));
        }
        for (i, p) in self.points.iter().enumerate() {
            if p.index != i {
                return Err(broken(i, "index does not match position"));
            }
            if i == 0 {
                continue;
            }
            match p.parent {
                None => return Err(broken(i, "non-root point without parent")),
                Some(parent) if parent >= i => {
                    return Err(broken(i, "parent does not precede child"))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PointGraph {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// `Option<usize>` ↔ `-1`-sentinel integer, the form renderers expect.
mod parent_index {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(parent: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        match parent {
            Some(i) => s.serialize_u64(*i as u64),
            None => s.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(d)?;
        match raw {
            -1 => Ok(None),
            i if i >= 0 => Ok(Some(i as usize)),
            other => Err(D::Error::custom(format!("invalid parent index {other}"))),
        }
    }
}
