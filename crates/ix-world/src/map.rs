//! Static map data: spawn points and junction boxes.

use ix_core::{Location, Transform};

use crate::{WorldError, WorldResult};

/// Lane centre offset from the road axis on the built-in map, in metres.
const LANE_OFFSET: f64 = 1.75;

/// Distance of the built-in approach spawn points from the centre.
const APPROACH_DISTANCE: f64 = 22.0;

/// Distance of the built-in exit points from the centre.
const EXIT_DISTANCE: f64 = 45.0;

/// Height of spawn points above the road surface.
const SPAWN_HEIGHT: f64 = 0.3;

/// A junction's bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Junction {
    pub center: Location,
    /// Half-extents along each axis.
    pub extent: Location,
}

/// Spawn points and junctions of one map.  Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadMap {
    name:         String,
    spawn_points: Vec<Transform>,
    junctions:    Vec<Junction>,
}

impl RoadMap {
    pub fn new(name: impl Into<String>, spawn_points: Vec<Transform>, junctions: Vec<Junction>) -> Self {
        Self {
            name: name.into(),
            spawn_points,
            junctions,
        }
    }

    /// A single four-arm junction centred on the origin.
    ///
    /// Spawn points, in index order:
    ///
    /// | Index | Arm   | Role     | Heading |
    /// |-------|-------|----------|---------|
    /// | 0     | east  | approach | west    |
    /// | 1     | north | approach | south   |
    /// | 2     | west  | approach | east    |
    /// | 3     | south | approach | north   |
    /// | 4     | west  | exit     | west    |
    /// | 5     | south | exit     | south   |
    /// | 6     | east  | exit     | east    |
    /// | 7     | north | exit     | north   |
    ///
    /// Approach `i` drives straight through to exit `i + 4`.  Approach
    /// points sit inside the default 25 m approach radius.
    pub fn crossroads() -> Self {
        let (a, e, o, h) = (APPROACH_DISTANCE, EXIT_DISTANCE, LANE_OFFSET, SPAWN_HEIGHT);
        let at = |x: f64, y: f64, yaw: f64| Transform::new(Location::new(x, y, h), yaw);
        let spawn_points = vec![
            at(a, o, 180.0),
            at(-o, a, 270.0),
            at(-a, -o, 0.0),
            at(o, -a, 90.0),
            at(-e, o, 180.0),
            at(-o, -e, 270.0),
            at(e, -o, 0.0),
            at(o, e, 90.0),
        ];
        let junctions = vec![Junction {
            center: Location::new(0.0, 0.0, 0.0),
            extent: Location::new(8.0, 8.0, 1.0),
        }];
        Self::new("Crossroads", spawn_points, junctions)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn spawn_points(&self) -> &[Transform] {
        &self.spawn_points
    }

    #[inline]
    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    /// Spawn point `index`, or an out-of-range error.
    pub fn spawn_point(&self, index: usize) -> WorldResult<Transform> {
        self.spawn_points
            .get(index)
            .copied()
            .ok_or(WorldError::SpawnIndexOutOfRange {
                index,
                available: self.spawn_points.len(),
            })
    }
}
