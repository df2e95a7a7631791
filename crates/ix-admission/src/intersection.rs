//! The managed conflict zone.

use ix_core::Location;

use crate::{AdmissionError, AdmissionResult};

/// Geometry of the managed intersection, as given on the command line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionConfig {
    /// Centre of the box.
    pub center: Location,

    /// Half the side length of the square box, in metres.  Default: 8.
    pub box_half_extent: f64,

    /// Vehicles closer than this to `center` join the queue.  Default: 25.
    pub approach_radius: f64,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            center:          Location::default(),
            box_half_extent: 8.0,
            approach_radius: 25.0,
        }
    }
}

impl IntersectionConfig {
    pub fn validate(&self) -> AdmissionResult<()> {
        if !self.center.is_finite() {
            return Err(AdmissionError::Config(format!(
                "intersection centre must be finite, got {}",
                self.center
            )));
        }
        if !(self.box_half_extent.is_finite() && self.box_half_extent > 0.0) {
            return Err(AdmissionError::Config(format!(
                "box half-extent must be positive, got {}",
                self.box_half_extent
            )));
        }
        if !(self.approach_radius.is_finite() && self.approach_radius > 0.0) {
            return Err(AdmissionError::Config(format!(
                "approach radius must be positive, got {}",
                self.approach_radius
            )));
        }
        Ok(())
    }
}

/// Axis-aligned intersection box plus the approach zone around it.
///
/// Immutable once built.  The box test is horizontal only (`z` is ignored)
/// so ramps and road camber do not drop a vehicle out of the box; the
/// approach test uses full 3-D distance from the centre.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionBox {
    center:          Location,
    half_extent:     f64,
    approach_radius: f64,
}

impl IntersectionBox {
    pub fn new(config: &IntersectionConfig) -> AdmissionResult<Self> {
        config.validate()?;
        if config.approach_radius < config.box_half_extent {
            log::warn!(
                "approach radius {:.2} is smaller than box half-extent {:.2}; \
                 vehicles may reach the box before they queue",
                config.approach_radius,
                config.box_half_extent,
            );
        }
        Ok(Self {
            center:          config.center,
            half_extent:     config.box_half_extent,
            approach_radius: config.approach_radius,
        })
    }

    #[inline]
    pub fn center(&self) -> Location {
        self.center
    }

    #[inline]
    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    #[inline]
    pub fn approach_radius(&self) -> f64 {
        self.approach_radius
    }

    /// `true` if `p` lies inside the box (edges inclusive).
    #[inline]
    pub fn contains(&self, p: Location) -> bool {
        (p.x - self.center.x).abs() <= self.half_extent
            && (p.y - self.center.y).abs() <= self.half_extent
    }

    /// `true` if `p` is within the approach radius (inclusive).
    #[inline]
    pub fn in_approach_zone(&self, p: Location) -> bool {
        self.center.distance(p) <= self.approach_radius
    }
}
