//! Parameters of the necklace map pipeline.

use std::f64::consts::{PI, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a bead's feasible interval is derived from its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntervalType {
    /// Fixed-width interval centered on the direction of the region centroid.
    #[default]
    Centroid,
    /// Smallest wedge from the kernel that covers the region.
    Wedge,
}

/// Which cyclic orders of beads the scaler may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderType {
    /// Order of the clockwise endpoints of the feasible intervals.
    #[default]
    Fixed,
    /// Any cyclic order.
    Any,
}

/// Configuration copied into each stage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameters {
    pub interval_type: IntervalType,

    /// Width of centroid intervals, in (0, 2π).
    pub centroid_interval_length_rad: f64,

    /// Wedge intervals narrower than this are replaced by a centroid interval
    /// of this width. Zero keeps every wedge.
    pub wedge_interval_length_min_rad: f64,

    /// Regions that collapse to a single point get no feasible interval.
    pub ignore_point_regions: bool,

    pub order_type: OrderType,

    /// Minimum extra angular gap between adjacent beads, in [0, π].
    pub buffer_rad: f64,

    /// Weight of the region-centroid direction versus the interval midpoint
    /// when choosing preferred angles, in [0, 1].
    pub aversion_ratio: f64,

    /// Maximum number of forward/reverse placement sweeps.
    /// Zero leaves beads at the positions found by the scaler.
    pub placement_cycles: usize,

    /// Relative stopping width of the scale binary search.
    pub scale_search_tolerance: f64,

    /// Cap on binary search steps.
    pub scale_search_max_iterations: usize,

    /// Number of start beads tried by the any-order scaler; zero tries all.
    pub heuristic_cycles: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            interval_type: IntervalType::Centroid,
            centroid_interval_length_rad: 0.2 * PI,
            wedge_interval_length_min_rad: 0.1 * PI,
            ignore_point_regions: false,
            order_type: OrderType::Fixed,
            buffer_rad: 0.0,
            aversion_ratio: 0.5,
            placement_cycles: 30,
            scale_search_tolerance: 1e-6,
            scale_search_max_iterations: 100,
            heuristic_cycles: 0,
        }
    }
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval_type(mut self, interval_type: IntervalType) -> Self {
        self.interval_type = interval_type;
        self
    }

    pub fn with_centroid_interval_length_rad(mut self, length: f64) -> Self {
        self.centroid_interval_length_rad = length;
        self
    }

    pub fn with_wedge_interval_length_min_rad(mut self, length: f64) -> Self {
        self.wedge_interval_length_min_rad = length;
        self
    }

    pub fn with_ignore_point_regions(mut self, ignore: bool) -> Self {
        self.ignore_point_regions = ignore;
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn with_buffer_rad(mut self, buffer: f64) -> Self {
        self.buffer_rad = buffer;
        self
    }

    pub fn with_aversion_ratio(mut self, ratio: f64) -> Self {
        self.aversion_ratio = ratio;
        self
    }

    pub fn with_placement_cycles(mut self, cycles: usize) -> Self {
        self.placement_cycles = cycles;
        self
    }

    pub fn with_scale_search_tolerance(mut self, tolerance: f64) -> Self {
        self.scale_search_tolerance = tolerance;
        self
    }

    pub fn with_scale_search_max_iterations(mut self, iterations: usize) -> Self {
        self.scale_search_max_iterations = iterations;
        self
    }

    pub fn with_heuristic_cycles(mut self, cycles: usize) -> Self {
        self.heuristic_cycles = cycles;
        self
    }

    /// Reject out-of-range values. NaN fails every range check.
    pub fn validate(&self) -> Result<()> {
        fn check(ok: bool, msg: &str) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(Error::InvalidArgument(msg.to_string()))
            }
        }
        let p = self;
        check(
            p.centroid_interval_length_rad > 0.0 && p.centroid_interval_length_rad < TAU,
            "centroid_interval_length_rad must lie in (0, 2π)",
        )?;
        check(
            p.wedge_interval_length_min_rad >= 0.0 && p.wedge_interval_length_min_rad < TAU,
            "wedge_interval_length_min_rad must lie in [0, 2π)",
        )?;
        check(
            p.buffer_rad >= 0.0 && p.buffer_rad <= PI,
            "buffer_rad must lie in [0, π]",
        )?;
        check(
            (0.0..=1.0).contains(&p.aversion_ratio),
            "aversion_ratio must lie in [0, 1]",
        )?;
        check(
            p.scale_search_tolerance > 0.0 && p.scale_search_tolerance.is_finite(),
            "scale_search_tolerance must be positive",
        )?;
        check(
            p.scale_search_max_iterations > 0,
            "scale_search_max_iterations must be positive",
        )
    }
}
