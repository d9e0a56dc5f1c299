//! Radius-versus-height profiles of axially symmetric parts.

/// One station of a [`Profile`]: a radius at an axial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the axis (>= 0).
    pub radius: f64,
    /// Position along the axis.
    pub axial: f64,
}

impl ProfilePoint {
    /// Create a station, clamping a negative radius to zero.
    pub fn new(radius: f64, axial: f64) -> Self {
        Self {
            radius: radius.max(0.0),
            axial,
        }
    }
}

/// Half cross-section of a revolved part, ordered along the axis.
///
/// Both the mesh lathe and the 2D projector consume profiles; each takes
/// its own copy, so a profile is a plain value with no shared state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    points: Vec<ProfilePoint>,
}

impl Profile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a profile from `(radius, axial)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(r, y)| ProfilePoint::new(r, y)).collect(),
        }
    }

    /// Append a station.
    pub fn push(&mut self, radius: f64, axial: f64) {
        self.points.push(ProfilePoint::new(radius, axial));
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the profile has no stations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stations in axial order.
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Iterate over the stations.
    pub fn iter(&self) -> impl Iterator<Item = &ProfilePoint> {
        self.points.iter()
    }

    /// First station, if any.
    pub fn first(&self) -> Option<&ProfilePoint> {
        self.points.first()
    }

    /// Last station, if any.
    pub fn last(&self) -> Option<&ProfilePoint> {
        self.points.last()
    }

    /// Check that axial positions never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.points.windows(2).all(|w| w[1].axial >= w[0].axial)
    }

    /// Largest radius in the profile (0 when empty).
    pub fn max_radius(&self) -> f64 {
        self.points.iter().map(|p| p.radius).fold(0.0, f64::max)
    }

    /// Consecutive station pairs, the segments a lathe stitches together.
    pub fn segments(&self) -> impl Iterator<Item = (&ProfilePoint, &ProfilePoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl FromIterator<(f64, f64)> for Profile {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            points: iter
                .into_iter()
                .map(|(r, y)| ProfilePoint::new(r, y))
                .collect(),
        }
    }
}
