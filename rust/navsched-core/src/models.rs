use serde::{Deserialize, Serialize};

/// A position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_sq(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    pub fn distance(&self, other: &Point3) -> f32 {
        self.distance_sq(other).sqrt()
    }
}

/// Raw output of a `NavigationQuery::calculate_path` call, before the
/// complete-only policy is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavPath {
    pub corners: Vec<Point3>,
    pub complete: bool,
}

impl NavPath {
    pub fn complete(corners: Vec<Point3>) -> Self {
        Self { corners, complete: true }
    }

    pub fn incomplete() -> Self {
        Self { corners: Vec::new(), complete: false }
    }
}

/// Outcome of one route computation as delivered to the requesting caller.
///
/// Fields are private so the invariant holds by construction: a failed
/// result never carries waypoints, and a successful result is never empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteResultWire")]
pub struct RouteResult {
    waypoints: Vec<Point3>,
    success: bool,
}

/// Unvalidated wire form; deserialization goes through `TryFrom` so the
/// invariant cannot be smuggled past the constructors.
#[derive(Deserialize)]
struct RouteResultWire {
    waypoints: Vec<Point3>,
    success: bool,
}

impl TryFrom<RouteResultWire> for RouteResult {
    type Error = String;

    fn try_from(wire: RouteResultWire) -> Result<Self, Self::Error> {
        if wire.success == wire.waypoints.is_empty() {
            return Err(if wire.success {
                "successful route with no waypoints".to_string()
            } else {
                "failed route carrying waypoints".to_string()
            });
        }
        Ok(Self { waypoints: wire.waypoints, success: wire.success })
    }
}

impl RouteResult {
    /// Builds a result from computed waypoints. An empty waypoint list is a
    /// failed route; success is derived, never asserted separately.
    pub fn found(waypoints: Vec<Point3>) -> Self {
        let success = !waypoints.is_empty();
        Self { waypoints, success }
    }

    pub fn failure() -> Self {
        Self { waypoints: Vec::new(), success: false }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn waypoints(&self) -> &[Point3] {
        &self.waypoints
    }

    pub fn into_waypoints(self) -> Vec<Point3> {
        self.waypoints
    }
}
