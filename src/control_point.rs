use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::{new_key_type, SlotMap};

use crate::math::{Point3d, Rotation3d, Vector3d};

/// The tag given to the next [ControlPointSet].
static NEXT_SET_TAG: AtomicU64 = AtomicU64::new(0);

new_key_type! {
    /// Key of a [ControlPoint] within a single set.
    struct PointKey;
}

/// Unique ID of a [ControlPoint].
///
/// An ID is only valid for the [ControlPointSet] that issued it; every other
/// set reports it as missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlPointId {
    set: u64,
    key: PointKey,
}

/// A point in space that shapes a curve, carrying a full transform.
///
/// Control points are stored in the spline's [ControlPointSet] and referred
/// to by [ControlPointId]. Two points with equal transforms
/// are still distinct unless they share an ID.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    /// The position of the point.
    pub position: Point3d,
    /// The orientation of the point.
    pub rotation: Rotation3d,
    /// The scale of the point along each axis.
    pub scale: Vector3d,
}

impl ControlPoint {
    /// Creates a control point at `position` with no rotation and unit scale.
    pub fn new(position: Point3d) -> Self {
        Self {
            position,
            rotation: Rotation3d::new(1.0, 0.0, 0.0, 0.0),
            scale: Vector3d::new(1.0, 1.0, 1.0),
        }
    }

    /// Creates a control point with the given transform.
    pub fn with_transform(position: Point3d, rotation: Rotation3d, scale: Vector3d) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Moves the point by `delta`.
    pub fn translate(&mut self, delta: Vector3d) {
        self.position += delta;
    }
}

/// The arena holding every [ControlPoint] of a spline.
#[derive(Debug)]
pub struct ControlPointSet {
    tag: u64,
    points: SlotMap<PointKey, ControlPoint>,
}

impl Default for ControlPointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPointSet {
    /// Creates an empty set whose IDs no other set accepts.
    pub fn new() -> Self {
        Self {
            tag: NEXT_SET_TAG.fetch_add(1, Ordering::Relaxed),
            points: SlotMap::with_key(),
        }
    }

    /// Adds a point, returning its ID.
    pub fn insert(&mut self, point: ControlPoint) -> ControlPointId {
        ControlPointId {
            set: self.tag,
            key: self.points.insert(point),
        }
    }

    /// Removes a point, returning it if it was in the set.
    pub fn remove(&mut self, id: ControlPointId) -> Option<ControlPoint> {
        if id.set != self.tag {
            return None;
        }
        self.points.remove(id.key)
    }

    /// Returns true if the point is in the set.
    pub fn contains(&self, id: ControlPointId) -> bool {
        self.get(id).is_some()
    }

    /// Gets a point.
    pub fn get(&self, id: ControlPointId) -> Option<&ControlPoint> {
        if id.set != self.tag {
            return None;
        }
        self.points.get(id.key)
    }

    /// Gets a mutable reference to a point.
    pub fn get_mut(&mut self, id: ControlPointId) -> Option<&mut ControlPoint> {
        if id.set != self.tag {
            return None;
        }
        self.points.get_mut(id.key)
    }

    /// The number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points and their IDs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ControlPointId, &ControlPoint)> + '_ {
        let set = self.tag;
        self.points
            .iter()
            .map(move |(key, point)| (ControlPointId { set, key }, point))
    }
}

impl Index<ControlPointId> for ControlPointSet {
    type Output = ControlPoint;

    fn index(&self, id: ControlPointId) -> &ControlPoint {
        match self.get(id) {
            Some(point) => point,
            None => panic!("invalid ControlPointId {:?}", id),
        }
    }
}

impl IndexMut<ControlPointId> for ControlPointSet {
    fn index_mut(&mut self, id: ControlPointId) -> &mut ControlPoint {
        match self.get_mut(id) {
            Some(point) => point,
            None => panic!("invalid ControlPointId {:?}", id),
        }
    }
}
