use rand::seq::SliceRandom;
use rand::Rng;

/// Marker color, RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The fixed marker palette. Its size caps the number of simultaneously
/// plotted points; no two live points ever share a color.
pub const NODE_COLORS: &[Rgb] = &[
    Rgb(235, 77, 75),   // red
    Rgb(240, 195, 48),  // yellow
    Rgb(106, 176, 76),  // green
    Rgb(104, 109, 224), // light purple
    Rgb(240, 147, 43),  // orange
    Rgb(126, 214, 223), // turquoise
    Rgb(52, 152, 219),  // blue
    Rgb(224, 86, 253),  // pink
];

/// What a scene artifact is, without string-name dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Point,
    Vector,
}

/// Typed identifier for a scene artifact belonging to one attributed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub kind: NodeKind,
    pub index: u64,
}

/// A plotted point: a stable id, a palette color, and the identifiers of
/// its marker and origin-vector artifacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributedPoint {
    pub id: u64,
    pub color: Rgb,
    pub point_node: NodeId,
    pub vector_node: NodeId,
}

impl AttributedPoint {
    fn new(id: u64, color: Rgb) -> Self {
        Self {
            id,
            color,
            point_node: NodeId { kind: NodeKind::Point, index: id },
            vector_node: NodeId { kind: NodeKind::Vector, index: id },
        }
    }
}

/// Ordered collection of attributed points backed by the color pool.
///
/// Ids are monotonic and never reused; removal returns the point's color
/// to the pool. `pool.len() + points.len() == NODE_COLORS.len()` holds
/// across every operation.
pub struct PointRegistry {
    points: Vec<AttributedPoint>,
    pool: Vec<Rgb>,
    next_id: u64,
}

impl PointRegistry {
    pub fn new() -> Self {
        let mut pool = NODE_COLORS.to_vec();
        pool.shuffle(&mut rand::thread_rng());
        Self {
            points: Vec::new(),
            pool,
            next_id: 0,
        }
    }

    /// Allocate the next point with a color drawn at random from the pool.
    /// Yields `None` when the pool is exhausted, leaving the registry
    /// untouched.
    pub fn add(&mut self) -> Option<AttributedPoint> {
        if self.pool.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let picked = self.pool.remove(rand::thread_rng().gen_range(0..self.pool.len()));
        let point = AttributedPoint::new(id, picked);
        self.points.push(point);

        // Presentation order is by id after every mutation, regardless of
        // how the backing storage is appended to.
        self.points.sort_by_key(|p| p.id);
        Some(point)
    }

    /// Remove the point at the given presentation index, returning its
    /// node identifiers so the caller can detach the matching visual
    /// state. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<(NodeId, NodeId)> {
        if index >= self.points.len() {
            return None;
        }

        let removed = self.points.remove(index);
        self.pool.push(removed.color);
        Some((removed.point_node, removed.vector_node))
    }

    pub fn vector_for(&self, point_node: NodeId) -> Option<NodeId> {
        self.points
            .iter()
            .find(|p| p.point_node == point_node)
            .map(|p| p.vector_node)
    }

    pub fn color_for(&self, point_node: NodeId) -> Option<Rgb> {
        self.points
            .iter()
            .find(|p| p.point_node == point_node)
            .map(|p| p.color)
    }

    /// Presentation index of the point owning the given marker node.
    pub fn index_of(&self, point_node: NodeId) -> Option<usize> {
        self.points.iter().position(|p| p.point_node == point_node)
    }

    pub fn get(&self, index: usize) -> Option<&AttributedPoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[AttributedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True once every palette color is in use.
    pub fn is_full(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn available_colors(&self) -> usize {
        self.pool.len()
    }

    pub fn palette_size() -> usize {
        NODE_COLORS.len()
    }
}

impl Default for PointRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_invariant(registry: &PointRegistry) -> bool {
        registry.available_colors() + registry.len() == PointRegistry::palette_size()
    }

    #[test]
    fn test_add_assigns_monotonic_ids() {
        let mut registry = PointRegistry::new();
        let a = registry.add().unwrap();
        let b = registry.add().unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_live_colors_are_distinct() {
        let mut registry = PointRegistry::new();
        for _ in 0..PointRegistry::palette_size() {
            registry.add().unwrap();
        }
        for (i, a) in registry.points().iter().enumerate() {
            for b in registry.points().iter().skip(i + 1) {
                assert_ne!(a.color, b.color);
            }
        }
    }

    #[test]
    fn test_add_on_full_palette_is_rejected() {
        let mut registry = PointRegistry::new();
        for _ in 0..PointRegistry::palette_size() {
            assert!(registry.add().is_some());
        }
        assert!(registry.is_full());

        let before: Vec<_> = registry.points().to_vec();
        assert!(registry.add().is_none());
        assert_eq!(registry.points(), before.as_slice());
        assert!(pool_invariant(&registry));
    }

    #[test]
    fn test_pool_invariant_across_add_remove() {
        let mut registry = PointRegistry::new();
        assert!(pool_invariant(&registry));

        for _ in 0..5 {
            registry.add().unwrap();
            assert!(pool_invariant(&registry));
        }
        registry.remove(2).unwrap();
        assert!(pool_invariant(&registry));
        registry.remove(0).unwrap();
        assert!(pool_invariant(&registry));
        registry.add().unwrap();
        assert!(pool_invariant(&registry));
    }

    #[test]
    fn test_removed_color_returns_to_pool() {
        let mut registry = PointRegistry::new();
        let point = registry.add().unwrap();
        let available_before = registry.available_colors();
        registry.remove(0).unwrap();
        assert_eq!(registry.available_colors(), available_before + 1);

        // The returned color is drawable again.
        let mut seen = false;
        for _ in 0..PointRegistry::palette_size() {
            if registry.add().unwrap().color == point.color {
                seen = true;
            }
        }
        assert!(seen);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut registry = PointRegistry::new();
        assert!(registry.remove(0).is_none());
        registry.add().unwrap();
        assert!(registry.remove(5).is_none());
        assert_eq!(registry.len(), 1);
        assert!(pool_invariant(&registry));
    }

    #[test]
    fn test_remove_returns_node_ids() {
        let mut registry = PointRegistry::new();
        let point = registry.add().unwrap();
        let (marker, vector) = registry.remove(0).unwrap();
        assert_eq!(marker, point.point_node);
        assert_eq!(vector, point.vector_node);
        assert_eq!(marker.kind, NodeKind::Point);
        assert_eq!(vector.kind, NodeKind::Vector);
    }

    #[test]
    fn test_ids_stable_and_never_reused() {
        let mut registry = PointRegistry::new();
        registry.add().unwrap();
        let second = registry.add().unwrap();
        registry.remove(0).unwrap();

        assert_eq!(registry.get(0).unwrap().id, second.id);
        let third = registry.add().unwrap();
        assert!(third.id > second.id);
    }

    #[test]
    fn test_lookup_miss_is_explicit() {
        let mut registry = PointRegistry::new();
        registry.add().unwrap();
        let missing = NodeId { kind: NodeKind::Point, index: 999 };
        assert_eq!(registry.index_of(missing), None);
        assert_eq!(registry.vector_for(missing), None);
        assert_eq!(registry.color_for(missing), None);
    }

    #[test]
    fn test_vector_lookup() {
        let mut registry = PointRegistry::new();
        let point = registry.add().unwrap();
        assert_eq!(registry.vector_for(point.point_node), Some(point.vector_node));
        assert_eq!(registry.index_of(point.point_node), Some(0));
    }
}
