pub mod registry;
pub mod sum;
pub mod transform;

pub use registry::{AttributedPoint, NodeId, NodeKind, PointRegistry, Rgb};
pub use sum::SumState;
pub use transform::{PlanePoint, PlaneTransform};
