//! Value types shared by the geometry model, the projector and the encoder

mod bounds;
mod point;
mod shape_type;

pub use bounds::BoundingBox;
pub use point::Point;
pub use shape_type::ShapeType;
