//! Geometry collection

use super::{Geometry, Shape};
use crate::error::Result;
use crate::types::{BoundingBox, ShapeType};
use indexmap::IndexMap;

/// A heterogeneous list of shapes.
///
/// Nested collections are flattened on construction, so members are never
/// collections themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Shape>,
    bbox: BoundingBox,
}

impl GeometryCollection {
    /// Create a collection. Fails with `EmptyGeometry` if there is no member.
    pub fn new(geometries: Vec<Shape>) -> Result<Self> {
        let mut flat = Vec::with_capacity(geometries.len());
        for shape in geometries {
            match shape {
                Shape::GeometryCollection(inner) => flat.extend(inner.geometries),
                other => flat.push(other),
            }
        }

        let bbox = BoundingBox::from_boxes(flat.iter().map(|s| s.bounding_box()))?;
        Ok(GeometryCollection {
            geometries: flat,
            bbox,
        })
    }

    pub fn geometries(&self) -> &[Shape] {
        &self.geometries
    }

    /// Distinct member shape types, in order of first appearance
    pub fn shape_types(&self) -> Vec<ShapeType> {
        let mut types = Vec::new();
        for ty in self.geometries.iter().filter_map(Shape::shape_type) {
            if !types.contains(&ty) {
                types.push(ty);
            }
        }
        types
    }

    /// Group members by shape type, keeping first-appearance order
    pub fn grouped(&self) -> IndexMap<ShapeType, GeometryCollection> {
        let mut members: IndexMap<ShapeType, Vec<Shape>> = IndexMap::new();
        for shape in &self.geometries {
            if let Some(ty) = shape.shape_type() {
                members.entry(ty).or_default().push(shape.clone());
            }
        }

        members
            .into_iter()
            .map(|(ty, shapes)| {
                let bbox = BoundingBox::from_boxes(shapes.iter().map(|s| s.bounding_box()))
                    .unwrap_or(self.bbox);
                (
                    ty,
                    GeometryCollection {
                        geometries: shapes,
                        bbox,
                    },
                )
            })
            .collect()
    }
}

impl Geometry for GeometryCollection {
    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    fn content_length(&self) -> i32 {
        self.geometries.iter().map(|s| s.content_length()).sum()
    }

    fn count(&self) -> usize {
        self.geometries.iter().map(|s| s.count()).sum()
    }

    fn wkt_type(&self) -> &'static str {
        "GEOMETRYCOLLECTION"
    }
}
