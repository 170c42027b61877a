//! Display seam
//!
//! The core never draws anything. A collaborator that wants to show a solid
//! implements [`ShapeDisplay`] and receives the generated mesh together with
//! its metrics. Two implementations live here: [`ViewExtents`] summarises
//! the four orthographic views and [`MeshBuffers`] packs the mesh into flat
//! buffers that can be uploaded to a GPU as-is.

use geoview_math::Vec3;

use crate::geometry::{project, SolidGeometry, View};
use crate::metrics::Metrics;

/// Something that turns a solid into a displayable form
pub trait ShapeDisplay {
    type Output;

    fn display(&mut self, geometry: &SolidGeometry, metrics: &Metrics) -> Self::Output;
}

/// Width and height of one projected view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewExtent {
    pub view: View,
    pub width: f64,
    pub height: f64,
    /// Area enclosed by the view's silhouette
    pub silhouette_area: f64,
}

/// Reports the extent of every orthographic view
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewExtents;

impl ShapeDisplay for ViewExtents {
    type Output = [ViewExtent; 4];

    fn display(&mut self, geometry: &SolidGeometry, _metrics: &Metrics) -> Self::Output {
        View::ALL.map(|view| {
            let projection = project(geometry, view);
            let bounds = projection.bounds();
            ViewExtent {
                view,
                width: bounds.width(),
                height: bounds.height(),
                silhouette_area: projection.silhouette_area(),
            }
        })
    }
}

/// Flat vertex and index buffers of a mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub triangle_indices: Vec<u32>,
    pub line_indices: Vec<u32>,
}

impl MeshData {
    /// Raw bytes of the position buffer
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn triangle_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangle_indices)
    }

    pub fn line_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_indices)
    }
}

/// Packs meshes into GPU-ready buffers
///
/// Buffers are reused across calls to avoid reallocating when the same
/// collaborator shows a sequence of solids.
#[derive(Debug, Default)]
pub struct MeshBuffers {
    data: MeshData,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &MeshData {
        &self.data
    }
}

impl ShapeDisplay for MeshBuffers {
    type Output = MeshData;

    fn display(&mut self, geometry: &SolidGeometry, _metrics: &Metrics) -> Self::Output {
        self.data.positions.clear();
        self.data.positions.extend_from_slice(&geometry.vertices);
        self.data.triangle_indices.clear();
        self.data
            .triangle_indices
            .extend(geometry.triangles.iter().flatten().copied());
        self.data.line_indices.clear();
        self.data
            .line_indices
            .extend(geometry.edges.iter().flatten().copied());
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::generate_solid;
    use crate::metrics::compute_metrics;
    use crate::params::ShapeParams;

    fn show<D: ShapeDisplay>(display: &mut D, params: ShapeParams) -> D::Output {
        let geometry = generate_solid(&params);
        let metrics = compute_metrics(&params);
        display.display(&geometry, &metrics)
    }

    #[test]
    fn test_view_extents_of_box() {
        let extents = show(&mut ViewExtents, ShapeParams::rectangular_prism(4.0, 6.0, 3.0));
        assert_eq!(extents[0].view, View::Top);
        assert_eq!((extents[0].width, extents[0].height), (4.0, 3.0));
        assert_eq!((extents[1].width, extents[1].height), (4.0, 6.0));
        assert_eq!((extents[2].width, extents[2].height), (3.0, 6.0));
        assert!((extents[1].silhouette_area - 24.0).abs() < 1e-6);
    }

    #[test]
    fn test_mesh_buffers_sizes() {
        let mut buffers = MeshBuffers::new();
        let data = show(&mut buffers, ShapeParams::cube(2.0));
        assert_eq!(data.positions.len(), 8);
        assert_eq!(data.triangle_indices.len(), 36);
        assert_eq!(data.line_indices.len(), 24);
        assert_eq!(data.position_bytes().len(), 8 * 12);
        assert_eq!(data.triangle_index_bytes().len(), 36 * 4);
        assert_eq!(data.line_index_bytes().len(), 24 * 4);
    }

    #[test]
    fn test_mesh_buffers_are_reused() {
        let mut buffers = MeshBuffers::new();
        show(&mut buffers, ShapeParams::sphere(2.0));
        let data = show(&mut buffers, ShapeParams::tesseract(2.0));
        assert_eq!(data.positions.len(), 16);
        assert_eq!(buffers.data(), &data);
    }
}
