use crate::error::PlotResult;
use crate::render::{ArrowEndpoints, DrawCommand, RenderContext};
use crate::vector::Vector;

/// Anything that can be turned into a 2D or 3D vector at a call boundary.
/// Conversion is where unsupported lengths and non-numeric components are rejected.
pub trait IntoVector {
    fn into_vector(self) -> PlotResult<Vector>;
}

/// An artifact that can draw itself onto a canvas.
pub trait Renderable {
    /// Emits draw commands for the current view.
    /// Called on every redraw; 3D artifacts must re-project through `ctx` each time.
    fn render(&self, ctx: &RenderContext, out: &mut Vec<DrawCommand>);

    /// Native endpoints when this artifact is an arrow.
    fn arrow_endpoints(&self) -> Option<ArrowEndpoints> {
        None
    }
}
