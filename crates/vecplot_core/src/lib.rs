//! The `vecplot_core` crate draws vectors, lines and planes in 2D or 3D onto
//! a retained-mode canvas.
//!
//! Key components:
//! - **Vectors**: `Vector` (2D or 3D) and the `IntoVector` conversion used at every call boundary.
//! - **Renderers**: `plot_vec`, `plot_vecs`, `plot_line`, `plot_plane`, and `autoscale_arrows`.
//! - **Canvas**: `Figure`/`Axes` holding artists, with limits, aspect and view angles.
//! - **Rendering**: the `Renderable` trait, 3D projection, and `Frame`s of draw commands.
//! - **Colors**: fixed palettes and the caller-owned `ColorCycler` used for planes.
pub mod artist;
pub mod autoscale;
pub mod canvas;
pub mod color;
pub mod error;
pub mod plot;
pub mod projection;
pub mod render;
pub mod traits;
pub mod vector;

pub use autoscale::autoscale_arrows;
pub use canvas::{Aspect, Axes, AxesKind, Figure};
pub use color::{Color, ColorCycler};
pub use error::{PlotError, PlotResult};
pub use plot::{
    plot_line, plot_plane, plot_vec, plot_vecs, AxisRange, LineSettings, PlaneSettings,
    VecSettings,
};
pub use render::{DrawCommand, Frame};
pub use traits::{IntoVector, Renderable};
pub use vector::Vector;
