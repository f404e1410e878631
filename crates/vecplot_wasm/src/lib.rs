//! WASM bindings for vecplot.
//!
//! A `WasmFigure` session owns the canvas and the plane color cycler; JS
//! feeds it plot calls and reads back rendered frames.

mod figure;

pub use figure::WasmFigure;
