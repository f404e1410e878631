//! Stateful figure session exposed to JS.

use anyhow::{anyhow, Context, Result};
use js_sys::Array;
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::{from_value, to_value};
use vecplot_core::{
    autoscale_arrows, plot_line, plot_plane, plot_vec, plot_vecs, Color, ColorCycler, Figure,
    IntoVector, LineSettings, PlaneSettings, PlotError, VecSettings,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmFigure {
    figure: Figure,
    plane_colors: ColorCycler,
}

fn plot_err(err: PlotError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn bridge_err(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

fn parse_color(color: Option<String>) -> Result<Option<Color>> {
    color
        .map(|name| {
            name.parse::<Color>()
                .map_err(|err| anyhow!(err))
                .with_context(|| format!("Invalid color {name:?}"))
        })
        .transpose()
}

fn decode_settings<T: DeserializeOwned + Default>(value: JsValue, what: &str) -> Result<T> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(|err| anyhow!("Invalid {what}: {err}"))
}

#[wasm_bindgen]
impl WasmFigure {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmFigure {
        console_error_panic_hook::set_once();
        WasmFigure {
            figure: Figure::new(),
            plane_colors: ColorCycler::planes(),
        }
    }

    pub fn plot_vec(
        &mut self,
        vector: Vec<f64>,
        origin: Option<Vec<f64>>,
        color: Option<String>,
    ) -> Result<(), JsValue> {
        let mut settings = VecSettings::default();
        if let Some(color) = parse_color(color).map_err(bridge_err)? {
            settings.color = color;
        }
        if let Some(origin) = origin {
            settings.origin = Some(origin.into_vector().map_err(plot_err)?);
        }
        plot_vec(&mut self.figure, vector, &settings).map_err(plot_err)
    }

    /// Accepts an array of numeric arrays. Any element that is not an array
    /// of numbers rejects the whole call before anything is drawn.
    pub fn plot_vecs(&mut self, vectors: Array) -> Result<(), JsValue> {
        let vectors: Vec<Vec<f64>> = from_value(vectors.into())
            .map_err(|err| anyhow!("Invalid vectors: {err}"))
            .map_err(bridge_err)?;
        plot_vecs(&mut self.figure, vectors).map_err(plot_err)
    }

    pub fn plot_line(
        &mut self,
        direction: Vec<f64>,
        point: Vec<f64>,
        color: Option<String>,
    ) -> Result<(), JsValue> {
        let settings = LineSettings {
            color: parse_color(color).map_err(bridge_err)?,
            ..LineSettings::default()
        };
        plot_line(&mut self.figure, direction, point, &settings).map_err(plot_err)
    }

    /// `settings_val` may be `undefined` or a partial `PlaneSettings` object;
    /// an explicit `color` argument overrides the one in settings.
    pub fn plot_plane(
        &mut self,
        normal: Vec<f64>,
        offset: f64,
        color: Option<String>,
        settings_val: JsValue,
    ) -> Result<(), JsValue> {
        let mut settings: PlaneSettings =
            decode_settings(settings_val, "plane settings").map_err(bridge_err)?;
        if let Some(color) = parse_color(color).map_err(bridge_err)? {
            settings.color = Some(color);
        }
        plot_plane(
            &mut self.figure,
            &mut self.plane_colors,
            normal,
            offset,
            &settings,
        )
        .map_err(plot_err)
    }

    pub fn autoscale_arrows(&mut self) -> Result<(), JsValue> {
        autoscale_arrows(self.figure.gca()).map_err(plot_err)
    }

    pub fn view_init(&mut self, elevation: f64, azimuth: f64) {
        self.figure.gca().view_init(elevation, azimuth);
    }

    pub fn reset_plane_colors(&mut self) {
        self.plane_colors.reset();
    }

    pub fn clear(&mut self) {
        self.figure.clear();
    }

    /// Renders every axes; returns an array of frames.
    pub fn draw(&self) -> Result<JsValue, JsValue> {
        let frames = self.figure.draw();
        to_value(&frames).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl Default for WasmFigure {
    fn default() -> Self {
        Self::new()
    }
}
