use js_sys::{Array, JSON, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::application::ports::ChartEngine;
use crate::domain::{
    chart::{ChartSpec, Gradient, TickFormat, TooltipFormat},
    errors::{AppError, AppResult},
    logging::LogComponent,
};
use crate::infrastructure::dom::canvas_by_id;
use crate::{log_debug, log_info};

#[wasm_bindgen]
extern "C" {
    /// Global `Chart` constructor provided by Chart.js.
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &ChartJs);
}

type FormatCallback = Closure<dyn FnMut(JsValue) -> String>;

/// A drawn chart. Owns the JS callbacks it references and destroys the chart
/// when dropped.
pub struct ChartHandle {
    chart: ChartJs,
    surface_id: String,
    _callbacks: Vec<FormatCallback>,
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.chart.destroy();
        log_debug!(LogComponent::Infrastructure("ChartJs"), "chart on #{} destroyed", self.surface_id);
    }
}

/// Chart.js backed engine drawing onto `<canvas>` anchors of `document`.
pub struct ChartJsEngine {
    document: Document,
}

impl ChartJsEngine {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ChartEngine for ChartJsEngine {
    type Handle = ChartHandle;

    fn draw(&mut self, surface_id: &str, spec: &ChartSpec) -> AppResult<ChartHandle> {
        let canvas = canvas_by_id(&self.document, surface_id)?;

        let json = spec.to_json().map_err(|e| AppError::ChartEngine(e.to_string()))?;
        let config = JSON::parse(&json).map_err(AppError::chart_engine)?;

        apply_gradients(&canvas, &config, spec)?;
        let callbacks = install_callbacks(&config, spec.tooltip, spec.y_ticks)?;

        let chart = ChartJs::new(&canvas, &config).map_err(AppError::chart_engine)?;
        log_info!(
            LogComponent::Infrastructure("ChartJs"),
            "{} chart drawn on #{} ({} points)",
            spec.kind,
            surface_id,
            spec.points().len()
        );

        Ok(ChartHandle { chart, surface_id: surface_id.to_string(), _callbacks: callbacks })
    }
}

/// Set `root.a.b.c = value`, creating missing intermediate objects.
pub fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> AppResult<()> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| AppError::ChartEngine("empty configuration path".to_string()))?;

    let mut target = root.clone();
    for key in parents {
        let key = JsValue::from_str(key);
        let mut next = Reflect::get(&target, &key).map_err(AppError::chart_engine)?;
        if next.is_undefined() || next.is_null() {
            next = Object::new().into();
            Reflect::set(&target, &key, &next).map_err(AppError::chart_engine)?;
        }
        target = next;
    }
    Reflect::set(&target, &JsValue::from_str(last), value).map_err(AppError::chart_engine)?;
    Ok(())
}

fn install_callbacks(
    config: &JsValue,
    tooltip: TooltipFormat,
    y_ticks: Option<TickFormat>,
) -> AppResult<Vec<FormatCallback>> {
    let mut callbacks = Vec::with_capacity(2);

    // Chart.js passes a tooltip item: `label` is the category, `raw` the data value.
    let label_cb: FormatCallback = Closure::wrap(Box::new(move |item: JsValue| {
        let label = read_prop(&item, "label").and_then(|v| v.as_string()).unwrap_or_default();
        let value = read_prop(&item, "raw").and_then(|v| v.as_f64()).unwrap_or(0.0);
        tooltip.label(&label, value)
    }) as Box<dyn FnMut(JsValue) -> String>);
    set_path(config, &["options", "plugins", "tooltip", "callbacks", "label"], label_cb.as_ref())?;
    callbacks.push(label_cb);

    if let Some(ticks) = y_ticks {
        let tick_cb: FormatCallback = Closure::wrap(Box::new(move |value: JsValue| {
            ticks.label(value.as_f64().unwrap_or(0.0))
        }) as Box<dyn FnMut(JsValue) -> String>);
        set_path(config, &["options", "scales", "y", "ticks", "callback"], tick_cb.as_ref())?;
        callbacks.push(tick_cb);
    }

    Ok(callbacks)
}

fn apply_gradients(canvas: &HtmlCanvasElement, config: &JsValue, spec: &ChartSpec) -> AppResult<()> {
    if spec.data.datasets.iter().all(|dataset| dataset.gradient.is_none()) {
        return Ok(());
    }

    let context = canvas
        .get_context("2d")
        .map_err(|e| AppError::browser("get_context(2d)", e))?
        .ok_or_else(|| AppError::Browser("2D context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::Browser("Failed to cast to 2D context".to_string()))?;

    let datasets: Array = read_prop(config, "data")
        .and_then(|data| read_prop(&data, "datasets"))
        .map(|datasets| datasets.unchecked_into::<Array>())
        .ok_or_else(|| AppError::ChartEngine("configuration has no datasets".to_string()))?;

    for (index, dataset) in spec.data.datasets.iter().enumerate() {
        if let Some(gradient) = dataset.gradient {
            let fill = vertical_gradient(&context, f64::from(canvas.height()), gradient)?;
            Reflect::set(&datasets.get(index as u32), &JsValue::from_str("backgroundColor"), &fill)
                .map_err(AppError::chart_engine)?;
        }
    }
    Ok(())
}

fn vertical_gradient(
    context: &CanvasRenderingContext2d,
    height: f64,
    gradient: Gradient,
) -> AppResult<CanvasGradient> {
    let fill = context.create_linear_gradient(0.0, 0.0, 0.0, height);
    fill.add_color_stop(0.0, &gradient.top.to_css())
        .map_err(|e| AppError::browser("add_color_stop", e))?;
    fill.add_color_stop(1.0, &gradient.bottom.to_css())
        .map_err(|e| AppError::browser("add_color_stop", e))?;
    Ok(fill)
}

fn read_prop(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}
