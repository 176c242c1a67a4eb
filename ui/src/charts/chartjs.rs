//! Bindings to the Chart.js global loaded by the page.

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

use super::{ChartBackend, ChartError, LineChartConfig, Series};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJs;

impl ChartBackend for ChartJs {
    /// The `Chart` instance returned by `new Chart(canvas, config)`.
    type Chart = JsValue;

    fn create(&self, canvas_id: &str, config: &LineChartConfig) -> Result<JsValue, ChartError> {
        let constructor = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(ChartError::LibraryMissing)?;

        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(canvas_id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .ok_or_else(|| ChartError::CanvasMissing(canvas_id.to_string()))?;

        let config = to_js(config)?;
        Reflect::construct(&constructor, &Array::of2(&canvas, &config)).map_err(js_error)
    }

    fn update(&self, chart: &mut JsValue, series: &Series) -> Result<(), ChartError> {
        let data = Reflect::get(chart, &JsValue::from_str("config"))
            .and_then(|config| Reflect::get(&config, &JsValue::from_str("data")))
            .map_err(js_error)?;
        Reflect::set(&data, &JsValue::from_str("labels"), &to_js(&series.labels)?)
            .map_err(js_error)?;

        let dataset = Reflect::get(&data, &JsValue::from_str("datasets"))
            .and_then(|datasets| Reflect::get_u32(&datasets, 0))
            .map_err(js_error)?;
        Reflect::set(&dataset, &JsValue::from_str("data"), &to_js(&series.data)?)
            .map_err(js_error)?;

        let redraw = Reflect::get(chart, &JsValue::from_str("update"))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| ChartError::Js("chart has no update()".into()))?;
        redraw.call0(chart).map_err(js_error)?;
        Ok(())
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, ChartError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|err| ChartError::Config(err.to_string()))
}

fn js_error(value: JsValue) -> ChartError {
    ChartError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
