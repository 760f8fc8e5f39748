#![cfg(target_arch = "wasm32")]
use score_dashboard_wasm::domain::scores::{AggregateTotals, RecordSet, split_series};
use score_dashboard_wasm::infrastructure::http::decode_scores_payload;
use score_dashboard_wasm::infrastructure::rendering::{CanvasRenderer, register_chart_renderers};
use score_dashboard_wasm::presentation::{line_chart, pie_chart};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn renders_line_and_pie() {
    register_chart_renderers();
    let records = decode_scores_payload(
        r#"{"status":"OK","data":[
            {"id":1,"created_at":"2024-05-01T09:00:00","score":10},
            {"id":2,"created_at":"2024-05-01T10:00:00","score":-5},
            {"id":3,"created_at":"2024-05-01T11:00:00","score":0}
        ]}"#,
    )
    .unwrap();

    let target = canvas(400, 200);
    CanvasRenderer::render(&target, &line_chart(&split_series(&records))).unwrap();
    CanvasRenderer::render(&target, &pie_chart(&AggregateTotals::new(10, 5))).unwrap();
}

#[wasm_bindgen_test]
fn renders_placeholders_for_empty_data() {
    register_chart_renderers();
    let target = canvas(200, 200);
    CanvasRenderer::render(&target, &line_chart(&split_series(&RecordSet::new()))).unwrap();
    CanvasRenderer::render(&target, &pie_chart(&AggregateTotals::default())).unwrap();
}
