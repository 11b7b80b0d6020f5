//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js` and are evaluated as
//! globals (no ES modules), exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize data and call those globals.

// Embed the D3 chart JS files at compile time
static BAROGRAPH_JS: &str = include_str!("../assets/js/barograph.js");
static POLAR_CHART_JS: &str = include_str!("../assets/js/polar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SSP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderBarograph(...)` via
/// `function` declarations. They are evaluated at global scope via a
/// separate indirect `eval()` once D3 is ready, then promoted to `window.*`
/// so later render calls can see them.
pub fn init_charts() {
    let all_js = [BAROGRAPH_JS, POLAR_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__sspChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__sspChartScripts);
                    delete window.__sspChartScripts;
                    if (typeof renderBarograph !== 'undefined') window.renderBarograph = renderBarograph;
                    if (typeof renderPolarChart !== 'undefined') window.renderPolarChart = renderPolarChart;
                    window.__sspChartsReady = true;
                    console.log('SSP charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn render_when_ready(function_name: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sspChartsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[SSP] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the barograph line chart.
///
/// Polls until D3 has loaded, the chart scripts are initialized and the
/// container DOM element exists before rendering.
pub fn render_barograph(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarograph", container_id, data_json, config_json);
}

/// Render the polar nautical chart (course/wind/wave/current arrows).
pub fn render_polar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPolarChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
