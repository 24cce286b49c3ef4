//! ブラウザコンソールへの診断ログ
//!
//! 検索まわりの失敗は画面に出さず、ここにだけ記録する。

use wasm_bindgen::JsValue;
use web_sys::console;

pub fn log_info(label: &str, detail: &str) {
    console::log_2(&JsValue::from_str(label), &JsValue::from_str(detail));
}

pub fn log_error(label: &str, detail: &str) {
    console::error_2(&JsValue::from_str(label), &JsValue::from_str(detail));
}

/// JsValue のエラーを文字列化
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_describe_js_string() {
        assert_eq!(describe_js(&JsValue::from_str("HTTP error! status: 500")), "HTTP error! status: 500");
    }

    #[wasm_bindgen_test]
    fn wasm_describe_js_non_string() {
        let described = describe_js(&JsValue::from_f64(42.0));
        assert!(described.contains("42"));
    }
}
