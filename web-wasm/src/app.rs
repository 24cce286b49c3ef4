//! メインアプリケーションコンポーネント
//!
//! パスで画面を切り替える:
//! - `/`     トップ画面（ロゴ + 検索フォーム）
//! - `/view` 検索結果画面

use leptos::prelude::*;
use crate::components::{
    header::Header,
    search_form::SearchForm,
    results_page::ResultsPage,
};
use crate::diagnostics::{describe_js, log_error};

/// 画面
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Results,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/view" => Page::Results,
            _ => Page::Landing,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Results => "/view",
        }
    }
}

/// 現在のURLから画面を判定
fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Page::from_path(&path))
        .unwrap_or(Page::Landing)
}

/// 画面遷移（フルナビゲーション）
pub fn navigate(page: Page) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(page.path()) {
        log_error("画面遷移に失敗しました:", &describe_js(&e));
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let page = current_page();

    view! {
        <div class="container">
            {match page {
                Page::Landing => view! {
                    <main class="landing">
                        <Header />
                        <SearchForm />
                    </main>
                }
                .into_any(),
                Page::Results => view! { <ResultsPage /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Landing);
        assert_eq!(Page::from_path(""), Page::Landing);
        assert_eq!(Page::from_path("/view"), Page::Results);
        assert_eq!(Page::from_path("/view/"), Page::Results);
        assert_eq!(Page::from_path("/unknown"), Page::Landing);
    }

    #[test]
    fn test_page_path_roundtrip() {
        for page in [Page::Landing, Page::Results] {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}
