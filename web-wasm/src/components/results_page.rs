//! 検索結果画面
//!
//! 店舗一覧をページ読み込み時に1回だけ取得し、入力のたびに同期で絞り込む。
//! 取得元は `/api/stores` の代わりにモックデータ。

use leptos::prelude::*;
use leptos::task::spawn_local;
use meshi_common::{CancelScope, LocalSearch, MockStoreSource, ResultsView};

use crate::app::{navigate, Page};
use crate::components::store_list::StoreList;
use crate::diagnostics::log_error;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let (search, set_search) = signal(LocalSearch::default());
    let (search_query, set_search_query) = signal(String::new());

    let scope = CancelScope::new();

    let load_scope = scope.clone();
    spawn_local(async move {
        match LocalSearch::load(&MockStoreSource).await {
            Ok(loaded) => {
                load_scope.run(|| set_search.set(loaded));
            }
            Err(e) => {
                if !load_scope.is_cancelled() {
                    log_error("データの取得に失敗しました:", &e.to_string());
                }
            }
        }
    });

    on_cleanup(move || scope.cancel());

    let results = Memo::new(move |_| {
        let query = search_query.get();
        search.with(|s| ResultsView::from_query(&s.filter(&query), &query))
    });

    view! {
        <main class="results-page">
            <h1 class="page-title">"検索結果"</h1>
            <button class="btn btn-secondary" on:click=move |_| navigate(Page::Landing)>
                "← トップに戻る"
            </button>

            <div class="filter-bar">
                <input
                    type="text"
                    placeholder="お店の名前、アピールポイント..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| {
                        set_search_query.set(event_target_value(&ev));
                    }
                />
            </div>

            <StoreList results=results />
        </main>
    }
}
