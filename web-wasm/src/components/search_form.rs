//! トップ画面の検索フォーム
//!
//! - プレースホルダーを10秒ごとにランダムで切り替える
//! - 送信時は検索APIへPOSTし、結果はコンソールに記録するだけ

use std::cell::RefCell;
use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use meshi_common::{
    index_from_unit, submit_search, CancelScope, PlaceholderRotator, SubmitOutcome,
    PLACEHOLDER_ROTATION_MS,
};

use crate::api::search_api::FetchSearchClient;
use crate::diagnostics::{describe_js, log_error, log_info};

/// Math.random() による一様な候補選択
fn random_index(len: usize) -> usize {
    index_from_unit(js_sys::Math::random(), len)
}

#[component]
pub fn SearchForm() -> impl IntoView {
    let rotator = RefCell::new(PlaceholderRotator::with_default_hints());
    let (placeholder, set_placeholder) = signal(rotator.borrow().current().to_string());
    let (query, set_query) = signal(String::new());

    // コンポーネント破棄時にタイマーと通信結果を無効化する
    let scope = CancelScope::new();

    let tick_scope = scope.clone();
    let interval = set_interval_with_handle(
        move || {
            let next = rotator
                .borrow_mut()
                .rotate(&tick_scope, random_index)
                .map(str::to_string);
            if let Some(hint) = next {
                set_placeholder.set(hint);
            }
        },
        Duration::from_millis(PLACEHOLDER_ROTATION_MS as u64),
    );
    let interval = match interval {
        Ok(handle) => Some(handle),
        Err(e) => {
            log_error("プレースホルダーのタイマー登録に失敗しました:", &describe_js(&e));
            None
        }
    };

    let cleanup_scope = scope.clone();
    on_cleanup(move || {
        cleanup_scope.cancel();
        if let Some(handle) = interval {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        // フォーム送信のデフォルト動作（ページリロード）を防ぐ
        ev.prevent_default();

        let text = query.get_untracked();
        let scope = scope.clone();
        spawn_local(async move {
            let client = FetchSearchClient::default();
            match submit_search(&client, &text, &scope).await {
                SubmitOutcome::Completed(response) => {
                    log_info("バックエンドからの応答:", &response.0.to_string());
                }
                SubmitOutcome::Failed(message) => {
                    log_error("検索リクエストの送信に失敗しました:", &message);
                }
                SubmitOutcome::Skipped | SubmitOutcome::Discarded => {}
            }
        });
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <label for="search-input" class="sr-only">
                "自然言語で飲食店を検索"
            </label>
            <input
                type="text"
                id="search-input"
                placeholder=move || placeholder.get()
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                }
            />
            <button type="submit" class="search-button" aria-label="検索">
                "🔍"
            </button>
        </form>
    }
}
