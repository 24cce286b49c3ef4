//! 店舗一覧コンポーネント

use leptos::prelude::*;
use meshi_common::{
    reservation_message, EmptyMessage, ResultsView, StoreCard, EXAMPLE_HINT, LINK_REL,
    LINK_TARGET,
};

#[component]
pub fn StoreList(results: Memo<ResultsView>) -> impl IntoView {
    move || match results.get() {
        ResultsView::Cards(cards) => view! {
            <ul class="store-list">
                <For
                    each=move || cards.clone()
                    key=|card| card.key
                    children=|card| view! { <StoreCardItem card=card /> }
                />
            </ul>
        }
        .into_any(),
        ResultsView::Empty(message) => view! { <EmptyState message=message /> }.into_any(),
    }
}

#[component]
fn StoreCardItem(card: StoreCard) -> impl IntoView {
    let store_name = card.title.clone();
    let image_alt = card.image_alt;
    let image = card
        .image_src
        .map(|src| view! { <img src=src alt=image_alt /> });

    // 予約ボタンがクリックされたときの処理
    let on_reserve = move |_| {
        gloo::dialogs::alert(&reservation_message(&store_name));
    };

    view! {
        <li class="store-card">
            // 1. 画像
            <div class="store-image">
                {image}
            </div>
            // 2. 情報
            <div class="store-info">
                <a href=card.href target=LINK_TARGET rel=LINK_REL class="store-link">
                    <h3>{card.title}</h3>
                </a>
                <p class="appeal-point">{card.appeal_text}</p>
            </div>
            // 3. 予約ボタン
            <div class="store-actions">
                <button type="button" class="btn btn-primary" on:click=on_reserve>
                    "予約する"
                </button>
            </div>
        </li>
    }
}

/// 結果が0件の場合のメッセージ
#[component]
fn EmptyState(message: EmptyMessage) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-message">{message.as_str()}</p>
            <p class="text-muted">{EXAMPLE_HINT}</p>
        </div>
    }
}
