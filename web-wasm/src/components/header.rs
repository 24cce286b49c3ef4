//! ヘッダーコンポーネント（ロゴ）

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <img
                src="/logo.png"
                alt="Meshi Umatch Logo"
                width="400"
                height="400"
                class="logo"
            />
        </header>
    }
}
