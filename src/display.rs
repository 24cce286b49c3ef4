//! 端末向けの検索結果表示

use meshi_common::{ResultsView, StoreCard, EXAMPLE_HINT};

/// カード1枚分の表示
pub fn render_card(card: &StoreCard) -> String {
    let mut lines = vec![format!("[{}] {}", card.key, card.title)];
    if !card.appeal_text.is_empty() {
        lines.push(format!("    {}", card.appeal_text));
    }
    if !card.href.is_empty() {
        lines.push(format!("    🔗 {}", card.href));
    }
    if let Some(src) = &card.image_src {
        lines.push(format!("    🖼  {}", src));
    }
    lines.join("\n")
}

/// 検索結果全体の表示
pub fn render_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Cards(cards) => cards
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n\n"),
        ResultsView::Empty(message) => format!("{}\n{}", message.as_str(), EXAMPLE_HINT),
    }
}
