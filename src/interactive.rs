//! 対話式の店舗検索
//!
//! 入力のたびに読み込み済みの一覧を絞り込んで表示する。
//! プロンプトにはローテーション中のプレースホルダーを表示する。
//!
//! 操作: 文字列を入力で絞り込み / `:r <ID>` で予約 / `:q` で終了

use std::time::{Duration, Instant};

use dialoguer::Input;
use meshi_common::{
    find_store, AcknowledgeOnly, CancelScope, LocalSearch, PlaceholderRotator,
    ReservationDesk, ResultsView,
};
use rand::Rng;

use crate::display::render_results;
use crate::error::{MeshiError, Result};

/// 対話コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// クエリで絞り込み（空文字も有効）
    Filter(String),
    /// 予約
    Reserve(u32),
    /// 終了
    Quit,
    /// 解釈できない入力
    Unknown(String),
}

/// 入力行をコマンドに変換
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed == ":q" {
        return Command::Quit;
    }

    if let Some(rest) = trimmed.strip_prefix(":r") {
        return match rest.trim().parse::<u32>() {
            Ok(id) => Command::Reserve(id),
            Err(_) => Command::Unknown(trimmed.to_string()),
        };
    }

    if trimmed.starts_with(':') {
        return Command::Unknown(trimmed.to_string());
    }

    // 検索語はトリムせず入力どおり
    Command::Filter(line.to_string())
}

/// 1コマンド分の処理結果（表示文字列）
pub fn handle_command(search: &LocalSearch, command: &Command) -> Option<String> {
    match command {
        Command::Filter(query) => {
            let filtered = search.filter(query);
            Some(render_results(&ResultsView::from_query(&filtered, query)))
        }
        Command::Reserve(id) => {
            let message = find_store(search.stores(), *id)
                .and_then(|store| AcknowledgeOnly.reserve(store))
                .map(|ack| format!("✔ {}", ack.message))
                .unwrap_or_else(|e| format!("✗ {}", e));
            Some(message)
        }
        Command::Unknown(raw) => Some(format!("不明なコマンド: {}（:r <ID> / :q）", raw)),
        Command::Quit => None,
    }
}

/// 対話ループ
pub fn run_interactive<R: Rng>(
    search: &LocalSearch,
    mut rotator: PlaceholderRotator,
    rng: &mut R,
    rotation: Duration,
) -> Result<()> {
    let scope = CancelScope::new();
    let mut last_rotation = Instant::now();

    println!("🍜 {}件の店舗を読み込みました", search.stores().len());
    println!("操作: [文字列]絞り込み [:r ID]予約 [:q]終了");
    println!("---\n");

    loop {
        // 経過時間に応じてプレースホルダーを切り替える
        while !rotation.is_zero() && last_rotation.elapsed() >= rotation {
            rotator.rotate(&scope, |n| rng.gen_range(0..n));
            last_rotation += rotation;
        }

        let line: String = Input::new()
            .with_prompt(rotator.current())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| MeshiError::Prompt(e.to_string()))?;

        let command = parse_command(&line);
        match handle_command(search, &command) {
            Some(output) => println!("{}\n", output),
            None => break,
        }
    }

    scope.cancel();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshi_common::mock_stores;

    fn search() -> LocalSearch {
        LocalSearch::new(mock_stores()).expect("作成失敗")
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":r 2"), Command::Reserve(2));
        assert_eq!(parse_command(":r x"), Command::Unknown(":r x".to_string()));
        assert_eq!(parse_command(":x"), Command::Unknown(":x".to_string()));
        assert_eq!(parse_command("ラーメン"), Command::Filter("ラーメン".to_string()));
        assert_eq!(parse_command(""), Command::Filter(String::new()));
    }

    #[test]
    fn test_handle_filter() {
        let output = handle_command(&search(), &Command::Filter("nonexistent".to_string()))
            .expect("表示があるべき");
        assert!(output.starts_with("一致するお店が見つかりませんでした。"));
    }

    #[test]
    fn test_handle_empty_filter_lists_all() {
        let output = handle_command(&search(), &Command::Filter(String::new()))
            .expect("表示があるべき");
        assert!(output.contains("[1]"));
        assert!(output.contains("[3]"));
    }

    #[test]
    fn test_handle_reserve() {
        let output = handle_command(&search(), &Command::Reserve(3)).expect("表示があるべき");
        assert_eq!(output, "✔ Tailwindビストロ を予約します");

        let missing = handle_command(&search(), &Command::Reserve(42)).expect("表示があるべき");
        assert!(missing.starts_with("✗"));
    }

    #[test]
    fn test_handle_quit() {
        assert!(handle_command(&search(), &Command::Quit).is_none());
    }
}
