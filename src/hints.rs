//! 端末でのプレースホルダーローテーション
//!
//! `tokio::time::interval` で一定間隔ごとに候補を選び直す。
//! Ctrl+C で止めた場合は、それまでに切り替えた回数を返す。

use std::future::Future;
use std::time::Duration;

use meshi_common::{CancelScope, PlaceholderRotator};
use rand::Rng;
use tracing::{debug, info};

/// 指定回数だけローテーションする
///
/// # Arguments
/// * `rotator` - ローテーション状態（先頭候補が表示済み）
/// * `rng` - 一様乱数源
/// * `ticks` - 切り替え回数
/// * `period` - 切り替え間隔
/// * `scope` - 破棄されたら即終了
/// * `on_hint` - 切り替えごとに呼ばれる
///
/// # Returns
/// 実際に切り替えた回数
pub async fn rotate_hints<R, F>(
    rotator: &mut PlaceholderRotator,
    rng: &mut R,
    ticks: usize,
    period: Duration,
    scope: &CancelScope,
    mut on_hint: F,
) -> usize
where
    R: Rng,
    F: FnMut(&str),
{
    let mut interval = tokio::time::interval(period);
    // 1回目の tick は即座に完了するので読み捨てる
    interval.tick().await;

    let mut rotated = 0;
    while rotated < ticks {
        interval.tick().await;

        match rotator.rotate(scope, |n| rng.gen_range(0..n)) {
            Some(hint) => on_hint(hint),
            None => {
                debug!("スコープ破棄済みのためローテーション終了");
                break;
            }
        }
        rotated += 1;
    }

    rotated
}

/// `stop` が完了するまでローテーションする
///
/// # Returns
/// 実際に切り替えた回数（途中で止めた場合もそれまでの回数）
pub async fn rotate_until<R, F, S>(
    rotator: &mut PlaceholderRotator,
    rng: &mut R,
    ticks: usize,
    period: Duration,
    stop: S,
    mut on_hint: F,
) -> usize
where
    R: Rng,
    F: FnMut(&str),
    S: Future<Output = ()>,
{
    let scope = CancelScope::new();
    let mut rotated = 0;

    tokio::select! {
        _ = rotate_hints(rotator, rng, ticks, period, &scope, |hint| {
            rotated += 1;
            on_hint(hint);
        }) => {}
        _ = stop => {
            debug!("停止要求を受信");
        }
    }

    scope.cancel();
    rotated
}

/// `hints` サブコマンド本体（Ctrl+C で停止）
pub async fn run_hints<R: Rng>(
    rotator: &mut PlaceholderRotator,
    rng: &mut R,
    ticks: usize,
    period: Duration,
) -> usize {
    println!("💬 {}", rotator.current());

    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C を受信、ローテーションを停止します");
        }
    };

    rotate_until(rotator, rng, ticks, period, ctrl_c, |hint| println!("💬 {}", hint)).await
}
