use std::time::Duration;

use clap::Parser;
use meshi_common::{find_store, AcknowledgeOnly, LocalSearch, ReservationDesk, StoreSource};
use meshi_umatch::{catalog_file, cli, config, error, hints, interactive, logging, remote, search, submit};
use catalog_file::CatalogSource;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, stores, remote } => {
            println!("🔍 meshi-umatch - 店舗検索\n");

            let service = search::StoreSearch::resolve(stores.as_deref(), remote, &config).await?;
            println!("{}", search::run_search(&service, &query).await);
        }

        Commands::Stores { stores, remote } => {
            let source = CatalogSource::resolve(stores.as_deref(), remote, &config)?;
            let all = source.list_stores().await?;
            println!("🍽  店舗一覧（{}）: {}件\n", source.label(), all.len());
            for store in &all {
                println!(
                    "[{}] {}  味:{} 清潔:{} 雰囲気:{} 価格:{}",
                    store.id, store.store_name, store.taste, store.cleanliness, store.atmosphere, store.price
                );
            }
        }

        Commands::Submit { query, endpoint } => {
            let base = endpoint.unwrap_or_else(|| config.effective_api_base());
            let client = remote::HttpSearchClient::new(&base, config.timeout_seconds)?;
            submit::run_submit(&client, &query, !cli.verbose).await;
        }

        Commands::Hints { ticks, interval_ms, seed } => {
            let period = Duration::from_millis(interval_ms.unwrap_or(config.rotation_interval_ms).max(1));
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut rotator = config.rotator()?;
            let rotated = hints::run_hints(&mut rotator, &mut rng, ticks, period).await;
            debug!(rotated, "ローテーション終了");
        }

        Commands::Interactive { stores } => {
            let source = CatalogSource::resolve(stores.as_deref(), false, &config)?;
            let local = LocalSearch::load(&source).await?;
            let rotator = config.rotator()?;
            let mut rng = StdRng::from_entropy();
            let rotation = Duration::from_millis(config.rotation_interval_ms);
            tokio::task::block_in_place(|| {
                interactive::run_interactive(&local, rotator, &mut rng, rotation)
            })?;
        }

        Commands::Reserve { id, stores } => {
            let source = CatalogSource::resolve(stores.as_deref(), false, &config)?;
            let all = source.list_stores().await?;
            let store = find_store(&all, id)?;
            let ack = AcknowledgeOnly.reserve(store)?;
            println!("✔ {}", ack.message);
        }

        Commands::Config { set_api_base, set_stores, show } => {
            let mut config = config;

            if let Some(base) = set_api_base {
                config.set_api_base(base)?;
                println!("✔ APIベースURLを設定しました");
            }

            if let Some(path) = set_stores {
                config.set_stores_file(path)?;
                println!("✔ 店舗一覧ファイルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.effective_api_base());
                println!(
                    "  店舗一覧ファイル: {}",
                    config
                        .stores_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定（モックデータ）".to_string())
                );
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  ローテーション間隔: {}ms", config.rotation_interval_ms);
                println!("  プレースホルダー候補: {}", config.placeholder_hints.join(" / "));
            }
        }
    }

    Ok(())
}
