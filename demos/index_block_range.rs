use alloy_chains::Chain;
/// Example demonstrating how to index ERC-20 transfers over a block range
///
/// This example shows how to:
/// 1. Fetch a token's Transfer logs with `eth_getLogs`
/// 2. Convert RPC logs into the indexer's input type
/// 3. Index them with the block timestamp cache enabled
/// 4. Bound the whole batch with a caller deadline
///
/// Run with:
/// ```bash
/// CHAIN_ID=1 \
/// RPC_URL=https://eth.llamarpc.com \
/// TOKEN_ADDRESS=0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48 \
/// BLOCK_COUNT=5 \
/// cargo run --example index_block_range
/// ```
///
/// Note: CHAIN_ID is passed in rather than queried so that errors and logs
/// name the chain even when the provider is unreachable.
use alloy_primitives::Address;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::Filter;
use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use transferscan::{
    IndexerConfigBuilder, InterfaceSchema, LookupContext, RawLog, RpcBlockProvider,
    TransferIndexer, TRANSFER_SIGNATURE_HASH,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    dotenvy::dotenv().ok();

    // Read configuration from environment
    let rpc_url = env::var("RPC_URL").context("RPC_URL environment variable not set")?;
    let chain_id: u64 = env::var("CHAIN_ID")
        .unwrap_or_else(|_| "1".to_string())
        .parse()
        .context("CHAIN_ID must be a number")?;
    let token: Address = env::var("TOKEN_ADDRESS")
        .unwrap_or_else(|_| "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string())
        .parse()
        .context("TOKEN_ADDRESS must be a hex address")?;
    let block_count: u64 = env::var("BLOCK_COUNT")
        .unwrap_or_else(|_| "5".to_string())
        .parse()
        .context("BLOCK_COUNT must be a number")?;

    let chain = Chain::from_id(chain_id);
    let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);

    let to_block = provider.get_block_number().await?;
    let from_block = to_block.saturating_sub(block_count.saturating_sub(1));

    info!(chain_id = %chain, %token, from_block, to_block, "Fetching transfer logs");

    let filter = Filter::new()
        .address(token)
        .event_signature(*TRANSFER_SIGNATURE_HASH)
        .from_block(from_block)
        .to_block(to_block);
    let logs = provider
        .get_logs(&filter)
        .await?
        .iter()
        .map(RawLog::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    // Many transfers share a block, so the cache saves most lookups
    let config = IndexerConfigBuilder::new()
        .lookup_timeout(Duration::from_secs(10))
        .cache_block_timestamps(true)
        .token_address(token)
        .build();
    let schema = Arc::new(InterfaceSchema::erc20()?);
    let indexer = TransferIndexer::with_schema(RpcBlockProvider::new(provider), schema, config);

    let ctx = LookupContext::new().with_timeout(Duration::from_secs(120));
    let records = indexer.index_logs(chain, &logs, &ctx).await?;

    println!("\n=== Transfers of {token} ===");
    println!("Blocks: [{from_block}, {to_block}] (inclusive)");
    println!("Logs fetched: {}", logs.len());
    println!("Transfers indexed: {}", records.len());
    for record in records.iter().take(20) {
        let when = record
            .timestamp
            .to_datetime()
            .map_or_else(|| record.timestamp.to_string(), |dt| dt.to_rfc3339());
        println!("{when}  {} -> {}  {}", record.from, record.to, record.value);
    }
    if records.len() > 20 {
        println!("... and {} more", records.len() - 20);
    }

    Ok(())
}
