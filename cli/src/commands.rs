//! Hash Command
//!
//! Decodes the hex inputs, then evaluates every header through one shared
//! cache so the seed's matrix list is derived exactly once.

use anyhow::{Context, Result};
use tensority::Cache;

/// Parse a 64-hex-character argument into 32 bytes.
fn decode32(label: &str, input: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(input.trim_start_matches("0x"))
        .with_context(|| format!("{label} is not valid hex: {input}"))?;
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("{label} must be exactly 32 bytes"))
}

/// Hash each header under `seed` and print `digest  header` lines.
pub fn hash_headers(seed: &str, headers: &[String]) -> Result<()> {
    let seed = decode32("seed", seed)?;
    let cache = Cache::with_capacity(1);

    for header_hex in headers {
        let header = decode32("header", header_hex)?;
        let digest = cache.hash(&header, &seed);
        println!("{}  {}", hex::encode(digest), header_hex);
    }

    Ok(())
}
