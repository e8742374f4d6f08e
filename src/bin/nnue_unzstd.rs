use std::path::PathBuf;

use clap::Parser;
use nnue_unzstd::{Options, decompress_in_place};

#[derive(Parser)]
#[command(name = "nnue-unzstd")]
#[command(about = "Decompress a zstd-compressed NNUE file in place, keeping a .zst.bak backup")]
struct Cli {
    /// NNUE file to decompress
    #[arg(default_value = "pikafish.nnue")]
    path: PathBuf,

    /// Expected NNUE version (hex)
    #[arg(long, value_parser = parse_hex_u32, default_value = "0x7AF32F20")]
    expected_version: u32,

    /// Expected NNUE architecture hash (hex)
    #[arg(long, value_parser = parse_hex_u32, default_value = "0x6E24D34A")]
    expected_hash: u32,

    /// Streaming read size in bytes (default 1 MiB)
    #[arg(long, default_value_t = 1_048_576)]
    chunk_size: usize,
}

fn parse_hex_u32(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex u32 `{s}`: {e}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut opts = Options::new(cli.path);
    opts.expected.version = cli.expected_version;
    opts.expected.hash = cli.expected_hash;
    opts.chunk_size = cli.chunk_size;

    decompress_in_place(&opts)?;
    Ok(())
}
