//! Roster Builder CLI
//!
//! players.json → MessagePack+LZ4 roster cache, plus verification and inspection.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "roster_builder")]
#[command(about = "Build and check roster caches for hoop-guess", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build cache from a players.json export
    Build {
        /// Input JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output MsgPack+LZ4 file path
        #[arg(long)]
        out: PathBuf,

        /// Schema version
        #[arg(long, default_value = roster_builder::ROSTER_CACHE_SCHEMA_VERSION)]
        schema_version: String,

        /// Verify cache after building
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Check a cache file against a SHA256 checksum
    Verify {
        #[arg(long)]
        cache: PathBuf,

        #[arg(long)]
        checksum: String,
    },

    /// Print a summary of a cache file
    Inspect {
        #[arg(long)]
        cache: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { r#in, out, schema_version, verify, metadata } => {
            println!("🔨 Building roster cache...");
            println!("   Input:  {}", r#in.display());
            println!("   Output: {}", out.display());
            println!("   Schema: {}", schema_version);

            let meta = roster_builder::build_cache(&r#in, &out, &schema_version)?;

            print_metadata(&meta);

            if verify {
                verify_cache_integrity(&out, &meta.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Verify { cache, checksum } => verify_cache_integrity(&cache, &checksum)?,

        Commands::Inspect { cache } => {
            let loaded = roster_builder::load_cache(&cache)?;
            println!("📦 {}", cache.display());
            println!("   Schema:  {}", loaded.schema_version);
            println!("   Players: {}", loaded.count);
            for raw in loaded.players.iter().take(5) {
                println!("   - {} ({}, {})", raw.player, raw.pos, raw.team);
            }
            if loaded.players.len() > 5 {
                println!("   ... and {} more", loaded.players.len() - 5);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &roster_builder::CacheMetadata) {
    println!("\n✅ Cache built successfully!");
    println!("   Players:         {}", meta.player_count);
    println!(
        "   Original size:   {} bytes ({:.2} KB)",
        meta.original_size,
        meta.original_size as f64 / 1024.0
    );
    println!(
        "   Compressed size: {} bytes ({:.2} KB)",
        meta.compressed_size,
        meta.compressed_size as f64 / 1024.0
    );
    println!("   Compression:     {:.1}%", meta.compression_ratio * 100.0);
    println!("   Checksum:        {}", meta.checksum);
    println!("   Created:         {}", meta.created_at);
    if meta.zero_salary_count > 0 {
        println!("   ⚠️  {} players without a parsable salary", meta.zero_salary_count);
    }
    for name in &meta.duplicate_names {
        println!("   ⚠️  duplicate name: {}", name);
    }
}

#[cfg(feature = "cli")]
fn verify_cache_integrity(cache_path: &Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying cache integrity...");
    if roster_builder::verify_cache(cache_path, checksum)? {
        println!("✅ Cache verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Cache verification failed - checksum mismatch!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &Path, meta: &roster_builder::CacheMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("roster_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
