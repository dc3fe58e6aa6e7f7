//! Command-line tools for preparing dashboard data files: seal a
//! cleaned CSV export for publishing, or open one for inspection.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};
use eyre::{Result, WrapErr};
use tracing::info;

#[derive(Parser)]
#[command(name = "statura", version)]
#[command(about = "Data-preparation tools for the growth dashboard")]
#[command(group(ArgGroup::new("mode").required(true).args(["encrypt", "decrypt"])))]
struct Cli {
    /// Encrypt a data file; writes <FILE>.enc alongside it.
    #[arg(short, long, value_name = "FILE")]
    encrypt: Option<PathBuf>,

    /// Decrypt a data file and print the plaintext.
    #[arg(short, long, value_name = "FILE")]
    decrypt: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(path) = cli.encrypt {
        encrypt(&path)?;
    }
    if let Some(path) = cli.decrypt {
        decrypt(&path)?;
    }

    Ok(())
}

fn encrypt(path: &Path) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")?;
    let plaintext = std::fs::read(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let sealed = statura_data::seal(&plaintext, Some(&password))?;

    let out = PathBuf::from(format!("{}.enc", path.display()));
    std::fs::write(&out, sealed)
        .wrap_err_with(|| format!("failed to write {}", out.display()))?;

    info!(bytes = plaintext.len(), "sealed data file");
    println!("{} encrypted to {}", path.display(), out.display());
    Ok(())
}

fn decrypt(path: &Path) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")?;
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let plaintext = statura_data::open(&contents, Some(&password))?;
    print!("{}", String::from_utf8_lossy(&plaintext));
    Ok(())
}
