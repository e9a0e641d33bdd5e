//! Command-line OBJ to binary STL converter.
//!
//! ```text
//! obj2stl -i model.obj -o model.stl
//! ```
//!
//! Formats are selected from the two file extensions; today that means
//! OBJ in, binary STL out. Set `RUST_LOG` for per-stage diagnostics.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mesh_convert::convert_file;
use tracing_subscriber::EnvFilter;

/// Convert OBJ polygon meshes to binary STL.
#[derive(Parser)]
#[command(name = "obj2stl")]
#[command(about = "Convert OBJ polygon meshes to binary STL", long_about = None)]
#[command(version)]
struct Cli {
    /// Input mesh file (.obj)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: PathBuf,

    /// Output mesh file (.stl)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let stats = convert_file(&cli.input, &cli.output)?;

    println!(
        "{} -> {}: {} faces in, {} triangles out, {} bytes",
        cli.input.display(),
        cli.output.display(),
        stats.faces,
        stats.facets,
        stats.bytes
    );

    Ok(())
}
