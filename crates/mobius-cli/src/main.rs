//! mobius CLI - Möbius strip metrics and mesh export.
//!
//! Thin driver over the kernel crates: computes surface area and edge
//! length for one or many strip configurations, and exports the sampled
//! surface as binary STL for external viewers.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mobius_mesh::{MobiusStrip, StripParams, TriangleMesh};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "mobius")]
#[command(about = "Möbius strip surface metrics and mesh export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Strip parameters shared by the subcommands.
#[derive(Args, Clone, Copy)]
struct ParamArgs {
    /// Distance from the center axis to the strip mid-line
    #[arg(short, long, default_value_t = 3.0)]
    radius: f64,

    /// Strip width
    #[arg(short, long, default_value_t = 1.0)]
    width: f64,

    /// Samples per parameter axis
    #[arg(short = 'n', long, default_value_t = 100)]
    resolution: usize,
}

impl From<ParamArgs> for StripParams {
    fn from(args: ParamArgs) -> Self {
        StripParams::new(args.radius, args.width, args.resolution)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print surface area and edge length for one configuration
    Info {
        #[command(flatten)]
        params: ParamArgs,

        /// Emit the metrics as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute metrics across a list of configurations
    Sweep {
        /// TOML file with one [[runs]] table per configuration
        /// (fields: radius, width, resolution). Without it, a built-in
        /// comparison sweep runs.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Export the sampled surface as binary STL
    Export {
        /// Output .stl file
        output: PathBuf,

        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(Serialize)]
struct Metrics {
    radius: f64,
    width: f64,
    resolution: usize,
    surface_area: f64,
    edge_length: f64,
}

impl Metrics {
    fn measure(strip: &MobiusStrip) -> Self {
        let p = strip.params();
        Self {
            radius: p.radius,
            width: p.width,
            resolution: p.resolution,
            surface_area: strip.surface_area(),
            edge_length: strip.edge_length(),
        }
    }

    fn print(&self) {
        println!(
            "Möbius strip (R={}, w={}, n={}):",
            self.radius, self.width, self.resolution
        );
        println!("  surface area: {:.4}", self.surface_area);
        println!("  edge length:  {:.4}", self.edge_length);
    }
}

#[derive(Deserialize)]
struct SweepConfig {
    runs: Vec<StripParams>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { params, json } => run_info(params.into(), json),
        Commands::Sweep { config } => run_sweep(config),
        Commands::Export { output, params } => run_export(&output, params.into()),
    }
}

fn run_info(params: StripParams, json: bool) -> Result<()> {
    let strip = MobiusStrip::new(params)?;
    let metrics = Metrics::measure(&strip);
    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        metrics.print();
    }
    Ok(())
}

fn run_sweep(config: Option<PathBuf>) -> Result<()> {
    let runs = match config {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading sweep config {}", path.display()))?;
            let config: SweepConfig = toml::from_str(&text)
                .with_context(|| format!("parsing sweep config {}", path.display()))?;
            anyhow::ensure!(!config.runs.is_empty(), "sweep config lists no runs");
            config.runs
        }
        // Built-in comparison sweep: the reference configuration plus a
        // small, a large, and a wide strip.
        None => vec![
            StripParams::default(),
            StripParams::new(2.0, 0.5, 100),
            StripParams::new(4.0, 1.5, 100),
            StripParams::new(3.0, 2.0, 100),
        ],
    };

    // One model instance, mutated in place across the sweep.
    let mut strip = MobiusStrip::new(runs[0])?;
    Metrics::measure(&strip).print();
    for params in &runs[1..] {
        strip.update(
            Some(params.radius),
            Some(params.width),
            Some(params.resolution),
        )?;
        Metrics::measure(&strip).print();
    }
    Ok(())
}

fn run_export(output: &PathBuf, params: StripParams) -> Result<()> {
    let strip = MobiusStrip::new(params)?;
    let mesh = TriangleMesh::from_grid(strip.grid());
    let bytes = stl_bytes(&mesh);
    fs::write(output, bytes).with_context(|| format!("writing {}", output.display()))?;
    println!(
        "Exported {} triangles to {}",
        mesh.num_triangles(),
        output.display()
    );
    Ok(())
}

/// Serialize a triangle mesh as binary STL.
fn stl_bytes(mesh: &TriangleMesh) -> Vec<u8> {
    let num_triangles = mesh.num_triangles();
    let mut data = Vec::with_capacity(84 + num_triangles * 50);

    // 80-byte header
    let mut header = [0u8; 80];
    header[..17].copy_from_slice(b"mobius STL export");
    data.extend_from_slice(&header);
    // Number of triangles
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for tri in mesh.indices.chunks(3) {
        let i0 = tri[0] as usize * 3;
        let i1 = tri[1] as usize * 3;
        let i2 = tri[2] as usize * 3;

        let v0 = [
            mesh.vertices[i0],
            mesh.vertices[i0 + 1],
            mesh.vertices[i0 + 2],
        ];
        let v1 = [
            mesh.vertices[i1],
            mesh.vertices[i1 + 1],
            mesh.vertices[i1 + 2],
        ];
        let v2 = [
            mesh.vertices[i2],
            mesh.vertices[i2 + 1],
            mesh.vertices[i2 + 2],
        ];

        // Compute normal
        let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let (nx, ny, nz) = if len > 1e-10 {
            (nx / len, ny / len, nz / len)
        } else {
            (0.0, 0.0, 1.0)
        };

        // Normal
        data.extend_from_slice(&nx.to_le_bytes());
        data.extend_from_slice(&ny.to_le_bytes());
        data.extend_from_slice(&nz.to_le_bytes());
        // Vertices
        for v in [v0, v1, v2] {
            data.extend_from_slice(&v[0].to_le_bytes());
            data.extend_from_slice(&v[1].to_le_bytes());
            data.extend_from_slice(&v[2].to_le_bytes());
        }
        // Attribute byte count
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stl_bytes_layout() {
        let strip = MobiusStrip::new(StripParams::new(3.0, 1.0, 4)).unwrap();
        let mesh = TriangleMesh::from_grid(strip.grid());
        let bytes = stl_bytes(&mesh);
        // Header + count + 50 bytes per triangle record.
        assert_eq!(bytes.len(), 84 + mesh.num_triangles() * 50);
        let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap());
        assert_eq!(count as usize, mesh.num_triangles());
    }
}
