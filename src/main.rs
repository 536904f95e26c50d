//! # Etiqueta CLI
//!
//! Command-line interface for product label generation.
//!
//! ## Usage
//!
//! ```bash
//! # Generate a ZPL document for one label
//! etiqueta generate --sku ABC123 --name "Produto Teste" -o label.zpl
//!
//! # Two labels across on 40x25mm stock, printed to stdout
//! etiqueta generate --columns 2 --height-mm 25 \
//!     --sku A1 --name "Arroz" --sku F2 --name "Feijão" -o -
//!
//! # Items and layout from a JSON job file
//! etiqueta generate --job job.json
//!
//! # Size of a layout in dots
//! etiqueta dimensions --columns 2
//!
//! # PNG preview
//! etiqueta preview --job job.json --png preview.png
//!
//! # Read back an existing document
//! etiqueta inspect label.zpl
//!
//! # HTTP API
//! etiqueta serve --listen 0.0.0.0:8080
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use etiqueta::{
    EtiquetaError, LabelItem, LayoutConfig, PrinterConfig,
    ir::Program,
    job::{LabelJob, default_file_name},
    server::{self, DEFAULT_LISTEN_ADDR, ServerConfig},
};

/// Etiqueta - Product label generator for ZPL printers
#[derive(Parser, Debug)]
#[command(name = "etiqueta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a ZPL document
    Generate {
        #[command(flatten)]
        items: ItemArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output file ("-" for stdout; defaults to a timestamped .zpl file)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the size of a layout in dots as JSON
    Dimensions {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render a PNG preview
    Preview {
        #[command(flatten)]
        items: ItemArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output PNG file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,
    },

    /// Read a ZPL document and report what it contains
    Inspect {
        /// ZPL file to read
        file: PathBuf,
    },

    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
        listen: String,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Where label items come from.
#[derive(Args, Debug)]
struct ItemArgs {
    /// JSON job file ({"items": [...], "layout": {...}})
    #[arg(long, value_name = "FILE")]
    job: Option<PathBuf>,

    /// SKU of a label (repeat, paired with --name in order)
    #[arg(long = "sku", value_name = "SKU")]
    skus: Vec<String>,

    /// Product name of a label (repeat, paired with --sku in order)
    #[arg(long = "name", value_name = "NAME")]
    names: Vec<String>,
}

/// Layout overrides. Unset flags keep the job's (or the default) value.
#[derive(Args, Debug)]
struct LayoutArgs {
    /// Label width in millimeters [default: 40]
    #[arg(long)]
    width_mm: Option<f64>,

    /// Label height in millimeters [default: 20]
    #[arg(long)]
    height_mm: Option<f64>,

    /// Labels across [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    columns: Option<i32>,

    /// Gap between labels in millimeters [default: 3]
    #[arg(long)]
    gap_mm: Option<f64>,
}

impl LayoutArgs {
    fn apply(&self, base: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            width_mm: self.width_mm.unwrap_or(base.width_mm),
            height_mm: self.height_mm.unwrap_or(base.height_mm),
            columns: self.columns.unwrap_or(base.columns),
            column_gap_mm: self.gap_mm.unwrap_or(base.column_gap_mm),
        }
    }
}

impl ItemArgs {
    fn load(&self, layout: &LayoutArgs) -> Result<LabelJob, EtiquetaError> {
        let mut job = match &self.job {
            Some(path) => LabelJob::from_file(path)?,
            None => LabelJob::default(),
        };

        if self.skus.len() != self.names.len() {
            return Err(EtiquetaError::InvalidInput(format!(
                "{} --sku value(s) but {} --name value(s); they are paired in order",
                self.skus.len(),
                self.names.len()
            )));
        }
        job.items.extend(
            self.skus
                .iter()
                .zip(&self.names)
                .map(|(sku, name)| LabelItem::new(sku.as_str(), name.as_str())),
        );

        job.layout = layout.apply(job.layout);
        Ok(job)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EtiquetaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            items,
            layout,
            output,
        } => {
            let job = items.load(&layout)?;
            if job.items.is_empty() {
                log::warn!("no items given; the document will only contain the header");
            }

            let zpl = job.to_zpl();
            let path = output.unwrap_or_else(|| PathBuf::from(default_file_name(chrono::Local::now())));
            if path == Path::new("-") {
                println!("{}", zpl);
            } else {
                std::fs::write(&path, &zpl)?;
                log::info!(
                    "Wrote {} ({} label(s), {}x{} dots)",
                    path.display(),
                    job.items.len().min(job.layout.effective_columns() as usize),
                    job.dimensions().width,
                    job.dimensions().height
                );
            }
        }

        Commands::Dimensions { layout } => {
            let dims = etiqueta::query_dimensions(&layout.apply(LayoutConfig::default()));
            println!("{}", serde_json::to_string(&dims)?);
        }

        Commands::Preview { items, layout, png } => {
            let job = items.load(&layout)?;
            let png_bytes = job.to_preview_png()?;
            std::fs::write(&png, png_bytes)?;
            log::info!("Saved preview to {}", png.display());
        }

        Commands::Inspect { file } => {
            let text = std::fs::read_to_string(&file)?;
            let program = Program::parse(&text);

            match program.dimensions() {
                Some(dims) => {
                    let printer = PrinterConfig::default();
                    println!(
                        "Size: {}x{} dots ({}x{} mm at {} dpi)",
                        dims.width,
                        dims.height,
                        printer.dots_to_mm(dims.width),
                        printer.dots_to_mm(dims.height),
                        printer.dpi
                    );
                }
                None => println!("Size: not declared (missing ^PW or ^LL)"),
            }
            println!("Text blocks: {}", program.text_block_count());
            println!("Barcodes: {}", program.barcode_count());
            for sku in program.barcode_payloads() {
                println!("  {}", sku);
            }
        }

        Commands::Serve { listen, layout } => {
            let config = ServerConfig {
                listen_addr: listen,
                default_layout: layout.apply(LayoutConfig::default()),
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}
