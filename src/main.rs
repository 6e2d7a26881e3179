use clap::{Parser, Subcommand};
use std::path::Path;

use flavor_assets::{convert, fetch, recipes, report, synth};

/// Maintain the image assets of the Flavor Graph recipe app
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rasterize every SVG illustration in the asset directory and
    /// re-encode it as JPEG
    Convert {
        /// Asset directory holding the recipe images
        #[arg(short, long, default_value = "static/recipes")]
        dir: String,

        /// Append per-file progress and failures to this log file
        #[arg(long)]
        log_file: Option<String>,
    },
    /// Download a stock photo for every recipe in the table
    Fetch {
        /// Asset directory holding the recipe images
        #[arg(short, long, default_value = "static/recipes")]
        dir: String,

        /// JSON file replacing the built-in recipe table
        #[arg(short, long)]
        recipes: Option<String>,

        /// Stock-photo endpoint to fetch from
        #[arg(long, default_value = fetch::DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Width of the requested photos
        #[arg(long, default_value_t = 1200)]
        width: u32,

        /// Height of the requested photos
        #[arg(long, default_value_t = 800)]
        height: u32,
    },
    /// Draw a placeholder thumbnail for every recipe in the table
    Synth {
        /// Asset directory holding the recipe images
        #[arg(short, long, default_value = "static/recipes")]
        dir: String,

        /// JSON file replacing the built-in recipe table
        #[arg(short, long)]
        recipes: Option<String>,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Convert { dir, log_file } => {
            let mut log = match &log_file {
                Some(path) => report::RunLog::with_file(Path::new(path), "convert")?,
                None => report::RunLog::console(),
            };
            let outcomes = convert::convert_directory(Path::new(&dir), &mut log)?;
            report::print_summary("convert", &outcomes, &mut log);
        }
        Commands::Fetch {
            dir,
            recipes,
            endpoint,
            width,
            height,
        } => {
            let table = load_table(recipes.as_deref());
            let outcomes =
                fetch::fetch_photos(&table, Path::new(&dir), &endpoint, width, height).await?;
            report::print_summary("fetch", &outcomes, &mut report::RunLog::console());
        }
        Commands::Synth { dir, recipes } => {
            let table = load_table(recipes.as_deref());
            let outcomes = synth::synthesize_all(&table, Path::new(&dir))?;
            report::print_summary("synth", &outcomes, &mut report::RunLog::console());
        }
    }

    Ok(())
}

fn load_table(path: Option<&str>) -> Vec<recipes::Recipe> {
    match recipes::load_recipes(path.map(Path::new)) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error loading recipe table: {}", e);
            std::process::exit(1);
        }
    }
}
