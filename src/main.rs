use clap::Parser;
use std::path::PathBuf;

use placeholders::*;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Existing directory to write the placeholder PNGs into.
    #[arg(required_unless_present = "list")]
    output_dir: Option<PathBuf>,
    /// Print the placeholder table and exit without writing anything.
    #[arg(short, long, conflicts_with = "output_dir")]
    list: bool,
}

fn list(entries: &[PlaceholderEntry]) {
    for entry in entries {
        println!("{:<20} {} -> {}  {}", entry.filename, entry.start, entry.end, entry.label);
    }
}

fn run() -> Result<(), PlaceholderError> {
    let cli = Cli::parse();
    let entries = dish_placeholders()?;

    // clap guarantees a directory whenever --list is absent
    let output_dir = match cli.output_dir {
        Some(dir) if !cli.list => dir,
        _ => {
            list(&entries);
            return Ok(());
        }
    };

    let mut sink = DirectorySink::open(output_dir)?;
    log::info!("writing {} placeholders to '{}'", entries.len(), sink.dir().display());

    generate(&entries, &RenderConfig::default(), &mut sink, |entry, _| {
        println!("✓ Created {}", entry.filename);
    })?;

    println!("\nAll placeholder PNG images created successfully!");

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
