use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dealer_cli::{find_project_root, CliError, Config, Library, LibraryScanner};
use dealer_core::{Dealer, Lcg32};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dealer")]
#[command(about = "Deal random items from a categorized library, avoiding recent repeats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories and their item counts
    Categories(CategoriesArgs),
    /// Deal one or more items to a consumer
    Draw(DrawArgs),
    /// Read "<consumer> <category>" request lines from stdin, one deal each
    Serve(ServeArgs),
}

#[derive(Parser)]
struct CategoriesArgs {
    /// Path to dealer project root
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,
}

#[derive(Parser)]
struct DrawArgs {
    /// Path to dealer project root
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Consumer the deals are recorded against
    #[arg(long, short)]
    consumer: String,

    /// Category to deal from; omit (or pass "any") for the merged pool
    #[arg(long)]
    category: Option<String>,

    /// Number of deals
    #[arg(long, default_value = "1")]
    count: usize,

    /// Generator seed for reproducible output (clock-seeded when omitted)
    #[arg(long)]
    seed: Option<u32>,
}

#[derive(Parser)]
struct ServeArgs {
    /// Path to dealer project root
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Generator seed for reproducible output (clock-seeded when omitted)
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Categories(args) => categories(args),
        Commands::Draw(args) => draw(args),
        Commands::Serve(args) => serve(args),
    }
}

fn load_library(project_dir: &Path) -> Result<(Config, Library)> {
    let project_root = find_project_root(project_dir)
        .with_context(|| format!("Failed to find project root from {:?}", project_dir))?;

    let config = Config::load(&project_root)
        .with_context(|| "Failed to load dealer.yml configuration")?;

    let scanner = LibraryScanner::new(project_root, config.clone());
    let library = scanner
        .scan()
        .with_context(|| "Failed to scan item library")?;

    Ok((config, library))
}

fn build_dealer(capacity: usize, seed: Option<u32>) -> Dealer<PathBuf, String> {
    match seed {
        Some(seed) => Dealer::with_source(capacity, Lcg32::new(seed)),
        None => Dealer::with_capacity(capacity),
    }
}

fn categories(args: CategoriesArgs) -> Result<()> {
    let (config, library) = load_library(&args.project_dir)?;

    println!("Project: {} (version {})", config.name, config.version);
    println!("Found {} categories", library.len());
    for (name, count) in library.counts() {
        println!("  {:20} {} items", name, count);
    }

    Ok(())
}

/// Resolve the candidate pool for a category request. `None` or `"any"`
/// means the merged pool across every category.
fn candidates(library: &Library, category: Option<&str>) -> Result<Vec<PathBuf>> {
    match category {
        None | Some("any") => Ok(library.all_items()),
        Some(name) => library
            .items(name)
            .map(|items| items.to_vec())
            .ok_or_else(|| {
                CliError::UnknownCategory {
                    name: name.to_string(),
                    available: library.category_names().map(String::from).collect(),
                }
                .into()
            }),
    }
}

fn report_deal(library: &Library, item: Option<PathBuf>) {
    match item {
        Some(item) => {
            let category = library.category_of(&item).unwrap_or("unknown");
            println!("{} (category: {})", item.display(), category);
        }
        // An empty pool is "nothing to offer", not a failure.
        None => println!("no items available"),
    }
}

fn draw(args: DrawArgs) -> Result<()> {
    let (config, library) = load_library(&args.project_dir)?;
    let pool = candidates(&library, args.category.as_deref())?;

    let mut dealer = build_dealer(config.history_capacity, args.seed);
    for _ in 0..args.count {
        let item = dealer.deal(&pool, args.consumer.clone());
        report_deal(&library, item);
    }

    Ok(())
}

fn serve(args: ServeArgs) -> Result<()> {
    let (config, library) = load_library(&args.project_dir)?;
    let mut dealer = build_dealer(config.history_capacity, args.seed);

    println!("Serving deals. Request format: <consumer> <category>");
    println!(
        "Categories: {} (or \"any\")",
        library.category_names().collect::<Vec<_>>().join(", ")
    );

    // One request per line; each deal completes before the next line is
    // read, so the dealer state is never touched concurrently.
    for line in io::stdin().lock().lines() {
        let line = line.with_context(|| "Failed to read request line")?;
        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        let (consumer, category) = match request.split_once(char::is_whitespace) {
            Some((consumer, category)) if !category.trim().is_empty() => {
                (consumer, category.trim())
            }
            _ => (request, "any"),
        };

        match candidates(&library, Some(category)) {
            Ok(pool) => {
                let item = dealer.deal(&pool, consumer.to_string());
                report_deal(&library, item);
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}
