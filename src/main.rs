mod card;
mod paths;
mod rng;

use card::{Face, FaceLayout, IdGenerator};
use clap::{Parser, Subcommand, ValueEnum};
use paths::{enumerate, PathFormat, PathSet};
use rayon::prelude::*;
use rng::CardRng;

#[derive(Parser)]
#[command(name = "bingo-generator")]
#[command(about = "Bingo card face generator and winning-path enumerator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Layout file to use instead of the standard 5x3 bingo layout
    #[arg(short, long)]
    layout: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more card faces
    Generate {
        /// Number of faces to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Seed for reproducibility (face i uses seed + i)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Layout file to use
        #[arg(short, long)]
        layout: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Enumerate every winning path on a generated face
    Paths {
        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Layout file to use
        #[arg(short, long)]
        layout: Option<String>,

        /// Print every path instead of just the count
        #[arg(long)]
        show: bool,
    },

    /// Test whether path strings occur on a generated face
    Check {
        /// Paths in canonical zero-padded dash-separated form
        paths: Vec<String>,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Layout file to use
        #[arg(short, long)]
        layout: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            count,
            seed,
            layout,
            format,
        }) => {
            let layout = load_layout(layout.or(cli.layout));
            generate_faces(&layout, count, seed.or(cli.seed), format);
        }
        Some(Commands::Paths { seed, layout, show }) => {
            let layout = load_layout(layout.or(cli.layout));
            show_paths(&layout, seed.or(cli.seed), show);
        }
        Some(Commands::Check { paths, seed, layout }) => {
            let layout = load_layout(layout.or(cli.layout));
            check_paths(&layout, seed.or(cli.seed), &paths);
        }
        None => {
            let layout = load_layout(cli.layout);
            run_demo(&layout, cli.seed);
        }
    }
}

fn load_layout(path: Option<String>) -> FaceLayout {
    match path {
        Some(path) => match FaceLayout::from_file(&path) {
            Ok(layout) => {
                eprintln!(
                    "✓ Loaded layout from {} ({} rows x {} columns)",
                    path,
                    layout.rows(),
                    layout.columns()
                );
                layout
            }
            Err(e) => {
                eprintln!("✗ Failed to load layout '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => FaceLayout::bingo(),
    }
}

fn sample_face(layout: &FaceLayout, ids: &mut IdGenerator, rng: &mut CardRng) -> Face {
    match Face::sample(layout, ids, rng) {
        Ok(face) => face,
        Err(e) => {
            eprintln!("✗ Failed to generate face: {}", e);
            std::process::exit(1);
        }
    }
}

fn enumerate_face(face: &Face) -> PathSet {
    match enumerate(face) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("✗ Failed to enumerate paths: {}", e);
            std::process::exit(1);
        }
    }
}

fn generate_faces(layout: &FaceLayout, count: usize, seed: Option<u64>, format: OutputFormat) {
    let start = std::time::Instant::now();

    let faces: Vec<Face> = if let Some(base_seed) = seed {
        // Sequential with fixed seed, shared id counter
        let mut ids = IdGenerator::new();
        (0..count)
            .map(|i| {
                let mut rng = CardRng::new(Some(base_seed + i as u64));
                sample_face(layout, &mut ids, &mut rng)
            })
            .collect()
    } else {
        // Parallel with random seeds, each face takes its own id block
        let result: Result<Vec<Face>, _> = (0..count)
            .into_par_iter()
            .map(|i| {
                let seed = (std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(i as u64))
                    .wrapping_add(i as u64);
                let mut rng = CardRng::new(Some(seed));
                let mut ids = IdGenerator::starting_at(i as u64);
                Face::sample(layout, &mut ids, &mut rng)
            })
            .collect();
        match result {
            Ok(faces) => faces,
            Err(e) => {
                eprintln!("✗ Failed to generate faces: {}", e);
                std::process::exit(1);
            }
        }
    };

    let elapsed = start.elapsed();

    match format {
        OutputFormat::Text => {
            for face in &faces {
                println!("Face {}", face.id());
                println!("{}\n", face.formatted_face());
            }
        }
        OutputFormat::Csv => {
            for face in &faces {
                for row in 0..face.rows() {
                    if let Some(line) = face.csv_row(row) {
                        println!("{}", line);
                    }
                }
                println!();
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&faces) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("✗ Failed to serialize faces: {}", e);
                std::process::exit(1);
            }
        },
    }

    eprintln!(
        "Generated {} faces in {:.2?} ({:.0} faces/sec)",
        count,
        elapsed,
        count as f64 / elapsed.as_secs_f64()
    );
}

fn show_paths(layout: &FaceLayout, seed: Option<u64>, show: bool) {
    let mut rng = CardRng::new(seed);
    let mut ids = IdGenerator::new();
    let face = sample_face(layout, &mut ids, &mut rng);
    let paths = enumerate_face(&face);

    println!("Seed: {}", rng.seed());
    println!("Face {}", face.id());
    println!("{}\n", face.formatted_face());

    if show {
        for path in paths.iter() {
            println!("{}", path);
        }
        println!();
    }
    println!("Winning paths: {}", paths.len());
}

fn check_paths(layout: &FaceLayout, seed: Option<u64>, queries: &[String]) {
    let mut rng = CardRng::new(seed);
    let mut ids = IdGenerator::new();
    let face = sample_face(layout, &mut ids, &mut rng);
    let paths = enumerate_face(&face);

    println!("Seed: {}", rng.seed());
    println!("Face {}", face.id());
    println!("{}\n", face.formatted_face());

    for query in queries {
        println!("{}: {}", query, paths.contains(query));
    }
}

fn run_demo(layout: &FaceLayout, seed: Option<u64>) {
    let mut rng = CardRng::new(seed);
    let mut ids = IdGenerator::new();
    let face = sample_face(layout, &mut ids, &mut rng);
    let paths = enumerate_face(&face);

    println!("\n=== Bingo Face Generator ===\n");
    println!("Seed: {}", rng.seed());
    println!("Face {}", face.id());
    println!("{}\n", face.formatted_face());
    println!("Winning paths: {}", paths.len());

    // a path picking the first column of every row is always on the face
    let first_column: Vec<u32> = face.grid().iter().filter_map(|row| row.first().copied()).collect();
    match PathFormat::for_face(&face).render(&first_column) {
        Ok(probe) => println!("{}.contained: {}", probe, paths.contains(&probe)),
        Err(e) => {
            eprintln!("✗ Failed to render probe path: {}", e);
            std::process::exit(1);
        }
    }
    println!("99-99-99-99-99.contained: {}", paths.contains("99-99-99-99-99"));
}
