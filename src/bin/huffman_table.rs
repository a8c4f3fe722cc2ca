use clap::{Parser, ValueEnum};
use huffman::{huffman, CodeTable, Config, FrequencyTable, Weighting};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeightingArg {
    Count,
    Probability,
    Scaled,
}

/// Print the Huffman code of every byte in a file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to read, or `-` for stdin
    path: PathBuf,

    /// Count bytes `0..N`; others are skipped
    #[arg(long, default_value_t = huffman::config::DEFAULT_ALPHABET_SIZE)]
    alphabet_size: usize,

    /// How counts become leaf weights
    #[arg(long, value_enum, default_value = "count")]
    weighting: WeightingArg,

    /// Divisor for `--weighting scaled`
    #[arg(long, default_value_t = 100.0)]
    divisor: f64,

    /// Also print the tree outline
    #[arg(long)]
    tree: bool,
}

impl Args {
    fn config(&self) -> huffman::Result<Config> {
        let weighting = match self.weighting {
            WeightingArg::Count => Weighting::Count,
            WeightingArg::Probability => Weighting::Probability,
            WeightingArg::Scaled => Weighting::Scaled {
                divisor: self.divisor,
            },
        };
        Config::new(self.alphabet_size, weighting)
    }
}

fn run(args: &Args) -> huffman::Result<()> {
    let config = args.config()?;

    let table = if args.path.as_os_str() == "-" {
        FrequencyTable::scan(io::stdin().lock(), &config)?
    } else {
        FrequencyTable::scan(File::open(&args.path)?, &config)?
    };

    let Some(tree) = huffman(&table, &config)? else {
        println!("{}", CodeTable::default());
        return Ok(());
    };

    if args.tree {
        print!("{}", tree.structure());
    }
    println!("{}", CodeTable::from_tree(&tree, &table, &config));
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("huffman-table: {}: {}", args.path.display(), e);
            ExitCode::FAILURE
        }
    }
}
