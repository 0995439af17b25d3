//! lacinka - Belarusian Łacinka word lists for a letter-guessing game

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lacinka::config::{
    default_config_path, init_config, load_config, load_config_strict, PipelineConfig,
};
use lacinka::pipeline::{build_buckets, convert_corpus, merge_lists, rate_distinct};
use lacinka::rating::KorpusClient;
use lacinka::{cyrillic_to_lacinka, lacinka_to_cyrillic};

#[derive(Parser, Debug)]
#[command(name = "lacinka")]
#[command(about = "Cyrillic <-> Łacinka transliteration and game word lists")]
struct Args {
    /// Config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the artifact directory
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Override the game word length
    #[arg(short = 'n', long)]
    len: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config file with the defaults (and any overrides)
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the Łacinka spelling of Cyrillic words
    Lat { words: Vec<String> },
    /// Print the Cyrillic spelling of Łacinka words
    Cyr { words: Vec<String> },
    /// Transliterate `<stem>.txt` corpus lists into `<stem>.lac.txt`
    Convert {
        #[arg(required = true)]
        stems: Vec<String>,
    },
    /// Bucket `<stem>.lac.txt` lists by length and letter uniqueness
    Bucket {
        #[arg(required = true)]
        stems: Vec<String>,
    },
    /// Rate distinct-letter words against the corpus service
    Rate,
    /// Build the final ask/accept lists
    Merge {
        /// `<stem>.lac.txt` lists holding inflected forms
        #[arg(long, num_args = 1..)]
        forms: Vec<String>,
    },
}

fn apply_overrides(args: &Args, config: &mut PipelineConfig) {
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(len) = args.len {
        config.word_len = len;
    }
}

/// An explicit `--config` must load; the implicit file may be absent
fn resolve_config(args: &Args) -> lacinka::Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_strict(path)?,
        None => load_config(&default_config_path())?,
    };
    apply_overrides(args, &mut config);
    config.validate()?;
    Ok(config)
}

fn init(args: &Args, force: bool) -> lacinka::Result<()> {
    let path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = PipelineConfig::default();
    apply_overrides(args, &mut config);
    init_config(&path, &config, force)
}

fn run(args: Args) -> lacinka::Result<()> {
    if let Command::Init { force } = args.command {
        return init(&args, force);
    }
    let config = resolve_config(&args)?;

    match args.command {
        Command::Init { .. } => {}
        Command::Lat { words } => {
            for word in words {
                println!("{}", cyrillic_to_lacinka(&word.to_lowercase())?);
            }
        }
        Command::Cyr { words } => {
            for word in words {
                println!("{}", lacinka_to_cyrillic(&word.to_lowercase())?);
            }
        }
        Command::Convert { stems } => {
            for stem in stems {
                convert_corpus(&config, &stem)?;
            }
        }
        Command::Bucket { stems } => {
            let split = build_buckets(&config, &stems)?;
            println!(
                "{} distinct, {} repeat",
                split.distinct.len(),
                split.repeat.len()
            );
        }
        Command::Rate => {
            let mut client = KorpusClient::new(&config)?;
            let rated = rate_distinct(&config, &mut client)?;
            println!("{} newly rated", rated);
        }
        Command::Merge { forms } => {
            let lists = merge_lists(&config, &forms)?;
            println!("{} ask, {} accept", lists.ask.len(), lists.accept.len());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
