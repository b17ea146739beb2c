use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;

use hanmark::config::{self, Config};
use hanmark::corpus;
use hanmark::{DictIndex, HanmarkError};

/// Annotate Chinese corpus files with per-word dictionary glosses.
#[derive(Parser, Debug)]
#[command(name = "hanmark", version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Dictionary file (CC-CEDICT format); overrides the config value
    #[arg(long)]
    dictionary: Option<String>,

    /// Directory with corpus files to annotate; overrides the config value
    #[arg(long)]
    corpus_dir: Option<String>,

    /// Also write each file's sentence-to-markup mapping as JSON
    #[arg(long)]
    dump_json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), HanmarkError> {
    let (dictionary_path, corpus_dir) = resolve_paths(cli)?;

    println!("[INFO] loading dictionary from {}...", dictionary_path);
    let index = DictIndex::from_file(Path::new(&dictionary_path))?;
    println!("[INFO] {} surface tokens indexed", index.len());

    let files = corpus::scan_corpus_dir(Path::new(&corpus_dir))?;
    if files.is_empty() {
        println!("[INFO] no corpus files found in {}", corpus_dir);
        return Ok(());
    }

    for path in &files {
        println!("[INFO] annotating {}...", path.display());
        let document = fs::read_to_string(path)?;
        let (annotated, patched) = corpus::annotate_document(&document, &index);
        let out_path = corpus::processed_path(path);
        fs::write(&out_path, patched)?;
        println!(
            "[INFO] {} sentences -> {}",
            annotated.len(),
            out_path.display()
        );

        if cli.dump_json {
            let json_path = out_path.with_extension("json");
            fs::write(&json_path, serde_json::to_string_pretty(&annotated)?)?;
            println!("[INFO] mapping dumped to {}", json_path.display());
        }
    }
    Ok(())
}

/// Command-line flags win over config values; the config file is only
/// required when a flag is missing. The corpus directory is validated after
/// the overrides are applied, so the value that is actually used is the one
/// checked.
fn resolve_paths(cli: &Cli) -> Result<(String, String), HanmarkError> {
    let (dictionary, corpus_dir, origin) = match (&cli.dictionary, &cli.corpus_dir) {
        (Some(dictionary), Some(corpus_dir)) => {
            (dictionary.clone(), corpus_dir.clone(), "--corpus-dir")
        }
        _ => {
            let loaded: Config = config::load_config_from_file(&cli.config)?;
            let dictionary = cli.dictionary.clone().unwrap_or(loaded.dictionary_path);
            match &cli.corpus_dir {
                Some(corpus_dir) => (dictionary, corpus_dir.clone(), "--corpus-dir"),
                None => (dictionary, loaded.corpus_dir, cli.config.as_str()),
            }
        }
    };
    config::validate_corpus_dir(&corpus_dir, origin)?;
    Ok((dictionary, corpus_dir))
}
