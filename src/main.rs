use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use kashida::{DisplayPipeline, KashidaConfig};

const USAGE: &str = "Usage: kashida [--config <file>] [--line-by-line] [--bidi-only] [INPUT [OUTPUT]]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    line_by_line: bool,
    bidi_only: bool,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>> {
    let raw = env::args().skip(1).collect::<Vec<_>>();
    let mut args = Args::default();
    let mut positional: Vec<PathBuf> = Vec::new();

    let mut i = 0usize;
    while i < raw.len() {
        match raw[i].as_str() {
            "--config" => {
                if i + 1 >= raw.len() {
                    bail!("--config expects a path");
                }
                args.config = Some(PathBuf::from(&raw[i + 1]));
                i += 2;
            }
            "--line-by-line" => {
                args.line_by_line = true;
                i += 1;
            }
            "--bidi-only" => {
                args.bidi_only = true;
                i += 1;
            }
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            path => {
                positional.push(PathBuf::from(path));
                i += 1;
            }
        }
    }

    if positional.len() > 2 {
        bail!("too many arguments\n{USAGE}");
    }
    let mut positional = positional.into_iter();
    args.input = positional.next();
    args.output = positional.next();
    Ok(Some(args))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => {
            let mut config = KashidaConfig::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            config.merge_with_env().context("invalid environment override")?;
            config
        }
        None => KashidaConfig::load().context("failed to load configuration")?,
    };

    let pipeline = if args.bidi_only {
        DisplayPipeline::bidi_only(&config.bidi)
    } else {
        DisplayPipeline::new(&config)
    };

    if let (Some(input), Some(output)) = (&args.input, &args.output) {
        kashida::process_file_with(&pipeline, input, output, args.line_by_line)
            .context("failed to process file")?;
        return Ok(());
    }

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let processed = if args.line_by_line {
        pipeline.process_lines(&text)
    } else {
        pipeline.process(&text)
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(processed.as_bytes())
        .context("failed to write stdout")?;
    stdout.flush()?;
    Ok(())
}
