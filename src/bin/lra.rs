use std::{
    fmt::Write as _,
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
    str::FromStr,
};

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use env_logger::Target;
use lra::{LazyReaderAt, ReadAt};

/// Answer random-access reads against a stream that can only be read once
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Read this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Hex)]
    format: Format,
    /// Ranges as OFFSET:LEN, served in the order given
    #[arg(required = true)]
    ranges: Vec<ByteRange>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `OFFSET:COPIED HEX` per range
    Hex,
    /// copied bytes only
    Raw,
}

#[derive(Clone, Copy, Debug)]
struct ByteRange {
    offset: u64,
    len: usize,
}

impl FromStr for ByteRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((offset, len)) = s.split_once(':') else {
            return Err(anyhow!("expected OFFSET:LEN, got {s:?}"));
        };
        Ok(Self {
            offset: offset.parse()?,
            len: len.parse()?,
        })
    }
}

fn main() -> Result<ExitCode> {
    env_logger::builder().target(Target::Stderr).init();
    let cli = Cli::parse();

    let source: Box<dyn Read> = match &cli.input {
        Some(path) => {
            log::info!("reading {}", path.display());
            Box::new(File::open(path)?)
        }
        None => Box::new(io::stdin().lock()),
    };

    let short = serve(LazyReaderAt::new(source), &cli.ranges, cli.format)?;
    Ok(if short == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Serve every range, returning how many came up short
fn serve(mut reader: impl ReadAt, ranges: &[ByteRange], format: Format) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut short = 0;
    for range in ranges {
        log::debug!("range {range:?}");
        let mut buf = vec![0; range.len];
        let copied = match reader.read_at(&mut buf, range.offset) {
            Ok(n) => n,
            Err(e) => {
                log::warn!("short read at {}: {e}", range.offset);
                eprintln!("lra: short read at {}: {}", range.offset, e.error);
                short += 1;
                e.copied
            }
        };
        match format {
            Format::Hex => {
                let mut line = format!("{}:{copied} ", range.offset);
                for b in &buf[..copied] {
                    write!(line, "{b:02x}")?;
                }
                writeln!(out, "{}", line.trim_end())?;
            }
            Format::Raw => out.write_all(&buf[..copied])?,
        }
    }
    out.flush()?;
    Ok(short)
}
