//! Reformat a Stella watch-trigger trace as `frame scan cycle REG value` lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tiadiff::{Error, RegisterMap, Result};
use tiadiff_log::TraceLine;

#[derive(Parser, Debug)]
#[command(name = "stella-transform")]
#[command(about = "Reformat Stella watch-trigger lines as `frame scan cycle REG value`")]
struct Args {
    /// Trace file to read (defaults to stdin)
    #[arg(long)]
    input: Option<PathBuf>,
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn transform<R: BufRead, W: Write>(input: R, out: &mut W, map: &RegisterMap) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(record) = TraceLine::parse(&line) else {
            continue;
        };
        let register = map.trigger(record.trigger)?;
        writeln!(
            out,
            "{} {} {} {} {:02x}",
            record.frame, record.scanline, record.cycle, register, record.accumulator
        )?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let result = open_input(args.input.as_ref()).and_then(|input| {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        transform(input, &mut out, &RegisterMap::tia())?;
        out.flush()?;
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
