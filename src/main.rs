use std::fs;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;

#[derive(Parser, Debug)]
#[command(name = "regconv")]
#[command(version, about = "Convert key=hex register dumps to signed 32-bit decimal")]
struct Args {
    /// Input file paths (reads from stdin if not provided)
    files: Vec<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn convert_all(inputs: &[Vec<u8>], writer: &mut dyn Write) -> miette::Result<()> {
    for input in inputs {
        regconv::converter::convert(input, writer).map_err(|e| miette::miette!("{e}"))?;
    }
    Ok(())
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let inputs = if args.files.is_empty() {
        // stdin mode
        if io::stdin().is_terminal() {
            return Err(miette::miette!(
                "No input file specified and stdin is a terminal.\nUsage: regconv <FILE>... or pipe data to stdin"
            ));
        }
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).into_diagnostic()?;
        vec![buf]
    } else {
        let mut inputs = Vec::with_capacity(args.files.len());
        for path in &args.files {
            inputs.push(fs::read(path).into_diagnostic()?);
        }
        inputs
    };

    if let Some(ref path) = args.output {
        let file = fs::File::create(path).into_diagnostic()?;
        let mut writer = BufWriter::new(file);
        convert_all(&inputs, &mut writer)?;
        writer.flush().into_diagnostic()?;
    } else {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        convert_all(&inputs, &mut writer)?;
        writer.flush().into_diagnostic()?;
    }

    Ok(())
}
