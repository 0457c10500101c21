//! Generate the CORDIC angle table for a Verilog module.
//!
//! Parameters are taken from an optional JSON configuration file and
//! overridden by command line flags. The table (or with `--json` a report) is
//! written to stdout or to the given output file.
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;

use cordicgen::{
    metadata::ApplicationMetadata,
    report::Report,
    settings::{Config, Design},
};

#[derive(Debug, Parser)]
#[command(name = "cordicgen", version, about)]
struct Args {
    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output word width in bits
    #[arg(short = 'w', long)]
    output_width: Option<u32>,

    /// Datapath width in bits, bounds the stage count
    #[arg(long)]
    working_width: Option<u32>,

    /// Phase accumulator width in bits
    #[arg(short, long)]
    phase_bits: Option<u32>,

    /// Number of CORDIC stages
    #[arg(short = 'n', long)]
    stages: Option<u32>,

    /// Low datapath bits dropped, for the transform error estimate
    #[arg(long)]
    dropped_bits: Option<u32>,

    /// Write a JSON report instead of the Verilog table
    #[arg(long)]
    json: bool,

    /// Precede the table with the explanatory comment block
    #[arg(long)]
    preamble: bool,

    /// Output file, stdout if not given
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let file = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Reading {}", path.display()))?;
                Config::from_json(&json)
                    .with_context(|| format!("Parsing {}", path.display()))?
            }
            None => Config::default(),
        };
        Ok(file.merge(Config {
            output_width: self.output_width,
            working_width: self.working_width,
            phase_bits: self.phase_bits,
            stages: self.stages,
            dropped_bits: self.dropped_bits,
        }))
    }
}

fn write(sink: &mut dyn Write, design: &Design, args: &Args) -> io::Result<()> {
    if args.json {
        let report = Report::new(design);
        writeln!(sink, "{}", report.to_json()?)?;
    } else {
        if args.preamble {
            cordic::emit_preamble(sink)?;
        }
        cordic::emit_angle_table(sink, design.stages, design.phase_bits)?;
        if let Some(dropped_bits) = design.dropped_bits {
            writeln!(
                sink,
                "\t// Transform quantization variance: {:.6} (LSB^2)",
                cordic::transform_quantization_variance(
                    design.stages,
                    dropped_bits
                )
            )?;
        }
    }
    sink.flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let meta = ApplicationMetadata::new();
    log::debug!("{meta:?}");

    let config = args.config()?;
    let design = config.build().context("Deriving CORDIC parameters")?;
    log::info!(
        "{} phase bits, {} stages, gain {:.6}",
        design.phase_bits,
        design.stages,
        cordic::gain(design.stages)
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Creating {}", path.display()))?;
            write(&mut BufWriter::new(file), &design, &args)
                .with_context(|| format!("Writing {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => write(&mut io::stdout().lock(), &design, &args)
            .context("Writing stdout")?,
    }
    Ok(())
}
