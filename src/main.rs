use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use clockstamp::clock::parse_timestamp;
use clockstamp::{Clock, ClockConfig, FixedClock, SystemClock};

/// Render the current date/time as a boxed overlay on a transparent PNG
#[derive(Parser, Debug)]
#[command(name = "clockstamp", version, about)]
struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 384)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 256)]
    height: u32,

    /// TrueType/OpenType font file
    #[arg(long, default_value = "Hack-Regular.ttf")]
    font: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "transparent_clock.png")]
    output: PathBuf,

    /// Render this time instead of now ("YYYY-MM-DD HH:MM:SS")
    #[arg(long)]
    at: Option<String>,

    /// Print a JSON report of the render instead of the status line
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ClockConfig {
        width: args.width,
        height: args.height,
        font_path: args.font,
        output_path: args.output,
        ..Default::default()
    };

    let clock: Box<dyn Clock> = match args.at.as_deref() {
        Some(at) => Box::new(FixedClock(parse_timestamp(at)?)),
        None => Box::new(SystemClock),
    };

    let report = clockstamp::run(&config, &*clock)
        .with_context(|| format!("rendering {}", config.output_path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Transparent PNG created with small, aligned date/time box.");
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("clockstamp: {:#}", e);
        std::process::exit(1);
    }
}
