use clap::Parser;
use std::error::Error;
use std::time::Duration;
use vectronix_lib::{LpclModeLevel, RangeFinder};

/// Take a distance measurement with a Vectronix laser rangefinder.
#[derive(Parser)]
struct Args {
    /// Serial port the rangefinder is attached to (e.g. /dev/ttyUSB0)
    port: String,

    /// Baud rate
    #[arg(long, default_value_t = 115_200)]
    baud: u32,

    /// Read timeout in milliseconds
    #[arg(long, default_value_t = 2000)]
    timeout_ms: u64,

    /// LPCL mode level (0-6) to select before measuring
    #[arg(long)]
    lpcl: Option<u8>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let port = serialport::new(&args.port, args.baud)
        .timeout(Duration::from_millis(args.timeout_ms))
        .open()?;
    println!("Connected to rangefinder on {}", args.port);

    let mut rangefinder = RangeFinder::new(port);

    if let Some(raw) = args.lpcl {
        let level = LpclModeLevel::try_from(raw)?;
        rangefinder.set_lpcl_mode(Some(level))?;
        println!("LPCL mode set to {level}");
    }

    println!("Requesting range...");
    let response = rangefinder.measure()?;
    match response.range_m {
        Some(range_m) => println!("Range: {range_m:.2} m"),
        None => println!(
            "No range (status {}, error payload: {:02X?})",
            response.status,
            response.error.as_deref().unwrap_or_default()
        ),
    }

    Ok(())
}
