use clap::Parser;

mod layout;
mod reshape;
mod table;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "perf-rotate")]
#[command(about = "Rotate flat proxy benchmark results into a per-variant table", long_about = None)]
struct Cli {
    /// Flat results CSV, one row per (protocol, proxy, size-class) case.
    #[arg(long, default_value = "proxies-performance.csv")]
    input: String,

    /// Destination for the rotated table.
    #[arg(short = 'o', long, default_value = "proxies-performance-rotated.csv")]
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Parse the flat table. The whole input is materialized here, so a
    //    short table fails before the output file exists.
    let rows = table::read_metric_rows(&cli.input)?;

    // 2) Rotate into one row per variant.
    let rotated = reshape::rotate(&rows)?;

    // 3) Write header + data rows.
    table::write_rotated(&cli.output, &rotated)?;
    println!("Wrote {}", cli.output);

    Ok(())
}
