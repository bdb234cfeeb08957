use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rankine_cycle::units::PressureUnit;
use rankine_cycle::{app, config};

/// 보고서 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rankine_cycle_cli")]
#[command(about = "Ideal Rankine cycle performance with IAPWS-IF97 steam properties", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Condenser pressure (absolute), overrides the config file
    #[arg(long)]
    condenser: Option<f64>,
    /// Boiler pressure (absolute), overrides the config file
    #[arg(long)]
    boiler: Option<f64>,
    /// Unit of the pressures given on the command line (Pa, kPa, MPa, bar, psi, atm)
    #[arg(long)]
    unit: Option<PressureUnit>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 사이클을 계산해 출력한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let chain = app::error_chain(&err);
            let mut lines = chain.iter();
            if let Some(top) = lines.next() {
                eprintln!("error: {top}");
            }
            for cause in lines {
                eprintln!("  caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load(cli.config.as_deref())?;
    if let Some(unit) = cli.unit {
        cfg.cycle = cfg.cycle.with_unit(unit);
    }
    cfg.cycle = cfg.cycle.with_overrides(cli.condenser, cli.boiler);

    let output = app::run(&cfg)?;
    match cli.format {
        OutputFormat::Text => print!("{}", output.report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output.result)?),
    }
    Ok(())
}
