use clap::{Parser, Subcommand};
use pe_app::{
    AppError, AppResult, EngineDefaults, ErrorKind, OperationResponse, Request, Value, evaluate,
    load_defaults, load_requests,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "pe-cli")]
#[command(about = "Petroleum engineering correlations and project economics", long_about = None)]
struct Cli {
    /// YAML file overriding the engine defaults
    #[arg(long, global = true)]
    defaults: Option<PathBuf>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one request or a list of requests from a YAML/JSON file
    Eval {
        /// Path to the request file
        file: PathBuf,
    },
    /// Net present value of end-of-period cash flows
    Npv {
        /// Discount rate per period (0.1 = 10 %)
        #[arg(short, long)]
        rate: f64,
        /// Initial investment spent at period 0
        #[arg(short, long, default_value_t = 0.0)]
        investment: f64,
        /// Cash flows for periods 1..N
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        flows: Vec<f64>,
    },
    /// Internal rate of return
    Irr {
        /// Initial investment spent at period 0
        #[arg(short, long)]
        investment: f64,
        /// Acceptable |NPV| at the returned rate
        #[arg(short, long)]
        tolerance: Option<f64>,
        /// Cash flows for periods 1..N
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        flows: Vec<f64>,
    },
    /// Pressure gradient of a mud column
    MudGradient {
        /// Mud weight
        mud_weight: f64,
        /// Mud weight unit (ppg, sg, kg/m3, lb/ft3, ...)
        #[arg(short, long)]
        unit: Option<String>,
    },
    /// NPV over an evenly spaced grid of discount rates
    NpvProfile {
        /// Initial investment spent at period 0
        #[arg(short, long, default_value_t = 0.0)]
        investment: f64,
        /// First rate of the grid
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// Last rate of the grid
        #[arg(long, default_value_t = 0.5)]
        end: f64,
        /// Number of grid points
        #[arg(long, default_value_t = 11)]
        count: usize,
        /// Cash flows for periods 1..N
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        flows: Vec<f64>,
    },
}

/// Per-request result as printed with `--json`.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome<'a> {
    Ok { response: &'a OperationResponse },
    Error {
        operation: &'a str,
        kind: ErrorKind,
        message: String,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every request succeeded.
fn run(cli: Cli) -> AppResult<bool> {
    let defaults = match &cli.defaults {
        Some(path) => load_defaults(path)?,
        None => EngineDefaults::default(),
    };

    let requests = match cli.command {
        Commands::Eval { file } => load_requests(&file)?,
        Commands::Npv {
            rate,
            investment,
            flows,
        } => vec![Request::NetPresentValue {
            cash_flows: flows,
            discount_rate: rate,
            initial_investment: investment,
        }],
        Commands::Irr {
            investment,
            tolerance,
            flows,
        } => vec![Request::InternalRateOfReturn {
            cash_flows: flows,
            initial_investment: investment,
            tolerance,
        }],
        Commands::MudGradient { mud_weight, unit } => {
            vec![Request::MudWeightToPressureGradient { mud_weight, unit }]
        }
        Commands::NpvProfile {
            investment,
            start,
            end,
            count,
            flows,
        } => {
            let grid = pe_economics::rate_grid(start, end, count)?;
            vec![Request::NpvProfile {
                cash_flows: flows,
                initial_investment: investment,
                rates: grid.iter().map(|r| r.value()).collect(),
            }]
        }
    };

    info!(count = requests.len(), "evaluating requests");
    evaluate_and_print(&requests, &defaults, cli.json)
}

fn evaluate_and_print(
    requests: &[Request],
    defaults: &EngineDefaults,
    json: bool,
) -> AppResult<bool> {
    let results: Vec<(&Request, AppResult<OperationResponse>)> = requests
        .iter()
        .map(|r| (r, evaluate(r, defaults)))
        .collect();
    let all_ok = results.iter().all(|(_, r)| r.is_ok());

    if json {
        let outcomes: Vec<Outcome<'_>> = results
            .iter()
            .map(|(req, result)| match result {
                Ok(response) => Outcome::Ok { response },
                Err(e) => Outcome::Error {
                    operation: req.operation(),
                    kind: e.kind(),
                    message: e.to_string(),
                },
            })
            .collect();
        let text = serde_json::to_string_pretty(&outcomes)
            .map_err(|e| AppError::InvalidRequest(format!("Failed to encode response: {}", e)))?;
        println!("{}", text);
    } else {
        for (req, result) in &results {
            match result {
                Ok(response) => print_response(response),
                Err(e) => eprintln!("✗ {}: {} [{:?}]", req.operation(), e, e.kind()),
            }
        }
    }

    Ok(all_ok)
}

fn print_response(response: &OperationResponse) {
    println!("✓ {}", response.operation);
    for out in &response.outputs {
        println!("  {} = {}", out.name, format_value(&out.value, &out.unit));
    }
    if !response.inputs.is_empty() {
        println!("  inputs:");
        for inp in &response.inputs {
            println!("    {} = {}", inp.name, format_value(&inp.value, &inp.unit));
        }
    }
}

fn format_value(value: &Value, unit: &str) -> String {
    let body = match value {
        Value::Number(v) => format!("{:.6}", v),
        Value::Text(s) => s.clone(),
        Value::Series(values) => {
            let items: Vec<String> = values.iter().map(|v| format!("{:.4}", v)).collect();
            format!("[{}]", items.join(", "))
        }
    };
    if unit.is_empty() {
        body
    } else {
        format!("{} {}", body, unit)
    }
}
