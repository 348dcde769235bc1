use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use arrayops_core::{ArrayOp, Orchestrator};

/// arrayops — contract-checked integer array operations
///
/// Run Sort, Maximum, or Sum on a comma-separated integer list and
/// inspect each operation's contract.
#[derive(Parser)]
#[command(name = "arrayops", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an operation on an input array
    Run {
        /// Operation to run
        #[arg(long, value_enum)]
        op: OpArg,
        /// Comma-separated integers, e.g. "3, 1, 2"
        #[arg(long)]
        input: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an operation's contract
    Contract {
        /// Operation to describe
        #[arg(long, value_enum)]
        op: OpArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available operations
    List,
}

/// Command-line spelling of the operation variants
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpArg {
    Sort,
    Max,
    Sum,
}

impl From<OpArg> for ArrayOp {
    fn from(arg: OpArg) -> Self {
        match arg {
            OpArg::Sort => ArrayOp::Sort,
            OpArg::Max => ArrayOp::Maximum,
            OpArg::Sum => ArrayOp::Sum,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run { op, input, json } => cmd_run(op.into(), &input, json),
        Commands::Contract { op, json } => cmd_contract(op.into(), json),
        Commands::List => cmd_list(),
    };

    process::exit(exit_code);
}

// ── Commands ──────────────────────────────────────────────

fn cmd_run(op: ArrayOp, input: &str, json: bool) -> i32 {
    let mut orch = Orchestrator::new();
    orch.select_operation(op);
    orch.set_input(input);
    orch.execute();

    if json {
        match serde_json::to_string_pretty(&orch.snapshot()) {
            Ok(out) => println!("{}", out),
            Err(err) => {
                eprintln!("error: {}", err);
                return 2;
            }
        }
    } else {
        println!("Operation:     {} ({})", op.name(), op.description());
        println!("Input:         {}", orch.input_text());
        println!("Precondition:  {}", met_text(orch.precondition_met()));
        println!("Result:        {}", orch.result());
        println!("Postcondition: {}", met_text(orch.postcondition_met()));
        println!("Status:        {}", orch.status());
    }

    if orch.postcondition_met() {
        0
    } else {
        1
    }
}

fn cmd_contract(op: ArrayOp, json: bool) -> i32 {
    let contract = op.contract();

    if json {
        match serde_json::to_string_pretty(&contract) {
            Ok(out) => println!("{}", out),
            Err(err) => {
                eprintln!("error: {}", err);
                return 2;
            }
        }
    } else {
        println!("{}", format!("Contract: {}", op.name()).bold());
        println!("  Precondition:    {}", contract.precondition);
        println!("  Postcondition:   {}", contract.postcondition);
        println!("  Side effects:    {}", contract.effects);
        println!("  Valid example:   {}", contract.valid_example);
        println!("  Invalid example: {}", contract.invalid_example);
    }

    0
}

fn cmd_list() -> i32 {
    for op in ArrayOp::ALL {
        println!("{:<8} {}", op.name(), op.description());
    }
    0
}

// ── Rendering ─────────────────────────────────────────────

/// The met/not-met wording the original UI derived from the boolean flags,
/// green for met and red for not met
fn met_text(met: bool) -> String {
    if met {
        "met".green().to_string()
    } else {
        "not met".red().to_string()
    }
}
