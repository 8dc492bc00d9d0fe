use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use nova_classmodel::ClassModel;
use nova_select::{print_hierarchy, resolve_all, Resolution};
use serde::Serialize;

mod fixtures;

#[derive(Parser)]
#[command(
    name = "nova-select",
    version,
    about = "Default-method selection demos (hierarchy walks, conflict reports)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve every slot of the built-in fixtures; exits nonzero on conflicts
    Demo(DemoArgs),
    /// Print a fixture hierarchy in walk order
    PrintHierarchy(PrintHierarchyArgs),
}

#[derive(Args)]
struct DemoArgs {
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PrintHierarchyArgs {
    /// Fixture to print (see `demo` for the list)
    #[arg(long, default_value = "diamond-override")]
    fixture: String,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Demo(args) => demo(args),
        Command::PrintHierarchy(args) => print_fixture(args),
    }
}

fn demo(args: DemoArgs) -> Result<i32> {
    let mut scenarios = Vec::new();
    let mut conflicts = 0usize;

    for fixture in fixtures::all() {
        let outcomes = resolve_all(&fixture.store, fixture.root);
        if outcomes
            .iter()
            .any(|(_, resolution)| matches!(resolution, Resolution::Conflict(_)))
        {
            conflicts += 1;
        }
        let slots = outcomes
            .iter()
            .map(|(slot, resolution)| SlotReport {
                method: slot.to_string(),
                outcome: OutcomeReport::from_resolution(resolution, &fixture.store),
            })
            .collect();
        scenarios.push(ScenarioReport {
            fixture: fixture.name,
            root: fixture.store.class_name(fixture.root).to_string(),
            slots,
        });
    }

    let report = DemoReport { scenarios };
    tracing::debug!(
        target: "nova.select.cli",
        fixtures = report.scenarios.len(),
        conflicts,
        "resolved demo fixtures"
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for scenario in &report.scenarios {
            println!("{}: root {}", scenario.fixture, scenario.root);
            for slot in &scenario.slots {
                match &slot.outcome {
                    OutcomeReport::Target { target } => {
                        println!("  {} -> {}", slot.method, target);
                    }
                    OutcomeReport::Conflict { error, detail } => {
                        println!("  {} -> conflict: {}", slot.method, error);
                        for line in detail.lines() {
                            println!("      {line}");
                        }
                    }
                    OutcomeReport::NoMatch => {
                        println!("  {} -> no match", slot.method);
                    }
                }
            }
        }
        if conflicts > 0 {
            println!("summary: {conflicts} fixture(s) with conflicts");
        } else {
            println!("summary: all slots resolved");
        }
    }

    Ok(if conflicts > 0 { 1 } else { 0 })
}

fn print_fixture(args: PrintHierarchyArgs) -> Result<i32> {
    let Some(fixture) = fixtures::by_name(&args.fixture) else {
        let names: Vec<&str> = fixtures::all().iter().map(|f| f.name).collect();
        bail!(
            "unknown fixture `{}` (available: {})",
            args.fixture,
            names.join(", ")
        );
    };

    let tree = print_hierarchy(&fixture.store, fixture.root);
    if args.json {
        let report = TreeReport {
            fixture: fixture.name,
            root: fixture.store.class_name(fixture.root).to_string(),
            tree: tree.lines().map(str::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {}", fixture.name, fixture.description);
        print!("{tree}");
    }
    Ok(0)
}

#[derive(Serialize)]
struct DemoReport {
    scenarios: Vec<ScenarioReport>,
}

#[derive(Serialize)]
struct ScenarioReport {
    fixture: &'static str,
    root: String,
    slots: Vec<SlotReport>,
}

#[derive(Serialize)]
struct SlotReport {
    method: String,
    #[serde(flatten)]
    outcome: OutcomeReport,
}

#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum OutcomeReport {
    Target { target: String },
    Conflict { error: String, detail: String },
    NoMatch,
}

impl OutcomeReport {
    fn from_resolution(resolution: &Resolution, model: &dyn ClassModel) -> Self {
        match resolution {
            Resolution::Target(method) => OutcomeReport::Target {
                target: model.method_display(*method),
            },
            Resolution::Conflict(conflict) => OutcomeReport::Conflict {
                error: conflict.kind.to_string(),
                detail: conflict.detail.clone(),
            },
            Resolution::NoMatch => OutcomeReport::NoMatch,
        }
    }
}

#[derive(Serialize)]
struct TreeReport {
    fixture: &'static str,
    root: String,
    tree: Vec<String>,
}
