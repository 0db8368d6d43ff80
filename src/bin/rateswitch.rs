use std::time::Duration;

use clap::{Parser, Subcommand};
use rateswitch::cli::StepScript;
use rateswitch::utils::LoggingConfig;
use rateswitch::{
    currency_converter, formatted_sort_code, simulate_journey, HostEvent, JourneyConfig,
    SimulationReport, SimulationScript,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "rateswitch", version, about = "Rate switch cancellation journey CLI", author)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the journey against a scripted EPS backend
    Simulate {
        #[arg(long, default_value = "200")]
        account: StepScript,
        #[arg(long, default_value = "200")]
        audit: StepScript,
        #[arg(long, default_value = "200")]
        alert: StepScript,
        /// 0 disables the per-call timeout
        #[arg(long, default_value_t = 5_000)]
        timeout_ms: u64,
        #[arg(long)]
        json: bool,
    },
    Format {
        #[command(subcommand)]
        command: FormatCommand,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum FormatCommand {
    Currency {
        #[arg(allow_hyphen_values = true)]
        amount: Option<f64>,
    },
    SortCode {
        code: String,
        #[arg(long, default_value = "-")]
        separator: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration resolved from the environment
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LoggingConfig::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            account,
            audit,
            alert,
            timeout_ms,
            json,
        } => {
            let script = SimulationScript {
                account,
                audit,
                alert,
                call_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            };
            let report = simulate_journey(&script).await;
            if json {
                print_report_json(&report)?;
            } else {
                print_report(&report);
            }
        }
        Command::Format { command } => match command {
            FormatCommand::Currency { amount } => println!("{}", currency_converter(amount)),
            FormatCommand::SortCode { code, separator } => {
                println!("{}", formatted_sort_code(&code, &separator))
            }
        },
        Command::Config { command } => match command {
            ConfigCommand::Show => {
                let config = JourneyConfig::from_env()?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        },
    }
    Ok(())
}

fn print_report(report: &SimulationReport) {
    println!("Summary: {:?}", report.summary);
    println!();
    println!("{:<4} {:<20} {}", "#", "Endpoint", "Body");
    for (index, call) in report.calls.iter().enumerate() {
        let body = call
            .body
            .as_ref()
            .map(|body| body.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<4} {:<20} {}", index + 1, call.endpoint, body);
    }
    println!();
    for event in &report.events {
        println!("{}", render_event(event));
    }
    if let Some(outcome) = &report.outcome {
        println!();
        println!("Outcome: {}", outcome.destination());
    }
}

fn render_event(event: &HostEvent) -> String {
    match event {
        HostEvent::Loading(on) => format!("loading({on})"),
        HostEvent::Loader(open) => format!("loader {}", if *open { "open" } else { "close" }),
        HostEvent::Tag { name, metadata } => match metadata {
            Some(metadata) => format!("tag {name} {metadata}"),
            None => format!("tag {name}"),
        },
        HostEvent::Navigate { destination, state } => match state {
            Some(state) => format!("navigate {destination} {state}"),
            None => format!("navigate {destination}"),
        },
        HostEvent::Back => "back".to_string(),
        HostEvent::Exit(message) => format!("exit {message:?}"),
        HostEvent::SentToHost(event) => format!("host {event}"),
    }
}

fn print_report_json(report: &SimulationReport) -> anyhow::Result<()> {
    let value = json!({
        "summary": format!("{:?}", report.summary),
        "calls": report.calls.iter().map(|call| json!({
            "endpoint": call.endpoint,
            "body": call.body,
        })).collect::<Vec<_>>(),
        "events": report.events.iter().map(render_event).collect::<Vec<_>>(),
        "outcome": report.outcome.as_ref().map(|outcome| json!({
            "destination": outcome.destination().path(),
            "state": outcome.state(),
            "events": outcome.events(),
        })),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
