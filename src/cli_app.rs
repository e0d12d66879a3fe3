//! Top-level CLI definition and dispatch.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};
use serde_json::json;
use thiserror::Error;

use tvset_simulator::core::config::Config;
use tvset_simulator::core::errors::TvError;
use tvset_simulator::set::TvSet;

/// TV-set simulator — a bounded channel inventory behind a remote control.
#[derive(Debug, Parser)]
#[command(
    name = "tvsim",
    author,
    version,
    about = "TV-set simulator - power and channel navigation",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Apply an operation script to a simulated set.
    Run(RunArgs),
    /// Power a set on and report its state.
    Status(StatusArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct SetArgs {
    /// Model label of the set.
    #[arg(long)]
    model: Option<String>,
    /// Channel capacity (must be at least 1).
    #[arg(long)]
    capacity: Option<usize>,
    /// Seed for the random channel discovery draw.
    #[arg(long, conflicts_with = "channels")]
    seed: Option<u64>,
    /// Pin discovery to a fixed channel count instead of a random draw.
    #[arg(long)]
    channels: Option<usize>,
}

#[derive(Debug, Clone, clap::Args)]
struct RunArgs {
    #[command(flatten)]
    set: SetArgs,
    /// Comma-separated operation script: on, off, next, prev, detect, to:<n>.
    #[arg(long, value_name = "SCRIPT", default_value = "on")]
    ops: String,
}

#[derive(Debug, Clone, clap::Args)]
struct StatusArgs {
    #[command(flatten)]
    set: SetArgs,
}

#[derive(Debug, Clone, clap::Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: CompletionShell,
}

/// CLI-layer errors, separate from the library's `TvError` taxonomy.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Tv(#[from] TvError),

    #[error("invalid operation {op:?} (expected on, off, next, prev, detect, to:<n>)")]
    InvalidOp { op: String },
}

// ──────────────────── operation script ────────────────────

#[derive(Debug, Clone, Copy)]
enum TvOp {
    On,
    Off,
    Next,
    Previous,
    Detect,
    To(usize),
}

impl TvOp {
    fn label(self) -> String {
        match self {
            Self::On => "on".to_string(),
            Self::Off => "off".to_string(),
            Self::Next => "next".to_string(),
            Self::Previous => "prev".to_string(),
            Self::Detect => "detect".to_string(),
            Self::To(n) => format!("to:{n}"),
        }
    }
}

fn parse_ops(script: &str) -> Result<Vec<TvOp>, CliError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "on" => Ok(TvOp::On),
            "off" => Ok(TvOp::Off),
            "next" => Ok(TvOp::Next),
            "prev" => Ok(TvOp::Previous),
            "detect" => Ok(TvOp::Detect),
            other => other
                .strip_prefix("to:")
                .and_then(|n| n.parse().ok())
                .map(TvOp::To)
                .ok_or_else(|| CliError::InvalidOp {
                    op: other.to_string(),
                }),
        })
        .collect()
}

// ──────────────────── dispatch ────────────────────

/// Parse-free entry point used by `main`.
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.no_color || !io::stdout().is_terminal() {
        control::set_override(false);
    }

    match &cli.command {
        Command::Run(args) => cmd_run(cli, args)?,
        Command::Status(args) => cmd_status(cli, args)?,
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "tvsim", &mut io::stdout());
        }
    }
    Ok(())
}

fn load_config(cli: &Cli, args: &SetArgs) -> Result<Config, CliError> {
    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(model) = &args.model {
        cfg.tv.model.clone_from(model);
    }
    if let Some(capacity) = args.capacity {
        cfg.tv.channel_capacity = capacity;
    }
    if let Some(seed) = args.seed {
        cfg.discovery.seed = Some(seed);
    }
    if let Some(channels) = args.channels {
        cfg.discovery.fixed_channels = Some(channels);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_run(cli: &Cli, args: &RunArgs) -> Result<(), CliError> {
    let ops = parse_ops(&args.ops)?;
    let cfg = load_config(cli, &args.set)?;
    let mut set = cfg.build_set()?;

    let mut steps = Vec::with_capacity(ops.len());
    for op in ops {
        match op {
            TvOp::On => set.turn_on(),
            TvOp::Off => set.turn_off(),
            TvOp::Next => set.switch_next_channel(),
            TvOp::Previous => set.switch_previous_channel(),
            TvOp::Detect => set.auto_detect_channels(),
            TvOp::To(n) => set.switch_to(n)?,
        }
        steps.push((op.label(), snapshot(&set)));
    }

    if cli.json {
        let payload = json!({
            "steps": steps
                .iter()
                .map(|(op, state)| json!({ "op": op, "state": state }))
                .collect::<Vec<_>>(),
            "final": snapshot(&set),
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        println!("{} ({})", set.model().bold(), set.channel_capacity());
        for (op, state) in &steps {
            println!(
                "  {} {} -> {}",
                "▸".cyan(),
                op,
                state["current_channel"].as_str().unwrap_or("?")
            );
        }
        print_summary(&set);
    }
    Ok(())
}

fn cmd_status(cli: &Cli, args: &StatusArgs) -> Result<(), CliError> {
    let cfg = load_config(cli, &args.set)?;
    let mut set = cfg.build_set()?;
    set.turn_on();

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot(&set)).unwrap_or_default()
        );
    } else {
        println!("{} ({})", set.model().bold(), set.channel_capacity());
        print_summary(&set);
    }
    Ok(())
}

fn snapshot(set: &TvSet) -> serde_json::Value {
    json!({
        "model": set.model(),
        "channel_capacity": set.channel_capacity(),
        "is_on": set.is_on(),
        "has_signal": set.has_signal(),
        "channel_count": set.channel_count(),
        "current_channel": set.current_channel().name(),
        "turn_on_count": set.turn_on_count(),
        "channels": set.channels(),
    })
}

fn print_summary(set: &TvSet) {
    let power = if set.is_on() {
        "on".green()
    } else {
        "off".red()
    };
    let signal = if set.has_signal() {
        "signal".green()
    } else {
        "no signal".yellow()
    };
    println!(
        "  power {power}, {signal}, {} of {} channels, tuned to {}",
        set.channel_count(),
        set.channel_capacity(),
        set.current_channel().name().bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run_with_script() {
        let cli = Cli::try_parse_from([
            "tvsim", "run", "--ops", "on,next,to:2", "--channels", "3", "--capacity", "5",
        ])
        .unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.ops, "on,next,to:2");
                assert_eq!(args.set.channels, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn seed_conflicts_with_fixed_channels() {
        let parsed =
            Cli::try_parse_from(["tvsim", "status", "--seed", "1", "--channels", "2"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn op_script_round_trips_labels() {
        let ops = parse_ops("on, next ,prev,to:4,detect,off").unwrap();
        let labels: Vec<String> = ops.iter().map(|op| op.label()).collect();
        assert_eq!(labels, ["on", "next", "prev", "to:4", "detect", "off"]);
    }

    #[test]
    fn unknown_op_is_rejected() {
        let err = parse_ops("on,rewind").unwrap_err();
        assert!(err.to_string().contains("rewind"));
    }

    #[test]
    fn malformed_to_op_is_rejected() {
        assert!(parse_ops("to:first").is_err());
        assert!(parse_ops("to:").is_err());
    }
}
