#![forbid(unsafe_code)]

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use firegap_app::{
    ComputeInput, ExplainOutput, RulesInput, exit_code_for_error, format_explanation,
    format_not_found, format_rules_table, parse_response_json, render_markdown,
    render_summary_line, run_compute, run_explain, run_rules, serialize_response, write_text,
};
use firegap_settings::Overrides;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(
    name = "firegap",
    version,
    about = "Fire-separation clearance decisions for pipe installations"
)]
struct Cli {
    /// Config file. Missing is fine; defaults apply and rules are read next to it.
    #[arg(long, global = true, default_value = "firegap.toml")]
    config: Utf8PathBuf,

    /// Rule catalog directory (overrides `rules_dir` from the config).
    #[arg(long, global = true)]
    rules_dir: Option<Utf8PathBuf>,

    /// Profile override (`mlar` or `conservative`).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Date rule validity is checked against (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    as_of: Option<String>,

    /// Raise log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide the minimum clearance for one request.
    Compute {
        /// Request JSON file, or `-` for stdin.
        #[arg(long)]
        request: String,

        /// Attach the rule evaluation trace to the response.
        #[arg(long)]
        debug: bool,

        /// Write the response JSON here instead of stdout.
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Also write a Markdown summary.
        #[arg(long)]
        markdown: Option<Utf8PathBuf>,
    },

    /// List and lint the rule catalog.
    Rules {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Render Markdown from a response JSON file.
    Md {
        #[arg(long)]
        response: Utf8PathBuf,

        /// Write Markdown to this file instead of stdout.
        #[arg(long)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a clause kind, status, or source type.
    Explain {
        /// e.g. `dn_max`, `bedingt zulässig`, `AbP`.
        identifier: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.cmd {
        Commands::Compute {
            ref request,
            debug,
            ref out,
            ref markdown,
        } => cmd_compute(&cli, request, debug, out.as_deref(), markdown.as_deref()),
        Commands::Rules { json } => cmd_rules(&cli, json),
        Commands::Md {
            ref response,
            ref output,
        } => cmd_md(response, output.as_deref()),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("firegap error: {err:#}");
            std::process::exit(exit_code_for_error(&err));
        }
    }
}

/// Config text plus the directory relative paths resolve against.
fn read_config(cli: &Cli) -> anyhow::Result<(Utf8PathBuf, String)> {
    let config_dir = match cli.config.parent() {
        Some(p) if !p.as_str().is_empty() => p.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    let text = match std::fs::read_to_string(&cli.config) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %cli.config, "no config file, using defaults");
            String::new()
        }
        Err(err) => return Err(err).with_context(|| format!("read config: {}", cli.config)),
    };
    Ok((config_dir, text))
}

fn overrides(cli: &Cli) -> anyhow::Result<Overrides> {
    // A rules dir given on the command line is relative to the working
    // directory, not to the config file.
    let rules_dir = match &cli.rules_dir {
        Some(dir) if dir.is_relative() => {
            let cwd = std::env::current_dir().context("resolve working directory")?;
            let cwd = Utf8PathBuf::from_path_buf(cwd)
                .map_err(|p| anyhow::anyhow!("working directory is not UTF-8: {}", p.display()))?;
            Some(cwd.join(dir).into_string())
        }
        Some(dir) => Some(dir.to_string()),
        None => None,
    };
    Ok(Overrides {
        profile: cli.profile.clone(),
        rules_dir,
        as_of: cli.as_of.clone(),
    })
}

fn read_request(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read request from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(source).with_context(|| format!("read request: {source}"))
}

fn cmd_compute(
    cli: &Cli,
    request: &str,
    debug: bool,
    out: Option<&Utf8Path>,
    markdown: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let (config_dir, config_text) = read_config(cli)?;
    let request_json = read_request(request)?;

    let output = run_compute(ComputeInput {
        config_dir: &config_dir,
        config_text: &config_text,
        overrides: overrides(cli)?,
        request_json: &request_json,
        debug,
    })?;
    tracing::info!(
        profile = %output.resolved_config.profile,
        rules = output.catalog.rules,
        digest = %output.catalog.digest,
        "computed clearance"
    );

    let data = serialize_response(&output.response).context("serialize response")?;
    match out {
        Some(path) => {
            let text = String::from_utf8(data).context("response is not UTF-8")?;
            write_text(path, &text).context("write response json")?;
            println!("{}", render_summary_line(&output.response));
        }
        None => {
            print!("{}", String::from_utf8_lossy(&data));
        }
    }

    if let Some(path) = markdown {
        write_text(path, &render_markdown(&output.response)).context("write markdown")?;
    }

    Ok(0)
}

fn cmd_rules(cli: &Cli, json: bool) -> anyhow::Result<i32> {
    let (config_dir, config_text) = read_config(cli)?;
    let output = run_rules(RulesInput {
        config_dir: &config_dir,
        config_text: &config_text,
        overrides: overrides(cli)?,
    })?;

    if json {
        let text = serde_json::to_string_pretty(&output).context("serialize rule listing")?;
        println!("{text}");
    } else {
        print!("{}", format_rules_table(&output));
    }

    // Rules the engine would reject make every compute fail.
    Ok(if output.is_clean() { 0 } else { 1 })
}

fn cmd_md(response_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(response_path)
        .with_context(|| format!("read response: {response_path}"))?;
    let response = parse_response_json(&text)?;
    let md = render_markdown(&response);

    match output {
        Some(path) => write_text(path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }
    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            clause_kinds,
            statuses,
            source_types,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, clause_kinds, statuses, source_types)
            );
            Ok(1)
        }
    }
}
