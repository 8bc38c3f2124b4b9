use std::io::Read;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use capiconv_api::rules::rules_for;
use capiconv_core::{Direction, SchemaVersion};
use capiconv_kubehub::Registry;
use clap::{Parser, Subcommand, ValueEnum};
use kube::core::conversion::ConversionReview;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "capiconvctl", version, about = "Convert Cluster API objects between v1alpha2 and v1alpha3")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, env = "CAPICONV_OUTPUT", default_value_t = Output::Yaml)]
    output: Output,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Output { Yaml, Json, Human }

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert one object (YAML or JSON) to the target version
    Convert {
        /// Target version, e.g. "v1alpha3" or "cluster.x-k8s.io/v1alpha2"
        #[arg(long = "to", env = "CAPICONV_TARGET_VERSION")]
        to: String,
        /// Input file; "-" reads stdin
        #[arg(short = 'f', long = "file", default_value = "-")]
        file: String,
    },
    /// Answer a ConversionReview read as JSON
    Review {
        /// Input file; "-" reads stdin
        #[arg(short = 'f', long = "file", default_value = "-")]
        file: String,
    },
    /// Print the per-field conversion rules
    Rules {
        /// Only rules for this record, e.g. "ClusterStatus"
        #[arg(long = "record")]
        record: Option<String>,
        /// Only rules applied when converting to this version
        #[arg(long = "to")]
        to: Option<String>,
    },
}

fn init_tracing() {
    let env = std::env::var("CAPICONV_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env).unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file))
    }
}

fn print_value(v: &serde_json::Value, output: Output) -> Result<()> {
    match output {
        Output::Json | Output::Human => println!("{}", serde_json::to_string_pretty(v)?),
        Output::Yaml => print!("{}", serde_yaml::to_string(v)?),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let registry = Registry::default();
    match cli.command {
        Commands::Convert { to, file } => {
            if SchemaVersion::parse(&to).is_none() {
                return Err(anyhow!("unsupported target version {} (expect v1alpha2 or v1alpha3)", to));
            }
            let text = read_input(&file)?;
            // YAML is a superset of JSON
            let obj: serde_json::Value = serde_yaml::from_str(&text).context("parsing input object")?;
            debug!(target_version = %to, "converting object");
            let out = registry.convert_object(obj, &to)?;
            print_value(&out, cli.output)?;
        }
        Commands::Review { file } => {
            let text = read_input(&file)?;
            let review: ConversionReview = serde_json::from_str(&text).context("parsing ConversionReview")?;
            let out = registry.review(review);
            print_value(&serde_json::to_value(&out)?, cli.output)?;
        }
        Commands::Rules { record, to } => {
            let direction = match to.as_deref() {
                Some(v) => {
                    let target = SchemaVersion::parse(v).ok_or_else(|| anyhow!("unsupported version {v}"))?;
                    Some(if target.is_hub() { Direction::ToHub } else { Direction::FromHub })
                }
                None => None,
            };
            let rules: Vec<_> = rules_for(record.as_deref(), direction).collect();
            match cli.output {
                Output::Human => {
                    for r in rules {
                        println!("{} • {} • {} • {} • {}", r.record, r.field, r.direction, r.category.as_str(), r.note);
                    }
                }
                _ => print_value(&serde_json::to_value(&rules)?, cli.output)?,
            }
        }
    }
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!(error = ?e, "capiconvctl failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
