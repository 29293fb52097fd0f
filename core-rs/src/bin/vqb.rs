//! VQB - Visual Query Builder CLI
//!
//! Command-line companion for the query builder core: compiles saved query
//! descriptions against an ontology configuration and prints the resulting
//! SPARQL, inspects ontology metadata, and debugs property paths.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vqb_core::{
    parse_property_path, OntologyLibrary, OntologyMetadata, QueryDescription, VERSION,
};

#[derive(Parser)]
#[command(name = "vqb")]
#[command(version = VERSION)]
#[command(about = "Visual SPARQL query builder core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a saved query description into SPARQL
    Compile {
        /// Ontology configuration (YAML)
        #[arg(long)]
        ontology: PathBuf,
        /// Saved query description (YAML)
        #[arg(long)]
        query: PathBuf,
        /// Output format (sparql, json)
        #[arg(long, default_value = "sparql")]
        format: String,
    },
    /// Show the metadata answers for one class or property URI
    Inspect {
        /// Ontology configuration (YAML)
        #[arg(long)]
        ontology: PathBuf,
        /// URI to look up
        uri: String,
    },
    /// Parse a property path expression and print its algebra
    ParsePath {
        /// Property path, e.g. "<http://ex.org/p1>/<http://ex.org/p2>"
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            ontology,
            query,
            format,
        } => {
            let library = OntologyLibrary::load(&ontology)?;
            let description = QueryDescription::load(&query)?;
            let graph = description.build_graph(&library)?;

            match format.as_str() {
                "sparql" => {
                    println!("{}", graph.compile_sparql(&library)?);
                }
                "json" => {
                    let compiled = graph.compile(&library)?;
                    let summary = serde_json::json!({
                        "patternCount": compiled.patterns.len(),
                        "projection": compiled
                            .projection
                            .iter()
                            .map(|v| v.as_str().to_string())
                            .collect::<Vec<_>>(),
                        "distinct": compiled.distinct,
                        "sparql": graph.compile_sparql(&library)?,
                    });
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                other => anyhow::bail!("unknown output format: {}", other),
            }
        }

        Commands::Inspect { ontology, uri } => {
            let library = OntologyLibrary::load(&ontology)?;

            match library.default_label_property(&uri) {
                Some(label) => println!("default label property: {}", label.as_str()),
                None => println!("default label property: (none)"),
            }
            println!("multilingual:           {}", library.is_multilingual(&uri));
            println!("optional enabled:       {}", library.is_optional_enabled(&uri));
            println!("negation enabled:       {}", library.is_negation_enabled(&uri));
            match library.tooltip(&uri) {
                Some(tooltip) => println!("tooltip:                {}", tooltip),
                None => println!("tooltip:                (none)"),
            }
        }

        Commands::ParsePath { path } => {
            let parsed = parse_property_path(&path)?;
            println!("{:#?}", parsed);
        }
    }

    Ok(())
}
