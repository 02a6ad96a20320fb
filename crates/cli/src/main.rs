//! Enum catalog CLI.
//!
//! This binary loads enum descriptors from a JSON catalog and runs library operations
//! against them. It provides:
//! 1. **Inspection:** List enums and their members.
//! 2. **Validation:** Check raw integers for validity and decompose flag values.
//! 3. **Conversion:** Parse text, cast integers and format values.
//! 4. **Metadata:** Describe the member equal to a value.
//!
//! Set `RUST_LOG=bitenum_core=debug` to see descriptor and catalog diagnostics on stderr.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bitenum_core::{
    Catalog, ConfigError, EnumDescriptor, EnumValue, FormatSpec, InvalidValuePolicy, ParseOptions,
    Registry,
};

#[derive(Parser, Debug)]
#[command(
    name = "bitenum",
    author,
    version,
    about = "Validate, parse and describe enum values from a JSON catalog",
    long_about = "Validate, parse and describe enum values from a JSON catalog.\n\nExamples:\n  bitenum -c enums.json list\n  bitenum -c enums.json check Access 3\n  bitenum -c enums.json parse Access \"Read, Write\"\n  bitenum -c enums.json --policy allow cast Access 16"
)]
struct Cli {
    /// JSON catalog of enum definitions.
    #[arg(short, long)]
    catalog: PathBuf,

    /// Match member names ignoring case, `true` or `false` (overrides the catalog options).
    #[arg(long, action = ArgAction::Set)]
    ignore_case: Option<bool>,

    /// Invalid-value policy, `allow` or `disallow` (overrides the catalog options).
    #[arg(long)]
    policy: Option<InvalidValuePolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every enum in the catalog.
    List,

    /// List the members of one enum in declaration order.
    Members {
        /// Enum type name.
        name: String,
    },

    /// Report whether a raw integer is valid, and its flags.
    Check {
        /// Enum type name.
        name: String,
        /// Raw integer value.
        #[arg(allow_hyphen_values = true)]
        value: i128,
    },

    /// Parse an integer or comma-separated member names.
    Parse {
        /// Enum type name.
        name: String,
        /// Text to parse.
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Cast a raw integer under the invalid-value policy.
    Cast {
        /// Enum type name.
        name: String,
        /// Raw integer value.
        #[arg(allow_hyphen_values = true)]
        value: i128,
    },

    /// Render a valid value as `G`, `F`, `D` or `X`.
    Format {
        /// Enum type name.
        name: String,
        /// Raw integer value.
        #[arg(allow_hyphen_values = true)]
        value: i128,
        /// Format specifier.
        #[arg(short, long, default_value = "G")]
        spec: FormatSpec,
    },

    /// Show the name, description and tags of the member equal to a value.
    Describe {
        /// Enum type name.
        name: String,
        /// Raw integer value.
        #[arg(allow_hyphen_values = true)]
        value: i128,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Applies the command-line overrides on top of the catalog's parse options.
fn resolve_options(cli: &Cli, catalog: ParseOptions) -> ParseOptions {
    let mut options = catalog;
    if let Some(ignore_case) = cli.ignore_case {
        options = options.with_ignore_case(ignore_case);
    }
    if let Some(policy) = cli.policy {
        options = options.with_policy(policy);
    }
    options
}

/// Loads the catalog and dispatches the subcommand.
///
/// # Arguments
///
/// * `cli` - Parsed command line.
///
/// # Returns
///
/// `Ok(())` once the result has been printed, or the first catalog or enum failure.
fn run(cli: Cli) -> Result<(), ConfigError> {
    let catalog = Catalog::from_path(&cli.catalog)?;
    let options = resolve_options(&cli, catalog.options);
    let registry = Registry::from_provider(&catalog)?;

    match cli.command {
        Commands::List => {
            for descriptor in registry.iter() {
                println!(
                    "{:<24} {:<5} {:<6} {} members",
                    descriptor.name(),
                    descriptor.width(),
                    if descriptor.is_flags() { "flags" } else { "enum" },
                    descriptor.len()
                );
            }
        }
        Commands::Members { name } => {
            let descriptor = registry.require(&name)?;
            for member in descriptor.members() {
                let native = descriptor.width().to_native(member.bits());
                match member.description() {
                    Some(text) => println!("{:<24} {native:>20}  {text}", member.name()),
                    None => println!("{:<24} {native:>20}", member.name()),
                }
            }
        }
        Commands::Check { name, value } => {
            let descriptor = registry.require(&name)?;
            cmd_check(descriptor, value)?;
        }
        Commands::Parse { name, text } => {
            let descriptor = registry.require(&name)?;
            let parsed = descriptor.parse(&text, options)?;
            print_value(descriptor, parsed);
        }
        Commands::Cast { name, value } => {
            let descriptor = registry.require(&name)?;
            let cast = descriptor.cast(value, options.policy)?;
            print_value(descriptor, cast);
        }
        Commands::Format { name, value, spec } => {
            let descriptor = registry.require(&name)?;
            let value = to_value(descriptor, value)?;
            println!("{}", descriptor.format(value, spec)?);
        }
        Commands::Describe { name, value } => {
            let descriptor = registry.require(&name)?;
            let value = to_value(descriptor, value)?;
            let member = descriptor.member_info(value)?;
            println!("name:        {}", member.name());
            println!("text:        {}", member.text());
            for attribute in member.attributes() {
                match &attribute.data {
                    Some(data) => println!("attribute:   {} = {data}", attribute.kind),
                    None => println!("attribute:   {}", attribute.kind),
                }
            }
        }
    }
    Ok(())
}

/// Prints validity, membership and, for flags enums, the decomposition of `value`.
fn cmd_check(descriptor: &EnumDescriptor, value: i128) -> Result<(), ConfigError> {
    let value = to_value(descriptor, value)?;
    let valid = descriptor.is_valid(value);
    println!("valid:       {valid}");
    println!("defined:     {}", descriptor.is_defined(value));
    if descriptor.is_flags() && valid {
        let names: Vec<&str> = descriptor
            .extract_flags(value)?
            .into_iter()
            .map(|m| m.name())
            .collect();
        println!("flags:       {}", names.join(", "));
    }
    if !valid {
        let cover = descriptor.cover(value);
        println!("uncovered:   {:#x}", descriptor.width().truncate(cover.remaining));
    }
    Ok(())
}

/// Bound-checks a raw integer against the enum's width without applying any policy.
fn to_value(descriptor: &EnumDescriptor, value: i128) -> Result<EnumValue, ConfigError> {
    Ok(descriptor.cast(value, InvalidValuePolicy::Allow)?)
}

fn print_value(descriptor: &EnumDescriptor, value: EnumValue) {
    println!(
        "{} ({})",
        descriptor.format_unchecked(value, FormatSpec::General),
        descriptor.format_unchecked(value, FormatSpec::Decimal)
    );
}
