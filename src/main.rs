mod cli;
mod presets;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use checkit::domain::DocumentKind;
use checkit::output::OutputFormat;

use cli::validate::ValidateFlags;

#[derive(Parser)]
#[command(
    name = "checkit",
    about = "Validate and generate Brazilian documents, phones, e-mails and credit cards",
    version
)]
enum Cli {
    /// Validate a single value
    Validate(ValidateArgs),
    /// Generate valid sample values
    Generate(GenerateArgs),
    /// Detect the brand of a credit card number
    Brand(BrandArgs),
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Write a default checkit.toml
    Init(InitArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)]
struct ValidateArgs {
    #[arg(help = "Kind of value: cpf, cnpj, cep, email, phone, creditCard")]
    kind: DocumentKind,

    value: String,

    #[arg(long, help = "Treat an empty value as valid")]
    allow_empty: bool,

    #[arg(long, help = "Replace every failure message with this text")]
    custom_message: Option<String>,

    #[arg(long, help = "Return digits only instead of the formatted value")]
    raw: bool,

    #[arg(long, help = "Request the international phone format (digits only)")]
    international: bool,

    #[arg(long, help = "Reject international and subdomain e-mail addresses")]
    strict_domain: bool,

    #[arg(long = "brand", help = "Accepted card brand (repeatable)")]
    brands: Vec<String>,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json, csv"
    )]
    format: OutputFormat,
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(help = "Kind of value: cpf, cnpj, cep, email, phone, creditCard")]
    kind: DocumentKind,

    #[arg(long, help = "Card brand, e.g. Visa or Mastercard")]
    brand: Option<String>,

    #[arg(long, short = 'n', default_value_t = 1, help = "How many values to generate")]
    count: usize,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json, csv"
    )]
    format: OutputFormat,
}

#[derive(Parser)]
struct BrandArgs {
    number: String,
}

#[derive(Parser)]
struct ServeArgs {
    #[arg(long, help = "Address to bind, overrides the configuration file")]
    addr: Option<String>,

    #[arg(long, help = "Path to a checkit.toml")]
    config: Option<PathBuf>,

    #[arg(long, help = "Configuration profile to use")]
    profile: Option<String>,
}

#[derive(Parser)]
struct InitArgs {
    #[arg(long, help = "Overwrite existing checkit.toml if it already exists")]
    force: bool,
}

#[derive(Parser)]
struct CompletionsArgs {
    #[arg(help = "Target shell: bash, zsh, fish, elvish, powershell")]
    shell: Shell,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse() {
        Cli::Validate(args) => {
            let flags = ValidateFlags {
                allow_empty: args.allow_empty,
                custom_message: args.custom_message,
                raw: args.raw,
                international: args.international,
                strict_domain: args.strict_domain,
                brands: args.brands,
            };
            cli::validate::run_validate(args.kind, &args.value, &flags, args.format)
        }
        Cli::Generate(args) => {
            cli::generate::run_generate(args.kind, args.brand.as_deref(), args.count, args.format)
        }
        Cli::Brand(args) => cli::validate::run_brand(&args.number),
        Cli::Serve(args) => cli::serve::run_serve(
            args.addr.as_deref(),
            args.config.as_deref(),
            args.profile.as_deref(),
        ),
        Cli::Init(args) => cli::init::run_init(args.force),
        Cli::Completions(args) => {
            generate(
                args.shell,
                &mut Cli::command(),
                "checkit",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
