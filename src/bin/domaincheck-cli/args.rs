use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "domaincheck-cli", version, about = "Valide le format de noms de domaine ASCII")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des domaines depuis stdin (un par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// affiche les codes (zero_size, ...) au lieu des messages en sortie human
    #[arg(long)]
    pub codes: bool,

    /// verbosité des logs (-v, -vv, -vvv ; feature `with-tracing`)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// n'affiche que les erreurs dans les logs
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        domain: String,
    },
    /// liste les codes de violation et leurs messages
    Codes,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
