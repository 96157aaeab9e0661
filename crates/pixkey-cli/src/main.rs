//! # pixkey CLI Entry Point
//!
//! Thin shell over the service crate: validates key values from the
//! command line and runs a register/search/deactivate round against the
//! in-memory store. Useful for poking at the rule engine without a
//! deployment.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use pixkey_core::{
    AccountNumber, AccountType, BranchNumber, HolderName, KeyType, PersonType,
};
use pixkey_service::{KeyPolicy, KeyService, MemoryKeyStore, QueryFilter};
use pixkey_state::NewKey;

/// Pix key toolchain — format validation and registration rules.
#[derive(Parser, Debug)]
#[command(name = "pixkey", version, about)]
struct Cli {
    /// YAML policy file overriding the national defaults.
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a key value against its key-type format contract.
    Validate {
        /// Key type: cpf, cnpj, phone, email, or random.
        key_type: String,
        /// The key value to check.
        value: String,
    },
    /// Register, search, and deactivate a key against an in-memory store.
    Demo,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let policy = match &cli.policy {
        Some(path) => KeyPolicy::from_yaml_file(path)?,
        None => KeyPolicy::default(),
    };

    match cli.command {
        Commands::Validate { key_type, value } => validate(&policy, &key_type, &value),
        Commands::Demo => demo(policy),
    }
}

fn validate(policy: &KeyPolicy, key_type: &str, value: &str) -> anyhow::Result<()> {
    let key_type = KeyType::from_str(key_type)?;
    tracing::info!(%key_type, "validating key value");
    let registry = policy.registry();
    match registry.validator_for(key_type)?.validate(value) {
        Ok(()) => {
            println!("valid {key_type} key");
            Ok(())
        }
        Err(rejection) => {
            eprintln!("{rejection}");
            std::process::exit(1);
        }
    }
}

fn demo(policy: KeyPolicy) -> anyhow::Result<()> {
    let service = KeyService::with_policy(MemoryKeyStore::new(), policy);

    let email = service.register(NewKey {
        key_type: KeyType::Email,
        key_value: "ana@example.com".to_string(),
        account_type: AccountType::Checking,
        branch: BranchNumber::new(1234)?,
        account: AccountNumber::new(12_345_678)?,
        holder: HolderName::new("Ana", Some("Souza".to_string()))?,
        person_type: PersonType::NaturalPerson,
    })?;
    println!("registered:\n{}", serde_json::to_string_pretty(&email)?);

    let hits = service.search(QueryFilter {
        key_type: Some("email".to_string()),
        ..QueryFilter::default()
    })?;
    println!("search by key type found {} record(s)", hits.len());

    let inactive = service.deactivate(email.id())?;
    println!("deactivated:\n{}", serde_json::to_string_pretty(&inactive)?);

    match service.deactivate(email.id()) {
        Err(rejection) => println!("second deactivation rejected: {rejection}"),
        Ok(_) => anyhow::bail!("second deactivation unexpectedly succeeded"),
    }

    Ok(())
}
