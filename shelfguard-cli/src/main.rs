use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use shelfguard_core::sources::{JsonCatalog, ProfileRules, TomlDictionary};
use shelfguard_core::{
    CheckPolicy, Checker, CoreConfig, ProductSource, RuleSource, ScanLog, SynonymSource,
};

#[derive(Parser)]
#[command(
    name = "shelfguard",
    about = "Check scanned products against a dietary restriction profile"
)]
struct Cli {
    /// Directory holding config.toml and the source fixture files
    #[arg(long, default_value = ".")]
    root: PathBuf,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Check a product barcode against a user's rules
    Check {
        #[arg(long)]
        barcode: String,
        /// Acting user; omitting it fails the check as unauthenticated
        #[arg(long)]
        user: Option<String>,
    },
    /// List the rules configured for a user
    Rules {
        #[arg(long)]
        user: String,
    },
    /// Show the catalog entry for a barcode
    Lookup {
        #[arg(long)]
        barcode: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CoreConfig::load(&cli.root)?;
    match cli.cmd {
        Cmd::Check { barcode, user } => check(&config, user.as_deref(), &barcode),
        Cmd::Rules { user } => list_rules(&config, &user),
        Cmd::Lookup { barcode } => lookup(&config, &barcode),
    }
}

fn check(config: &CoreConfig, user: Option<&str>, barcode: &str) -> Result<()> {
    let rules: Arc<dyn RuleSource> = Arc::new(
        ProfileRules::load(&config.sources.profile_path).context("loading rule profiles")?,
    );
    // Synonym expansion is fail-open: a missing or broken dictionary demotes
    // the check to literal-term matching instead of aborting it.
    let synonyms: Arc<dyn SynonymSource> = match TomlDictionary::load(&config.sources.dictionary_path)
    {
        Ok(dictionary) => Arc::new(dictionary),
        Err(err) => {
            eprintln!("warning: synonym dictionary unavailable ({err:#}); matching literal terms only");
            Arc::new(TomlDictionary::default())
        }
    };
    let products: Arc<dyn ProductSource> =
        Arc::new(JsonCatalog::load(&config.sources.catalog_path).context("loading product catalog")?);

    let checker = Checker::new(rules, synonyms, products)
        .with_policy(CheckPolicy {
            fetch_timeout: config.policies.fetch_timeout(),
        })
        .with_scan_log(ScanLog::new(&config.logbook.scan_log));

    let report = checker.check(user, barcode)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn list_rules(config: &CoreConfig, user: &str) -> Result<()> {
    let profiles =
        ProfileRules::load(&config.sources.profile_path).context("loading rule profiles")?;
    let rules = profiles.rules_for_user(user)?;
    if rules.is_empty() {
        println!("no rules configured for {user}");
        return Ok(());
    }
    for rule in rules {
        println!("{:<8} {}", rule.kind.as_str(), rule.value);
    }
    Ok(())
}

fn lookup(config: &CoreConfig, barcode: &str) -> Result<()> {
    let catalog =
        JsonCatalog::load(&config.sources.catalog_path).context("loading product catalog")?;
    match catalog.product_by_barcode(barcode)? {
        Some(product) => println!("{}", serde_json::to_string_pretty(&product)?),
        None => bail!("product not found"),
    }
    Ok(())
}
