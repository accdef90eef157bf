// Standard library imports
use std::path::Path;

// External crate imports
use anyhow::{anyhow, Result};
use dotenv::dotenv;
use log::{info, warn};

// Internal crate imports
use jewel_quote::config_loader::AppConfig;
use jewel_quote::domain::enums::{Metal, Purity};
use jewel_quote::engine::{total_for, QuoteSession};
use jewel_quote::infrastructure::format::{format_currency, format_grams};
use jewel_quote::infrastructure::storage::{JsonFileStore, QuoteStore};

const USAGE: &str = "usage:
  jewel_quote quote <gold|silver> <price_per_gram> <weight_grams> [purity] [min%] [max%] [--select N] [--save]
  jewel_quote list <gold|silver>
  jewel_quote delete <gold|silver> <id>";

fn main() -> Result<()> {
    dotenv().ok();

    let config = load_config();
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .init();
    info!("Logger initialized");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("quote") => run_quote(&config, &args[1..]),
        Some("list") => run_list(&config, &args[1..]),
        Some("delete") => run_delete(&config, &args[1..]),
        _ => {
            eprintln!("{}", USAGE);
            Err(anyhow!("missing or unknown command"))
        }
    }
}

/// Config from ./config.toml when present, otherwise built-in defaults
fn load_config() -> AppConfig {
    let config_path = Path::new("./config.toml");
    if !config_path.exists() {
        return AppConfig::default();
    }
    match AppConfig::from_file(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}; using defaults", e);
            AppConfig::default()
        }
    }
}

fn open_store(config: &AppConfig, metal: Metal) -> QuoteStore<JsonFileStore> {
    QuoteStore::new(metal, JsonFileStore::open(&config.storage.path))
}

fn parse_metal(args: &[String]) -> Result<Metal> {
    let raw = args.first().ok_or_else(|| anyhow!("metal is required\n{}", USAGE))?;
    Metal::from_str(raw)
}

fn run_quote(config: &AppConfig, args: &[String]) -> Result<()> {
    let metal = parse_metal(args)?;

    let mut positional: Vec<&str> = Vec::new();
    let mut save = false;
    let mut select = None;
    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--save" => save = true,
            "--select" => {
                let raw = iter.next().ok_or_else(|| anyhow!("--select needs a percent"))?;
                select = Some(raw.parse::<u32>().map_err(|e| anyhow!("Invalid --select '{}': {}", raw, e))?);
            }
            other => positional.push(other),
        }
    }

    let mut session = QuoteSession::with_form(metal, config.default_form(metal));
    let mut form = session.form().clone();
    let mut values = positional.into_iter();
    form.price = values.next().ok_or_else(|| anyhow!("price is required\n{}", USAGE))?.to_string();
    form.weight = values.next().ok_or_else(|| anyhow!("weight is required\n{}", USAGE))?.to_string();
    if let Some(purity) = values.next() {
        form.purity = Purity::from_hallmark(purity)?;
    }
    if let Some(min) = values.next() {
        form.wastage_min = min.to_string();
    }
    if let Some(max) = values.next() {
        form.wastage_max = max.to_string();
    }

    if let Err(errors) = session.calculate_with_target(form, select) {
        for (field, message) in errors.messages() {
            eprintln!("  {}: {}", field, message);
        }
        return Err(errors.into());
    }

    let selected = session.selected_percent();
    println!("{:>5}  {:>16}  {:>14}  {:>12}  {:>16}", "%", "metal value", "wastage", "wastage g", "total");
    for r in session.results() {
        let marker = if Some(r.percent) == selected { "*" } else { " " };
        println!(
            "{}{:>4}  {:>16}  {:>14}  {:>12}  {:>16}",
            marker,
            r.percent,
            format_currency(r.purity_value),
            format_currency(r.wastage_value),
            format_grams(r.wastage_grams),
            format_currency(r.total)
        );
    }
    if let Some(margin) = session.profit_margin() {
        println!("margin over minimum: {}", format_currency(margin));
    }

    if save {
        let mut store = open_store(config, metal);
        let quote = session.save_to(&mut store)?;
        println!("saved {}", quote.id);
    }

    Ok(())
}

fn run_list(config: &AppConfig, args: &[String]) -> Result<()> {
    let metal = parse_metal(args)?;
    let store = open_store(config, metal);

    if store.is_empty() {
        println!("no saved {} quotes", metal);
        return Ok(());
    }

    for quote in store.list() {
        let total = match total_for(metal, &quote) {
            Ok(total) => format_currency(total),
            Err(e) => {
                warn!("Saved quote {} no longer validates: {}", quote.id, e);
                "invalid".to_string()
            }
        };
        let percent = quote
            .selected_percent
            .map(|p| p.to_string())
            .unwrap_or_else(|| quote.wastage_min_percent.clone());
        println!(
            "{}  {}  {}/g x {}g  {}  {}%  {}",
            quote.id,
            quote.format_saved_at(),
            quote.price_per_gram,
            quote.weight_grams,
            quote.purity,
            percent,
            total
        );
    }

    Ok(())
}

fn run_delete(config: &AppConfig, args: &[String]) -> Result<()> {
    let metal = parse_metal(args)?;
    let id = args.get(1).ok_or_else(|| anyhow!("id is required\n{}", USAGE))?;

    let mut store = open_store(config, metal);
    if store.delete(id)? {
        println!("deleted {}", id);
    } else {
        println!("no saved {} quote {}", metal, id);
    }
    Ok(())
}
