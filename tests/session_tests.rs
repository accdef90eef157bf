use anyhow::Result;

use jewel_quote::config_loader::AppConfig;
use jewel_quote::domain::enums::{Metal, Purity};
use jewel_quote::domain::errors::{SelectionError, StoreError};
use jewel_quote::domain::model::input::QuoteForm;
use jewel_quote::engine::QuoteSession;
use jewel_quote::infrastructure::storage::{MemoryStore, QuoteStore};

fn gold_form(min: &str, max: &str) -> QuoteForm {
    QuoteForm::new("7200", "10", Purity::Fine916, min, max)
}

#[test]
fn test_calculate_selects_minimum() -> Result<()> {
    let mut session = QuoteSession::new(Metal::Gold);
    session.calculate(gold_form("8", "14"))?;

    assert_eq!(session.selected_percent(), Some(8));
    assert_eq!(session.profit_margin(), Some(0.0));
    Ok(())
}

#[test]
fn test_select_and_margin() -> Result<()> {
    let mut session = QuoteSession::new(Metal::Gold);
    session.calculate(gold_form("8", "14"))?;

    let selected = session.select(12)?.clone();
    assert_eq!(selected.percent, 12);

    let margin = session.profit_margin().unwrap();
    // 4 extra points of 10g at 7200/g
    assert!((margin - 2880.0).abs() < 1e-6, "margin {}", margin);

    assert_eq!(session.select(20).unwrap_err(), SelectionError::NotInResults(20));
    assert_eq!(session.selected_percent(), Some(12));
    Ok(())
}

#[test]
fn test_margin_needs_more_than_one_row() -> Result<()> {
    let mut session = QuoteSession::new(Metal::Gold);
    session.calculate(gold_form("10", "10"))?;
    assert_eq!(session.profit_margin(), None);
    Ok(())
}

#[test]
fn test_save_then_load_restores_range_and_selection() -> Result<()> {
    let mut store = QuoteStore::new(Metal::Gold, MemoryStore::new());

    let mut session = QuoteSession::new(Metal::Gold);
    session.calculate(gold_form("8", "14"))?;
    session.select(11)?;
    let quote = session.save_to(&mut store)?;
    assert_eq!(quote.selected_percent, Some(11));

    let mut restored = QuoteSession::new(Metal::Gold);
    restored.load(&store.list()[0])?;

    assert_eq!(restored.results().len(), 7);
    assert_eq!(restored.results()[0].percent, 8);
    assert_eq!(restored.selected_percent(), Some(11));
    assert_eq!(restored.selected(), session.selected());
    assert_eq!(restored.form(), session.form());
    Ok(())
}

#[test]
fn test_load_falls_back_when_saved_percent_out_of_range() -> Result<()> {
    let mut store = QuoteStore::new(Metal::Gold, MemoryStore::new());
    let quote = store.save(&gold_form("8", "14"), Some(30))?;

    let mut session = QuoteSession::new(Metal::Gold);
    session.load(&quote)?;
    assert_eq!(session.selected_percent(), Some(8));
    Ok(())
}

#[test]
fn test_save_before_calculating_is_rejected() -> Result<()> {
    let mut store = QuoteStore::new(Metal::Silver, MemoryStore::new());

    let session = QuoteSession::new(Metal::Silver);
    assert!(session.save_to(&mut store).is_err(), "blank defaults must not validate");
    assert!(store.is_empty());
    Ok(())
}

#[test]
fn test_unselected_save_has_no_selected_percent() -> Result<()> {
    let mut store = QuoteStore::new(Metal::Silver, MemoryStore::new());

    let unselected = store.save(&QuoteForm::new("85", "50", Purity::Fine999, "8", "15"), None)?;
    assert_eq!(unselected.selected_percent, None);

    let mut session = QuoteSession::new(Metal::Silver);
    session.load(&unselected)?;
    assert_eq!(session.selected_percent(), Some(8));
    Ok(())
}

#[test]
fn test_save_into_other_metal_store_is_rejected() -> Result<()> {
    let mut silver_store = QuoteStore::new(Metal::Silver, MemoryStore::new());

    let mut session = QuoteSession::new(Metal::Gold);
    session.calculate(QuoteForm::new("7200", "10", Purity::Fine999, "8", "14"))?;

    let err = session.save_to(&mut silver_store).unwrap_err();
    assert!(
        matches!(err, StoreError::MetalMismatch { quote: Metal::Gold, store: Metal::Silver }),
        "unexpected error {}",
        err
    );
    assert!(silver_store.is_empty());
    Ok(())
}

#[test]
fn test_session_seeded_from_config_defaults() -> Result<()> {
    let config = AppConfig::from_toml_str(
        r#"
        [gold]
        wastage_min_percent = 10
        wastage_max_percent = 18
        default_purity = "750"
        "#,
    )?;

    let mut session = QuoteSession::with_form(Metal::Gold, config.default_form(Metal::Gold));
    assert_eq!(session.form().purity, Purity::Fine750);
    assert_eq!(session.form().wastage_min, "10");
    assert_eq!(session.form().wastage_max, "18");

    let mut form = session.form().clone();
    form.price = "6000".to_string();
    form.weight = "5".to_string();
    let results = session.calculate(form)?;
    assert_eq!(results.len(), 9);
    assert_eq!(session.selected_percent(), Some(10));
    Ok(())
}
