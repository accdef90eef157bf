use log::{debug, info};

use crate::domain::enums::Metal;
use crate::domain::errors::{SelectionError, StoreError, ValidationErrors};
use crate::domain::model::input::{PricingInput, QuoteForm};
use crate::domain::model::priced_result::PricedResult;
use crate::domain::model::saved_quote::SavedQuote;
use crate::domain::traits::KeyValueStore;
use crate::engine::selection::{profit_margin, Selection};
use crate::engine::sweep::compute;
use crate::engine::validator::validate;
use crate::infrastructure::storage::QuoteStore;

/// One interactive calculation session for a metal: the current form, the
/// latest sweep and which row of it is selected.
#[derive(Debug, Clone)]
pub struct QuoteSession {
    metal: Metal,
    form: QuoteForm,
    input: Option<PricingInput>,
    results: Vec<PricedResult>,
    selection: Selection,
}

impl QuoteSession {
    pub fn new(metal: Metal) -> Self {
        Self::with_form(metal, QuoteForm::with_defaults(metal))
    }

    /// Start from a pre-filled form, e.g. `AppConfig::default_form`. Nothing is
    /// computed until `calculate`.
    pub fn with_form(metal: Metal, form: QuoteForm) -> Self {
        Self {
            metal,
            form,
            input: None,
            results: Vec::new(),
            selection: Selection::none(),
        }
    }

    pub fn metal(&self) -> Metal {
        self.metal
    }

    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    pub fn input(&self) -> Option<&PricingInput> {
        self.input.as_ref()
    }

    pub fn results(&self) -> &[PricedResult] {
        &self.results
    }

    /// Validate and sweep `form`, selecting the minimum-percent row
    pub fn calculate(&mut self, form: QuoteForm) -> Result<&[PricedResult], ValidationErrors> {
        self.calculate_with_target(form, None)
    }

    /// Validate and sweep `form`, selecting `target` when it is in range.
    /// On validation failure the previous results and selection are kept.
    pub fn calculate_with_target(
        &mut self,
        form: QuoteForm,
        target: Option<u32>,
    ) -> Result<&[PricedResult], ValidationErrors> {
        let input = validate(self.metal, &form)?;
        let results = compute(&input);

        self.selection = Selection::after_sweep(&results, target);
        self.form = form;
        self.input = Some(input);
        self.results = results;

        debug!("Session selection now {:?}", self.selection.percent());
        Ok(&self.results)
    }

    pub fn select(&mut self, percent: u32) -> Result<&PricedResult, SelectionError> {
        self.selection.select(&self.results, percent)?;
        self.selection
            .resolve(&self.results)
            .ok_or(SelectionError::NotInResults(percent))
    }

    pub fn selected(&self) -> Option<&PricedResult> {
        self.selection.resolve(&self.results)
    }

    pub fn selected_percent(&self) -> Option<u32> {
        self.selection.percent()
    }

    /// Selected total minus the range-minimum total
    pub fn profit_margin(&self) -> Option<f64> {
        profit_margin(&self.results, &self.selection)
    }

    /// Restore a saved quote: full range re-swept, saved percent re-selected
    /// (falling back to the minimum).
    pub fn load(&mut self, quote: &SavedQuote) -> Result<&[PricedResult], ValidationErrors> {
        info!("Loading saved {} quote {}", self.metal, quote.id);
        self.calculate_with_target(quote.to_form(), quote.selected_percent)
    }

    /// Snapshot the current form and selection into `store`, which must hold
    /// the same metal as this session
    pub fn save_to<S: KeyValueStore>(&self, store: &mut QuoteStore<S>) -> Result<SavedQuote, StoreError> {
        if store.metal() != self.metal {
            return Err(StoreError::MetalMismatch { quote: self.metal, store: store.metal() });
        }
        store.save(&self.form, self.selection.percent())
    }
}
