use crate::domain::errors::SelectionError;
use crate::domain::model::priced_result::PricedResult;

/// Which row of the latest sweep is current, keyed by percent rather than
/// position since the list start moves whenever the range changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    percent: Option<u32>,
}

impl Selection {
    pub fn none() -> Self {
        Self { percent: None }
    }

    pub fn percent(&self) -> Option<u32> {
        self.percent
    }

    /// Re-point after a fresh sweep: the target percent if present, otherwise
    /// the first (minimum-percent) row, otherwise nothing.
    pub fn after_sweep(results: &[PricedResult], target: Option<u32>) -> Self {
        let percent = target
            .and_then(|t| results.iter().find(|r| r.percent == t))
            .or_else(|| results.first())
            .map(|r| r.percent);
        Self { percent }
    }

    /// Explicitly pick a row that exists in `results`
    pub fn select(&mut self, results: &[PricedResult], percent: u32) -> Result<(), SelectionError> {
        if results.iter().any(|r| r.percent == percent) {
            self.percent = Some(percent);
            Ok(())
        } else {
            Err(SelectionError::NotInResults(percent))
        }
    }

    pub fn resolve<'a>(&self, results: &'a [PricedResult]) -> Option<&'a PricedResult> {
        let percent = self.percent?;
        results.iter().find(|r| r.percent == percent)
    }
}

/// Extra cost of the selected row over the range minimum.
/// `None` unless the sweep has more than one row and something is selected.
pub fn profit_margin(results: &[PricedResult], selection: &Selection) -> Option<f64> {
    if results.len() < 2 {
        return None;
    }
    let first = results.first()?;
    let selected = selection.resolve(results)?;
    Some(selected.total - first.total)
}
