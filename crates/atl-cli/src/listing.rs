//! Filtering for the list commands.

use atl_model::{Competition, CompetitionStatus, Component, StockSummary};

/// Components matching a search, with stock counts over the whole inventory.
#[derive(Debug)]
pub struct ComponentListing<'a> {
    pub shown: Vec<&'a Component>,
    pub summary: StockSummary,
}

impl<'a> ComponentListing<'a> {
    pub fn new(components: &'a [Component], search: Option<&str>) -> Self {
        let shown = match search {
            Some(query) => components
                .iter()
                .filter(|component| component.matches(query))
                .collect(),
            None => components.iter().collect(),
        };
        Self {
            shown,
            summary: StockSummary::from_components(components),
        }
    }
}

/// Competitions whose status is `status`; all of them when `None`.
pub fn filter_competitions(
    competitions: &[Competition],
    status: Option<CompetitionStatus>,
) -> Vec<&Competition> {
    competitions
        .iter()
        .filter(|competition| status.is_none_or(|wanted| competition.status() == Some(wanted)))
        .collect()
}
