use crate::marketdata::CountrySelection;
use log::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    FromOnly,
    Both,
}

/// FROM / TO pair driven by pin clicks.
///
/// `to` is only ever set while `from` is set, and both never share a country.
#[derive(Debug, Default, Clone)]
pub struct SelectionPair {
    from: Option<CountrySelection>,
    to: Option<CountrySelection>,
}

impl SelectionPair {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from(&self) -> Option<&CountrySelection> {
        self.from.as_ref()
    }

    pub fn to(&self) -> Option<&CountrySelection> {
        self.to.as_ref()
    }

    pub fn both(&self) -> Option<(&CountrySelection, &CountrySelection)> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    pub fn state(&self) -> SelectionState {
        match (&self.from, &self.to) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::FromOnly,
            (Some(_), Some(_)) => SelectionState::Both,
        }
    }

    /// Applies one pin click and returns the state reached.
    pub fn click(&mut self, clicked: CountrySelection) -> SelectionState {
        match self.state() {
            SelectionState::Empty | SelectionState::Both => {
                self.from = Some(clicked);
                self.to = None;
            }
            SelectionState::FromOnly => {
                let same_country = self
                    .from
                    .as_ref()
                    .is_some_and(|from| from.country == clicked.country);
                if same_country {
                    self.from = Some(clicked);
                    self.to = None;
                } else {
                    self.to = Some(clicked);
                }
            }
        }
        let state = self.state();
        debug!("selection is now {:?}", state);
        state
    }

    /// Exchanges FROM and TO. Returns false, leaving the pair untouched, unless both are set.
    pub fn swap(&mut self) -> bool {
        if self.state() != SelectionState::Both {
            return false;
        }
        std::mem::swap(&mut self.from, &mut self.to);
        true
    }
}
