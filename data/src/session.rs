use log::debug;

use crate::error::{SubmitRejected, ValidationError};
use crate::presenter::{CategoryErrorView, Presentation, RefinementPrompt, ResultsView};
use crate::query::SearchQuery;
use crate::upload::{ImageFileInfo, UploadPolicy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchTab {
    #[default]
    Image,
    Text,
}

/// Where one widget instance stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected,
    Searching,
    Results(ResultsView),
    NoResultsError(String),
    CategoryError(CategoryErrorView),
    RefinementPrompt(RefinementPrompt),
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Idle | Phase::FileSelected | Phase::Searching)
    }
}

impl From<Presentation> for Phase {
    fn from(presentation: Presentation) -> Self {
        match presentation {
            Presentation::Refinement(prompt) => Phase::RefinementPrompt(prompt),
            Presentation::Results(view) => Phase::Results(view),
            Presentation::CategoryError(view) => Phase::CategoryError(view),
            Presentation::NotFound(message) => Phase::NoResultsError(message),
        }
    }
}

/// Identifies one accepted file choice, so work started for an earlier
/// choice can be told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage<F> {
    pub pick: Pick,
    pub file: F,
    pub info: ImageFileInfo,
    /// `data:` URL, filled in once the browser has read the file.
    pub preview: Option<String>,
}

/// Proof that a search was admitted. Only the latest ticket can complete.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
}

/// Search state of one widget instance.
///
/// A single in-flight slot is shared by both tabs, so at most one request is
/// outstanding per instance whichever tab started it.
#[derive(Debug)]
pub struct SearchSession<F> {
    tab: SearchTab,
    phase: Phase,
    selected: Option<SelectedImage<F>>,
    in_flight: Option<u64>,
    next_seq: u64,
    next_pick: u64,
    last_text: Option<String>,
}

impl<F> Default for SearchSession<F> {
    fn default() -> Self {
        Self {
            tab: SearchTab::default(),
            phase: Phase::Idle,
            selected: None,
            in_flight: None,
            next_seq: 0,
            next_pick: 0,
            last_text: None,
        }
    }
}

impl<F: Clone> SearchSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn tab(&self) -> SearchTab {
        self.tab
    }

    pub fn selected(&self) -> Option<&SelectedImage<F>> {
        self.selected.as_ref()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Phase to fall back to when a result display is dismissed.
    fn resting_phase(&self) -> Phase {
        if self.selected.is_some() {
            Phase::FileSelected
        } else {
            Phase::Idle
        }
    }

    fn settle(&mut self) {
        if !self.is_searching() {
            self.phase = self.resting_phase();
        }
    }

    /// A rejected file leaves the session untouched.
    pub fn select_image(
        &mut self,
        file: F,
        info: ImageFileInfo,
        policy: &UploadPolicy,
    ) -> Result<Pick, ValidationError> {
        policy.validate(&info)?;
        debug!("image selected: {} ({}, {} bytes)", info.name, info.mime, info.size);
        let pick = Pick(self.next_pick);
        self.next_pick += 1;
        self.selected = Some(SelectedImage { pick, file, info, preview: None });
        self.settle();
        Ok(pick)
    }

    /// Stores the preview read for `pick`. Returns `false`, leaving the session
    /// alone, when another file has been chosen or removed since.
    pub fn set_preview(&mut self, pick: Pick, data_url: String) -> bool {
        match self.selected.as_mut() {
            Some(selected) if selected.pick == pick => {
                selected.preview = Some(data_url);
                true
            }
            _ => {
                debug!("discarding preview of replaced image");
                false
            }
        }
    }

    pub fn remove_image(&mut self) {
        self.selected = None;
        self.settle();
    }

    /// Switching tabs dismisses a displayed outcome but never a running search.
    pub fn switch_tab(&mut self, tab: SearchTab) {
        self.tab = tab;
        if self.phase.is_terminal() {
            self.phase = self.resting_phase();
        }
    }

    fn admit(&mut self) -> Result<Ticket, SubmitRejected> {
        if self.is_searching() {
            debug!("submit dropped, search already in flight");
            return Err(SubmitRejected::Busy);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.phase = Phase::Searching;
        Ok(Ticket { seq })
    }

    pub fn begin_image(&mut self) -> Result<(Ticket, SearchQuery<F>), SubmitRejected> {
        if self.is_searching() {
            return Err(SubmitRejected::Busy);
        }
        let file = self
            .selected
            .as_ref()
            .map(|selected| selected.file.clone())
            .ok_or(SubmitRejected::NoImageSelected)?;
        Ok((self.admit()?, SearchQuery::Image(file)))
    }

    pub fn begin_text(&mut self, text: &str) -> Result<(Ticket, SearchQuery<F>), SubmitRejected> {
        if self.is_searching() {
            return Err(SubmitRejected::Busy);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitRejected::EmptyQuery);
        }
        let ticket = self.admit()?;
        self.last_text = Some(text.to_string());
        Ok((ticket, SearchQuery::Text(text.to_string())))
    }

    /// Applies the outcome of the search identified by `ticket`.
    pub fn complete(&mut self, ticket: Ticket, presentation: Presentation) -> Result<&Phase, SubmitRejected> {
        if self.in_flight != Some(ticket.seq) {
            debug!("discarding response of superseded search #{}", ticket.seq);
            return Err(SubmitRejected::Stale);
        }
        self.in_flight = None;
        self.phase = presentation.into();
        Ok(&self.phase)
    }
}
