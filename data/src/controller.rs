use std::cell::RefCell;

use log::error;

use crate::config::WidgetConfig;
use crate::error::{SubmitRejected, ValidationError};
use crate::presenter::{present, present_failure, PresenterOptions};
use crate::query::{refine_query, SearchQuery};
use crate::search_client::{SearchClient, SearchTransport};
use crate::session::{Phase, Pick, SearchSession, SearchTab, Ticket};
use crate::upload::{ImageFileInfo, UploadPolicy};

/// An admitted search that has not been sent yet.
#[derive(Debug)]
pub struct PendingSearch<F> {
    ticket: Ticket,
    query: SearchQuery<F>,
}

impl<F> PendingSearch<F> {
    pub fn query(&self) -> &SearchQuery<F> {
        &self.query
    }
}

/// Drives one widget instance: owns its session and its search client.
///
/// Submitting is split in two so the view can show the loading state
/// synchronously: `start_*` admits the search, `finish` performs it.
pub struct SearchController<T: SearchTransport> {
    client: SearchClient<T>,
    options: PresenterOptions,
    policy: UploadPolicy,
    session: RefCell<SearchSession<T::Image>>,
}

impl<T: SearchTransport> SearchController<T> {
    pub fn new(config: &WidgetConfig, transport: T) -> Self {
        Self {
            client: SearchClient::new(config, transport),
            options: PresenterOptions::from(config),
            policy: config.upload_policy(),
            session: RefCell::new(SearchSession::new()),
        }
    }

    pub fn transport(&self) -> &T {
        self.client.transport()
    }

    pub fn phase(&self) -> Phase {
        self.session.borrow().phase().clone()
    }

    pub fn tab(&self) -> SearchTab {
        self.session.borrow().tab()
    }

    pub fn is_searching(&self) -> bool {
        self.session.borrow().is_searching()
    }

    pub fn last_text(&self) -> Option<String> {
        self.session.borrow().last_text().map(str::to_string)
    }

    pub fn preview(&self) -> Option<String> {
        self.session
            .borrow()
            .selected()
            .and_then(|selected| selected.preview.clone())
    }

    pub fn has_image(&self) -> bool {
        self.session.borrow().selected().is_some()
    }

    pub fn switch_tab(&self, tab: SearchTab) -> Phase {
        let mut session = self.session.borrow_mut();
        session.switch_tab(tab);
        session.phase().clone()
    }

    pub fn select_image(
        &self,
        file: T::Image,
        info: ImageFileInfo,
    ) -> Result<(Pick, Phase), ValidationError> {
        let mut session = self.session.borrow_mut();
        let pick = session.select_image(file, info, &self.policy)?;
        Ok((pick, session.phase().clone()))
    }

    /// `false` when the preview belongs to a file that is no longer selected.
    pub fn set_preview(&self, pick: Pick, data_url: String) -> bool {
        self.session.borrow_mut().set_preview(pick, data_url)
    }

    pub fn remove_image(&self) -> Phase {
        let mut session = self.session.borrow_mut();
        session.remove_image();
        session.phase().clone()
    }

    pub fn start_image(&self) -> Result<PendingSearch<T::Image>, SubmitRejected> {
        let (ticket, query) = self.session.borrow_mut().begin_image()?;
        Ok(PendingSearch { ticket, query })
    }

    pub fn start_text(&self, text: &str) -> Result<PendingSearch<T::Image>, SubmitRejected> {
        let (ticket, query) = self.session.borrow_mut().begin_text(text)?;
        Ok(PendingSearch { ticket, query })
    }

    /// Re-runs the last text query narrowed by a suggestion chip.
    pub fn start_refinement(&self, suggestion: &str) -> Result<PendingSearch<T::Image>, SubmitRejected> {
        let base = self.last_text().unwrap_or_default();
        self.start_text(&refine_query(&base, suggestion))
    }

    /// Sends the request and applies the outcome. Failures of any kind end up
    /// as a displayable phase; only a superseded response is rejected.
    pub async fn finish(&self, pending: PendingSearch<T::Image>) -> Result<Phase, SubmitRejected> {
        let PendingSearch { ticket, query } = pending;
        let presentation = match self.client.search(query).await {
            Ok(response) => present(&response, &self.options),
            Err(err) => {
                error!("search failed: {err}");
                present_failure(&err)
            }
        };
        self.session
            .borrow_mut()
            .complete(ticket, presentation)
            .cloned()
    }

    pub async fn search_image(&self) -> Result<Phase, SubmitRejected> {
        let pending = self.start_image()?;
        self.finish(pending).await
    }

    pub async fn search_text(&self, text: &str) -> Result<Phase, SubmitRejected> {
        let pending = self.start_text(text)?;
        self.finish(pending).await
    }

    pub async fn refine(&self, suggestion: &str) -> Result<Phase, SubmitRejected> {
        let pending = self.start_refinement(suggestion)?;
        self.finish(pending).await
    }
}
