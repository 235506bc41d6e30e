use std::rc::Rc;

use data::controller::PendingSearch;
use data::{Phase, SearchController, SearchQuery, SearchTab, SubmitRejected, WidgetConfig};
use leptos::prelude::*;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::feedback::{CategoryErrorPanel, Loading, Notice, RefinementPanel};
use crate::preview::{file_info, read_data_url};
use crate::product_grid::ProductGrid;
use crate::tabs::TabBar;
use crate::text_panel::TextPanel;
use crate::transport::GlooTransport;
use crate::upload_panel::UploadPanel;

type Controller = Rc<SearchController<GlooTransport>>;

/// Reactive mirror of the controller plus the handful of UI-only signals.
#[derive(Clone, Copy)]
pub struct WidgetState {
    controller: StoredValue<Controller, LocalStorage>,
    pub phase: RwSignal<Phase>,
    pub tab: RwSignal<SearchTab>,
    pub preview: RwSignal<Option<String>>,
    pub has_image: RwSignal<bool>,
    pub notice: RwSignal<Option<String>>,
    pub text: RwSignal<String>,
}

impl WidgetState {
    fn new(config: &WidgetConfig) -> Self {
        let controller = Rc::new(SearchController::new(config, GlooTransport));
        Self {
            controller: StoredValue::new_local(controller),
            phase: RwSignal::new(Phase::Idle),
            tab: RwSignal::new(SearchTab::Image),
            preview: RwSignal::new(None),
            has_image: RwSignal::new(false),
            notice: RwSignal::new(None),
            text: RwSignal::new(String::new()),
        }
    }

    fn controller(&self) -> Controller {
        self.controller.get_value()
    }

    pub fn is_searching(&self) -> bool {
        self.phase.with(|phase| matches!(phase, Phase::Searching))
    }

    pub fn switch_tab(self, tab: SearchTab) {
        let phase = self.controller().switch_tab(tab);
        self.notice.set(None);
        self.tab.set(tab);
        self.phase.set(phase);
    }

    pub fn choose_file(self, file: File) {
        let controller = self.controller();
        match controller.select_image(file.clone(), file_info(&file)) {
            Ok((pick, phase)) => {
                self.notice.set(None);
                self.has_image.set(true);
                self.preview.set(None);
                self.phase.set(phase);
                read_data_url(&file, move |url| {
                    if controller.set_preview(pick, url.clone()) {
                        let _ = self.preview.try_set(Some(url));
                    }
                });
            }
            Err(err) => {
                debug!("upload rejected: {err:?}");
                self.notice.set(Some(err.to_string()));
            }
        }
    }

    pub fn remove_image(self) {
        let phase = self.controller().remove_image();
        self.has_image.set(false);
        self.preview.set(None);
        self.phase.set(phase);
    }

    pub fn search_image(self) {
        let started = self.controller().start_image();
        self.launch(started);
    }

    pub fn search_text(self) {
        let started = self.controller().start_text(&self.text.get_untracked());
        self.launch(started);
    }

    /// Leaves the input alone when the example's search is not admitted.
    pub fn search_example(self, query: String) {
        let started = self.controller().start_text(&query);
        if started.is_ok() {
            self.text.set(query);
        }
        self.launch(started);
    }

    pub fn refine(self, suggestion: String) {
        let started = self.controller().start_refinement(&suggestion);
        if let Ok(pending) = &started {
            if let SearchQuery::Text(query) = pending.query() {
                self.text.set(query.clone());
            }
        }
        self.launch(started);
    }

    fn launch(self, started: Result<PendingSearch<File>, SubmitRejected>) {
        match started {
            Ok(pending) => {
                self.notice.set(None);
                self.phase.set(Phase::Searching);
                let controller = self.controller();
                spawn_local(async move {
                    match controller.finish(pending).await {
                        Ok(phase) => {
                            let _ = self.phase.try_set(phase);
                        }
                        Err(rejected) => debug!("search result dropped: {rejected:?}"),
                    }
                });
            }
            Err(rejected @ (SubmitRejected::Busy | SubmitRejected::Stale)) => {
                debug!("submit ignored: {rejected:?}");
            }
            Err(rejected) => self.notice.set(Some(rejected.to_string())),
        }
    }
}

#[component]
pub fn Widget(config: WidgetConfig) -> impl IntoView {
    let state = WidgetState::new(&config);
    let policy = config.upload_policy();
    let WidgetConfig { button_text, examples, .. } = config;

    view! {
        <div class="clip-widget-wrap">
            <TabBar tab=state.tab on_switch=move |tab| state.switch_tab(tab) />
            <div class="clip-tab-content" class:active=move || state.tab.get() == SearchTab::Image>
                <UploadPanel state=state button_text=button_text policy=policy />
            </div>
            <div class="clip-tab-content" class:active=move || state.tab.get() == SearchTab::Text>
                <TextPanel state=state examples=examples />
            </div>
            <Notice notice=state.notice />
            <Loading active=Signal::derive(move || state.is_searching()) />
            {move || match state.phase.get() {
                Phase::Results(results) => {
                    view! { <ProductGrid results=results /> }.into_any()
                }
                Phase::NoResultsError(message) => {
                    view! { <div class="clip-error">{message}</div> }.into_any()
                }
                Phase::CategoryError(category) => {
                    view! { <CategoryErrorPanel error=category /> }.into_any()
                }
                Phase::RefinementPrompt(prompt) => {
                    view! { <RefinementPanel prompt=prompt on_pick=move |chip| state.refine(chip) /> }
                        .into_any()
                }
                Phase::Idle | Phase::FileSelected | Phase::Searching => ().into_any(),
            }}
        </div>
    }
}
