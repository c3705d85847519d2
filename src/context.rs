//! Application Context
//!
//! Shared navigation, modal and configuration state provided via the Leptos
//! Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Modal, ModalBody};
use crate::config::GuideConfig;
use crate::router::{Page, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active view - read
    pub route: ReadSignal<Route>,
    /// Active view - write
    set_route: WriteSignal<Route>,
    /// Message modal content (None = hidden) - read
    pub modal: ReadSignal<Option<Modal>>,
    /// Message modal content - write
    set_modal: WriteSignal<Option<Modal>>,
    config: StoredValue<GuideConfig>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        modal: (ReadSignal<Option<Modal>>, WriteSignal<Option<Modal>>),
        config: GuideConfig,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            modal: modal.0,
            set_modal: modal.1,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> GuideConfig {
        self.config.get_value()
    }

    /// Activate a view; re-activating the current one repopulates it
    pub fn navigate(&self, page: Page) {
        log::debug!("[ROUTER] -> {:?}", page);
        self.set_route.update(|r| r.go(page));
    }

    /// Navigate once `delay_ms` has elapsed
    pub fn navigate_after(&self, page: Page, delay_ms: u32) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            ctx.navigate(page);
        });
    }

    pub fn show(&self, modal: Modal) {
        self.set_modal.set(Some(modal));
    }

    /// Plain-text message modal
    pub fn message(&self, title: &str, text: impl Into<String>) {
        self.show(Modal::new(title, ModalBody::Text(text.into())));
    }

    /// Show a modal after the current one has had time to close
    pub fn show_after(&self, modal: Modal, delay_ms: u32) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            ctx.show(modal);
        });
    }

    pub fn close_modal(&self) {
        self.set_modal.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
