//! View-scoped tasks
//!
//! Async work started by a page is aborted when that page unmounts, so late
//! responses never land in a view the user already left.

use futures::future::abortable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Spawn `fut` on the current owner; disposal of the owner aborts it.
pub fn spawn_for_view<F>(label: &'static str, fut: F)
where
    F: Future<Output = ()> + 'static,
{
    let (task, handle) = abortable(fut);
    on_cleanup(move || handle.abort());
    spawn_local(async move {
        if task.await.is_err() {
            log::debug!("[TASK] {} aborted with its view", label);
        }
    });
}
