use futures::channel::oneshot;
use gloo::events::EventListener;
use web_sys::Document;

use crate::domain::errors::{AppError, AppResult};

/// The document is parsed once it left the `loading` state.
pub fn is_document_ready(document: &Document) -> bool {
    document.ready_state() != "loading"
}

/// Resolves once the document content is parsed. Returns immediately when
/// `DOMContentLoaded` already fired.
pub async fn document_ready(document: &Document) -> AppResult<()> {
    if is_document_ready(document) {
        return Ok(());
    }

    let (tx, rx) = oneshot::channel::<()>();
    let listener = EventListener::once(document, "DOMContentLoaded", move |_event| {
        let _ = tx.send(());
    });

    let fired = rx.await;
    drop(listener);
    fired.map_err(|_| AppError::Browser("DOMContentLoaded listener dropped before firing".to_string()))
}
