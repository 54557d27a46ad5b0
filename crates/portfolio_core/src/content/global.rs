//! Process-wide content store slot.

use super::{ContentError, ContentResult, ContentStore};
use log::info;
use once_cell::sync::OnceCell;

static CONTENT: OnceCell<ContentStore> = OnceCell::new();

/// Installs `store` as the process-wide content.
///
/// Must run before the first query; afterwards the bundled content is already
/// in place and installation is rejected.
///
/// # Errors
/// - `ContentError::AlreadyInstalled` when a store is already set.
pub fn install(store: ContentStore) -> ContentResult<&'static ContentStore> {
    let mut candidate = Some(store);
    let installed =
        CONTENT.get_or_try_init(|| candidate.take().ok_or(ContentError::AlreadyInstalled))?;
    if candidate.is_some() {
        return Err(ContentError::AlreadyInstalled);
    }
    info!(
        "event=content_install module=content status=ok projects={} skills={}",
        installed.all_projects().len(),
        installed.all_skills().len()
    );
    Ok(installed)
}

/// Whether a store (installed or bundled) is already active.
pub fn is_installed() -> bool {
    CONTENT.get().is_some()
}

/// Returns the process-wide store, loading bundled content on first use.
///
/// # Panics
/// Panics when the bundled content is malformed; a broken bundle is a
/// startup defect with no degraded mode.
pub fn store() -> &'static ContentStore {
    CONTENT.get_or_init(|| match ContentStore::bundled() {
        Ok(store) => store,
        Err(err) => panic!("bundled content is invalid: {err}"),
    })
}
