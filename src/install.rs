//! Install State
//!
//! The page is wired at most once. The selectors it was wired with are
//! kept for the exported drawer actions.

use std::cell::RefCell;

use crate::config::Selectors;
use crate::error::WidgetResult;

thread_local! {
    static INSTALLED: RefCell<Option<Selectors>> = const { RefCell::new(None) };
}

/// Run `install` unless the page was already wired. Returns whether it ran.
///
/// The guard is taken before `install` runs, so a failed install is not
/// retried over half-bound listeners.
pub fn install_once(
    selectors: &Selectors,
    install: impl FnOnce() -> WidgetResult<()>,
) -> WidgetResult<bool> {
    let first = INSTALLED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            false
        } else {
            *slot = Some(selectors.clone());
            true
        }
    });
    if !first {
        log::warn!("page widgets already installed, ignoring");
        return Ok(false);
    }
    install()?;
    Ok(true)
}

/// Selectors captured at install, if the page was wired
pub fn installed_selectors() -> Option<Selectors> {
    INSTALLED.with(|slot| slot.borrow().clone())
}
