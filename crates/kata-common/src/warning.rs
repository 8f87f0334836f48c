//! Deduplicated warnings.
//!
//! Lossy conversions (such as JSON keys a prototype has no field for) are
//! reported here rather than failing the call. Each distinct message is
//! emitted once until [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a lossy or unusual condition (emitted once per unique message).
///
/// Returns `true` if this call emitted the warning, `false` if the same
/// component/message pair was already reported.
///
/// # Example
/// ```
/// use kata_common::warning::{clear_warnings, warn_once};
///
/// clear_warnings();
/// assert!(warn_once("json", "ignoring unknown key `depth`"));
/// assert!(!warn_once("json", "ignoring unknown key `depth`"));
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        tracing::warn!(component, "{message}");
    }
    first_time
}

/// Forget every recorded warning so they can be emitted again.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
