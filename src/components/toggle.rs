//! Completion Toggle Helpers
//!
//! Checkbox state for a record's completion flag. The browser flips the box
//! before the request finishes, so a failed request has to flip it back.

use leptos::prelude::*;

/// Settle a checkbox after its toggle request finished.
/// Returns true when the request succeeded.
pub fn settle_toggle(
    set_checked: WriteSignal<bool>,
    previous: bool,
    outcome: &Result<(), String>,
) -> bool {
    match outcome {
        Ok(()) => true,
        Err(_) => {
            set_checked.set(previous);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_toggle_restores_checkbox() {
        let owner = Owner::new();
        owner.with(|| {
            let (checked, set_checked) = signal(false);
            // what the on:change handler records from the DOM
            set_checked.set(true);

            let ok = settle_toggle(set_checked, false, &Err("status 500".to_string()));
            assert!(!ok);
            assert!(!checked.get_untracked());
        });
    }

    #[test]
    fn test_successful_toggle_keeps_checkbox() {
        let owner = Owner::new();
        owner.with(|| {
            let (checked, set_checked) = signal(true);
            set_checked.set(false);

            assert!(settle_toggle(set_checked, true, &Ok(())));
            assert!(!checked.get_untracked());
        });
    }
}
