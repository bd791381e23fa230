//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload both collections from the service - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload both collections from the service - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Trigger a full reload of targets and todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_bumps_trigger() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new();
            assert_eq!(ctx.reload_trigger.get_untracked(), 0);
            ctx.reload();
            ctx.reload();
            assert_eq!(ctx.reload_trigger.get_untracked(), 2);
        });
    }
}
