//! Focus-control binding registry
//!
//! Form-binding layers (validation libraries, submission managers) own the
//! managed state of certain fields. Components obtain a [`FieldBinding`]
//! scoped to a (form id, field name) pair and notify it on focus/blur; the
//! binding layer observes that traffic through [`FormBindings::observe`].
//!
//! The registry is a [`Global`] so any component can reach it through the
//! `App` context, mirroring how the rest of the application shares state.

use ahash::AHashMap;
use gpui::{App, Global, SharedString};
use tracing::trace;

use crate::error::{Error, Result};

/// Scoping key for a managed field: one form, one field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey {
    form: SharedString,
    name: SharedString,
}

impl FieldKey {
    pub fn new(form: impl Into<SharedString>, name: impl Into<SharedString>) -> Self {
        Self {
            form: form.into(),
            name: name.into(),
        }
    }

    /// Form identifier this key is scoped to
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Field name within the form
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Notification emitted to registry observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Focus,
    Blur,
    Change(bool),
}

/// Managed state of a single bound field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub focused: bool,
    pub checked: bool,
}

type Observer = Box<dyn Fn(&FieldKey, ControlEvent)>;

/// Global registry of focus-control bindings.
///
/// Accessible via `cx.default_global::<FormBindings>()`.
#[derive(Default)]
pub struct FormBindings {
    controls: AHashMap<FieldKey, ControlState>,
    observers: Vec<Observer>,
}

impl Global for FormBindings {}

impl FormBindings {
    /// Get or create the binding for (form, name)
    pub fn bind(
        &mut self,
        form: impl Into<SharedString>,
        name: impl Into<SharedString>,
    ) -> FieldKey {
        let key = FieldKey::new(form, name);
        if !self.controls.contains_key(&key) {
            trace!(form = key.form(), name = key.name(), "Registering binding");
            self.controls.insert(key.clone(), ControlState::default());
        }
        key
    }

    /// Managed state for a bound field
    ///
    /// Fails when the key was never bound; components use the infallible
    /// accessors instead.
    pub fn state(&self, key: &FieldKey) -> Result<ControlState> {
        self.controls
            .get(key)
            .copied()
            .ok_or_else(|| Error::MissingBinding {
                form: key.form().to_string(),
                name: key.name().to_string(),
            })
    }

    /// Notify the binding that its field gained focus
    pub fn focus(&mut self, key: &FieldKey) {
        let state = self.controls.entry(key.clone()).or_default();
        state.focused = true;
        trace!(form = key.form(), name = key.name(), "Field focused");
        self.emit(key, ControlEvent::Focus);
    }

    /// Notify the binding that its field lost focus
    pub fn blur(&mut self, key: &FieldKey) {
        let state = self.controls.entry(key.clone()).or_default();
        state.focused = false;
        trace!(form = key.form(), name = key.name(), "Field blurred");
        self.emit(key, ControlEvent::Blur);
    }

    /// Set the managed checked state
    pub fn set_checked(&mut self, key: &FieldKey, checked: bool) {
        let state = self.controls.entry(key.clone()).or_default();
        state.checked = checked;
        self.emit(key, ControlEvent::Change(checked));
    }

    /// Flip the managed checked state, returning the new value
    pub fn toggle(&mut self, key: &FieldKey) -> bool {
        let state = self.controls.entry(key.clone()).or_default();
        state.checked = !state.checked;
        let checked = state.checked;
        self.emit(key, ControlEvent::Change(checked));
        checked
    }

    /// Whether the bound field currently holds focus (false when unbound)
    pub fn is_focused(&self, key: &FieldKey) -> bool {
        self.controls.get(key).is_some_and(|s| s.focused)
    }

    /// The managed checked state (false when unbound)
    pub fn is_checked(&self, key: &FieldKey) -> bool {
        self.controls.get(key).is_some_and(|s| s.checked)
    }

    /// Register an observer for binding traffic
    ///
    /// Observers run in registration order, after the state mutation.
    pub fn observe(&mut self, observer: impl Fn(&FieldKey, ControlEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&self, key: &FieldKey, event: ControlEvent) {
        for observer in &self.observers {
            observer(key, event);
        }
    }
}

/// Per-field handle to the global registry.
///
/// Obtained by components at construction; all notification methods are
/// fire-and-forget and run synchronously inside the calling event handler.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    key: FieldKey,
}

impl FieldBinding {
    /// Obtain the binding scoped to (form, name), registering it on first use
    pub fn acquire(
        form: impl Into<SharedString>,
        name: impl Into<SharedString>,
        cx: &mut App,
    ) -> Self {
        let key = cx.default_global::<FormBindings>().bind(form, name);
        Self { key }
    }

    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    pub fn focus(&self, cx: &mut App) {
        cx.default_global::<FormBindings>().focus(&self.key);
    }

    pub fn blur(&self, cx: &mut App) {
        cx.default_global::<FormBindings>().blur(&self.key);
    }

    pub fn set_checked(&self, checked: bool, cx: &mut App) {
        cx.default_global::<FormBindings>()
            .set_checked(&self.key, checked);
    }

    pub fn toggle(&self, cx: &mut App) -> bool {
        cx.default_global::<FormBindings>().toggle(&self.key)
    }

    pub fn is_focused(&self, cx: &App) -> bool {
        cx.try_global::<FormBindings>()
            .is_some_and(|b| b.is_focused(&self.key))
    }

    pub fn is_checked(&self, cx: &App) -> bool {
        cx.try_global::<FormBindings>()
            .is_some_and(|b| b.is_checked(&self.key))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn bind_is_get_or_create() {
        let mut bindings = FormBindings::default();
        let first = bindings.bind("login", "remember");
        bindings.set_checked(&first, true);

        // Rebinding the same pair must not reset managed state
        let second = bindings.bind("login", "remember");
        assert_eq!(first, second);
        assert!(bindings.is_checked(&second));
    }

    #[test]
    fn keys_are_scoped_per_form() {
        let mut bindings = FormBindings::default();
        let login = bindings.bind("login", "remember");
        let signup = bindings.bind("signup", "remember");
        assert_ne!(login, signup);

        bindings.set_checked(&login, true);
        assert!(bindings.is_checked(&login));
        assert!(!bindings.is_checked(&signup));
    }

    #[test]
    fn focus_and_blur_update_state() {
        let mut bindings = FormBindings::default();
        let key = bindings.bind("login", "remember");
        assert!(!bindings.is_focused(&key));

        bindings.focus(&key);
        assert!(bindings.is_focused(&key));

        bindings.blur(&key);
        assert!(!bindings.is_focused(&key));
    }

    #[test]
    fn toggle_flips_and_reports_new_value() {
        let mut bindings = FormBindings::default();
        let key = bindings.bind("login", "remember");

        assert!(bindings.toggle(&key));
        assert!(bindings.is_checked(&key));
        assert!(!bindings.toggle(&key));
        assert!(!bindings.is_checked(&key));
    }

    #[test]
    fn unbound_key_lookup_fails() {
        let bindings = FormBindings::default();
        let key = FieldKey::new("login", "remember");

        let err = bindings.state(&key).expect_err("key was never bound");
        let message = err.to_string();
        assert!(message.contains("remember"));
        assert!(message.contains("login"));
    }

    #[test]
    fn observers_see_events_in_emission_order() {
        let mut bindings = FormBindings::default();
        let key = bindings.bind("login", "remember");

        let seen: Rc<RefCell<Vec<ControlEvent>>> = Rc::default();
        let sink = seen.clone();
        bindings.observe(move |_, event| sink.borrow_mut().push(event));

        bindings.focus(&key);
        bindings.toggle(&key);
        bindings.blur(&key);

        assert_eq!(
            *seen.borrow(),
            vec![
                ControlEvent::Focus,
                ControlEvent::Change(true),
                ControlEvent::Blur,
            ]
        );
    }

    #[test]
    fn observers_run_after_state_mutation() {
        let mut bindings = FormBindings::default();
        let key = bindings.bind("login", "remember");

        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = seen.clone();
        bindings.observe(move |_, event| {
            if let ControlEvent::Change(checked) = event {
                sink.borrow_mut().push(checked);
            }
        });

        bindings.set_checked(&key, true);
        assert_eq!(*seen.borrow(), vec![true]);
        assert!(bindings.is_checked(&key));
    }
}
