//! CheckboxField Component

use std::rc::Rc;

use gpui::{
    App, AppContext, Context, Div, ElementId, Entity, FocusHandle, Focusable, IntoElement,
    ParentElement,
    Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::v_flex;
use tracing::trace;

use super::{ErrorList, ListOfErrors};
use crate::components::primitives::checkbox::Checkbox;
use crate::state::FieldBinding;

/// A labeled checkbox whose focus/blur traffic and checked state are managed
/// by the focus-control binding for (form id, field name).
///
/// Caller-supplied handlers are composed after the binding notification,
/// never in place of it. The checkbox primitive itself carries no state: the
/// binding owns the checked flag, so toggling never goes through any native
/// submission path.
pub struct CheckboxField {
    label: SharedString,
    checkbox_id: ElementId,
    errors: Option<ListOfErrors>,
    error_id: Option<ElementId>,
    binding: FieldBinding,
    focus_handle: FocusHandle,
    on_focus: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
    on_blur: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
    on_change: Option<Rc<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
    container: Option<Rc<dyn Fn(Div) -> Div + 'static>>,
    _subscriptions: Vec<Subscription>,
}

impl CheckboxField {
    /// Create a checkbox field bound to (form, name)
    pub fn new(
        form: impl Into<SharedString>,
        name: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let form = form.into();
        let name = name.into();
        let checkbox_id = ElementId::from(SharedString::from(format!("{form}-{name}")));
        let binding = FieldBinding::acquire(form, name, cx);

        let focus_handle = cx.focus_handle();
        let subscriptions = vec![
            cx.on_focus(&focus_handle, window, |this, window, cx| {
                this.handle_focus(window, cx);
            }),
            cx.on_blur(&focus_handle, window, |this, window, cx| {
                this.handle_blur(window, cx);
            }),
        ];

        Self {
            label: SharedString::default(),
            checkbox_id,
            errors: None,
            error_id: None,
            binding,
            focus_handle,
            on_focus: None,
            on_blur: None,
            on_change: None,
            container: None,
            _subscriptions: subscriptions,
        }
    }

    /// Set the label
    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = label.into();
    }

    /// Set the validation errors for the field
    pub fn set_errors(&mut self, errors: Option<ListOfErrors>) {
        self.errors = errors;
    }

    /// Set the element id of the error region; without one no errors render
    pub fn set_error_id(&mut self, id: impl Into<ElementId>) {
        self.error_id = Some(id.into());
    }

    /// Set a focus handler, invoked after the binding notification
    pub fn on_focus(&mut self, handler: impl Fn(&mut Window, &mut App) + 'static) {
        self.on_focus = Some(Box::new(handler));
    }

    /// Set a blur handler, invoked after the binding notification
    pub fn on_blur(&mut self, handler: impl Fn(&mut Window, &mut App) + 'static) {
        self.on_blur = Some(Box::new(handler));
    }

    /// Set a change handler, invoked after the binding records the new value
    pub fn on_change(&mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) {
        self.on_change = Some(Rc::new(handler));
    }

    /// Style the field container
    pub fn set_container(&mut self, style: impl Fn(Div) -> Div + 'static) {
        self.container = Some(Rc::new(style));
    }

    /// The binding this field notifies
    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    fn handle_focus(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        trace!(key = ?self.binding.key(), "Checkbox field focused");
        let binding = self.binding.clone();
        in_order(
            move |_: &mut Window, cx: &mut App| binding.focus(cx),
            self.on_focus.as_deref(),
            window,
            cx,
        );
        cx.notify();
    }

    fn handle_blur(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        trace!(key = ?self.binding.key(), "Checkbox field blurred");
        let binding = self.binding.clone();
        in_order(
            move |_: &mut Window, cx: &mut App| binding.blur(cx),
            self.on_blur.as_deref(),
            window,
            cx,
        );
        cx.notify();
    }
}

/// Invoke the binding notification, then the caller-supplied handler, with
/// the same context. Composition, not replacement: the caller handler never
/// runs first and never preempts the notification.
fn in_order<W, A>(
    notify: impl FnOnce(&mut W, &mut A),
    handler: Option<&dyn Fn(&mut W, &mut A)>,
    window: &mut W,
    cx: &mut A,
) {
    notify(window, cx);
    if let Some(handler) = handler {
        handler(window, cx);
    }
}

impl Focusable for CheckboxField {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CheckboxField {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let checked = self.binding.is_checked(cx);

        let binding = self.binding.clone();
        let on_change = self.on_change.clone();
        let entity = cx.entity();
        let checkbox = Checkbox::new(self.checkbox_id.clone())
            .checked(checked)
            .label(self.label.clone())
            .track_focus(&self.focus_handle)
            .on_change(move |checked, window, cx| {
                binding.set_checked(checked, cx);
                if let Some(handler) = &on_change {
                    handler(checked, window, cx);
                }
                entity.update(cx, |_, cx| cx.notify());
            });

        let error_list = self
            .error_id
            .clone()
            .map(|id| ErrorList::new().id(id).errors(self.errors.clone()));

        let mut container = v_flex().gap_1();
        if let Some(style) = &self.container {
            container = style(container);
        }

        container.child(checkbox).children(error_list)
    }
}

/// Create a checkbox field entity
pub fn checkbox_field<V: 'static>(
    form: impl Into<SharedString>,
    name: impl Into<SharedString>,
    label: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<CheckboxField> {
    let form = form.into();
    let name = name.into();
    let label = label.into();

    cx.new(|cx| {
        let mut field = CheckboxField::new(form, name, window, cx);
        field.set_label(label);
        field
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::state::{ControlEvent, FieldKey, FormBindings};

    fn recorded(
        bindings: &mut FormBindings,
        event: ControlEvent,
        tag: &'static str,
    ) -> Rc<RefCell<Vec<&'static str>>> {
        let seen: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let sink = seen.clone();
        bindings.observe(move |_, e| {
            if e == event {
                sink.borrow_mut().push(tag);
            }
        });
        seen
    }

    #[test]
    fn focus_notifies_binding_before_caller_handler() {
        let mut bindings = FormBindings::default();
        let key = bindings.bind("login", "remember");
        let seen = recorded(&mut bindings, ControlEvent::Focus, "binding");

        let sink = seen.clone();
        let caller = move |_: &mut FormBindings, _: &mut FieldKey| {
            sink.borrow_mut().push("caller");
        };
        in_order(
            |bindings: &mut FormBindings, key: &mut FieldKey| bindings.focus(key),
            Some(&caller),
            &mut bindings,
            &mut key.clone(),
        );

        assert_eq!(*seen.borrow(), ["binding", "caller"]);
        assert!(bindings.is_focused(&key));
    }

    #[test]
    fn blur_notifies_binding_before_caller_handler() {
        let mut bindings = FormBindings::default();
        let key = bindings.bind("login", "remember");
        bindings.focus(&key);
        let seen = recorded(&mut bindings, ControlEvent::Blur, "binding");

        let sink = seen.clone();
        let caller = move |_: &mut FormBindings, _: &mut FieldKey| {
            sink.borrow_mut().push("caller");
        };
        in_order(
            |bindings: &mut FormBindings, key: &mut FieldKey| bindings.blur(key),
            Some(&caller),
            &mut bindings,
            &mut key.clone(),
        );

        assert_eq!(*seen.borrow(), ["binding", "caller"]);
        assert!(!bindings.is_focused(&key));
    }

    #[test]
    fn absent_caller_handler_still_notifies_binding() {
        let mut bindings = FormBindings::default();
        let key = bindings.bind("login", "remember");
        let seen = recorded(&mut bindings, ControlEvent::Focus, "binding");

        in_order(
            |bindings: &mut FormBindings, key: &mut FieldKey| bindings.focus(key),
            None,
            &mut bindings,
            &mut key.clone(),
        );

        assert_eq!(*seen.borrow(), ["binding"]);
    }
}
