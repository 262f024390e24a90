//! TextInput Component

use gpui::{
    App, ElementId, FocusHandle, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, div, px,
};
use gpui_component::ActiveTheme;

/// A single-line text input primitive.
///
/// Display-only: the value is owned by the caller and passed down on every
/// render. Editing is wired by the application's input stack, not here.
#[derive(IntoElement)]
pub struct TextInput {
    id: ElementId,
    value: SharedString,
    placeholder: SharedString,
    disabled: bool,
    invalid: bool,
    focus_handle: Option<FocusHandle>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: SharedString::default(),
            placeholder: SharedString::default(),
            disabled: false,
            invalid: false,
            focus_handle: None,
        }
    }

    /// Set the value
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the input as failing validation
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Track a focus handle so the input participates in focus traversal
    pub fn track_focus(mut self, handle: &FocusHandle) -> Self {
        self.focus_handle = Some(handle.clone());
        self
    }
}

impl RenderOnce for TextInput {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let is_focused = self
            .focus_handle
            .as_ref()
            .is_some_and(|handle| handle.is_focused(window));

        let border_color = if self.invalid {
            cx.theme().danger
        } else if is_focused {
            cx.theme().accent
        } else {
            cx.theme().border
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            self.value.clone()
        };

        let text_color = if self.value.is_empty() {
            cx.theme().muted_foreground
        } else {
            cx.theme().foreground
        };

        let mut input = div()
            .id(self.id)
            .px_3()
            .py_2()
            .bg(cx.theme().background)
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .overflow_hidden()
            .child(display_text);

        if self.disabled {
            input = input.opacity(0.5);
        }

        match self.focus_handle {
            Some(handle) => input.track_focus(&handle).into_any_element(),
            None => input.into_any_element(),
        }
    }
}
