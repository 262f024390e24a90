//! Checkbox Component

use gpui::{
    App, ElementId, FocusHandle, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::ActiveTheme;

/// A checkbox primitive.
///
/// Stateless: the checked flag is passed down by the caller and clicking
/// reports the flipped value through `on_change`. Clicking the attached label
/// toggles as well.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    disabled: bool,
    focus_handle: Option<FocusHandle>,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            disabled: false,
            focus_handle: None,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Track a focus handle so the checkbox participates in focus traversal
    pub fn track_focus(mut self, handle: &FocusHandle) -> Self {
        self.focus_handle = Some(handle.clone());
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let disabled = self.disabled;
        let on_change = self.on_change;

        let is_focused = self
            .focus_handle
            .as_ref()
            .is_some_and(|handle| handle.is_focused(window));

        let box_bg = if checked {
            cx.theme().accent
        } else {
            cx.theme().background
        };

        let border_color = if is_focused {
            cx.theme().accent
        } else if checked {
            cx.theme().accent
        } else {
            cx.theme().border
        };

        let check_mark = if checked { "✓" } else { "" };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(cx.theme().accent_foreground)
                    .text_size(px(12.0))
                    .child(check_mark),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(
                div()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .child(label),
            );
        }

        if !disabled {
            if let Some(handler) = on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    handler(!checked, window, cx);
                });
            }
        } else {
            checkbox = checkbox.opacity(0.5);
        }

        match self.focus_handle {
            Some(handle) => checkbox.track_focus(&handle).into_any_element(),
            None => checkbox.into_any_element(),
        }
    }
}
