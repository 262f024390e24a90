//! ErrorList Component

use gpui::{
    App, ElementId, Empty, InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled,
    Window,
};
use gpui_component::{ActiveTheme, label::Label, v_flex};

use super::{ListOfErrors, visible_errors};

/// Renders the validation messages for one field, or nothing at all.
///
/// Absent and empty entries are dropped; when nothing remains the component
/// renders no element.
#[derive(IntoElement)]
pub struct ErrorList {
    id: Option<ElementId>,
    errors: Option<ListOfErrors>,
}

impl ErrorList {
    /// Create an empty error list
    pub fn new() -> Self {
        Self {
            id: None,
            errors: None,
        }
    }

    /// Set the element id of the rendered list
    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the messages to display
    pub fn errors(mut self, errors: Option<ListOfErrors>) -> Self {
        self.errors = errors;
        self
    }
}

impl Default for ErrorList {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for ErrorList {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let visible = visible_errors(self.errors.as_ref());
        if visible.is_empty() {
            return Empty.into_any_element();
        }

        let danger = cx.theme().danger;
        let list = v_flex().gap_1().children(
            visible
                .into_iter()
                .map(|error| Label::new(error).text_xs().text_color(danger)),
        );

        match self.id {
            Some(id) => list.id(id).into_any_element(),
            None => list.into_any_element(),
        }
    }
}
