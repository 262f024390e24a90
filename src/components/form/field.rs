//! Field Component

use gpui::{
    App, Div, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window, div,
};
use gpui_component::{ActiveTheme, label::Label};

use super::ListOfErrors;
use crate::components::primitives::text_input::TextInput;

/// A labeled single-line input with an optional error region.
///
/// The input is marked invalid and the error region is rendered exactly when
/// errors are supplied, even if the supplied list is empty. The region shows
/// the errors as given; filtering is [`ErrorList`](super::ErrorList)'s job.
#[derive(IntoElement)]
pub struct Field {
    label: SharedString,
    input: TextInput,
    errors: Option<ListOfErrors>,
    error_id: Option<ElementId>,
    container: Option<Box<dyn FnOnce(Div) -> Div + 'static>>,
}

impl Field {
    /// Create a field from a label and a configured input primitive
    pub fn new(label: impl Into<SharedString>, input: TextInput) -> Self {
        Self {
            label: label.into(),
            input,
            errors: None,
            error_id: None,
            container: None,
        }
    }

    /// Set the validation errors for the field
    pub fn errors(mut self, errors: Option<ListOfErrors>) -> Self {
        self.errors = errors;
        self
    }

    /// Set the element id of the error region
    pub fn error_id(mut self, id: impl Into<ElementId>) -> Self {
        self.error_id = Some(id.into());
        self
    }

    /// Style the field container
    pub fn container(mut self, style: impl FnOnce(Div) -> Div + 'static) -> Self {
        self.container = Some(Box::new(style));
        self
    }
}

impl RenderOnce for Field {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let invalid = self.errors.is_some();
        let danger = cx.theme().danger;
        let muted = cx.theme().muted_foreground;

        // Region is present iff errors were supplied, empty list included
        let error_region = self.errors.map(|errors| {
            let region = div().pt_1().children(
                errors
                    .into_iter()
                    .flatten()
                    .map(|error| Label::new(error).text_xs().text_color(danger)),
            );
            match self.error_id {
                Some(id) => region.id(id).into_any_element(),
                None => region.into_any_element(),
            }
        });

        let mut container = div();
        if let Some(style) = self.container {
            container = style(container);
        }

        container
            .child(Label::new(self.label).text_sm().text_color(muted))
            .child(
                div()
                    .mt_1()
                    .child(self.input.invalid(invalid))
                    .children(error_region),
            )
    }
}
