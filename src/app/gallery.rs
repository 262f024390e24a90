//! Gallery - demo view exercising every form component

use gpui::{
    Context, Entity, FocusHandle, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    px,
};
use gpui_component::{ActiveTheme, label::Label, v_flex};
use tracing::debug;

use crate::components::form::{
    CheckboxField, Field, ListOfErrors, TextareaField, checkbox_field,
};
use crate::components::primitives::text_input::TextInput;
use crate::components::primitives::textarea::Textarea;

/// Gallery view rendering one example of each field component
pub struct Gallery {
    email: SharedString,
    email_errors: Option<ListOfErrors>,
    username: SharedString,
    bio: SharedString,
    email_focus: FocusHandle,
    username_focus: FocusHandle,
    bio_focus: FocusHandle,
    remember: Entity<CheckboxField>,
}

impl Gallery {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let remember = checkbox_field("login", "remember", "Remember me", window, cx);
        remember.update(cx, |field, _| {
            field.set_error_id("remember-error");
            field.on_change(|checked, _, _| {
                debug!(checked, "Remember toggled");
            });
        });

        cx.observe(&remember, |_, _, cx| cx.notify()).detach();

        Self {
            email: SharedString::from("not-an-address"),
            email_errors: Some(vec![
                Some(SharedString::from("Email is invalid")),
                None,
                Some(SharedString::default()),
            ]),
            username: SharedString::default(),
            bio: SharedString::default(),
            email_focus: cx.focus_handle(),
            username_focus: cx.focus_handle(),
            bio_focus: cx.focus_handle(),
            remember,
        }
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .p_8()
            .gap_6()
            .child(Label::new("Form components").text_lg())
            .child(
                Field::new(
                    "Email",
                    TextInput::new("email-input")
                        .value(self.email.clone())
                        .placeholder("you@example.com")
                        .track_focus(&self.email_focus),
                )
                .errors(self.email_errors.clone())
                .error_id("email-error")
                .container(|this| this.w(px(360.0))),
            )
            .child(
                Field::new(
                    "Username",
                    TextInput::new("username-input")
                        .value(self.username.clone())
                        .placeholder("Pick a name")
                        .track_focus(&self.username_focus),
                )
                .container(|this| this.w(px(360.0))),
            )
            .child(
                TextareaField::new(
                    "Bio",
                    Textarea::new("bio-input")
                        .value(self.bio.clone())
                        .placeholder("A few lines about you")
                        .rows(4)
                        .track_focus(&self.bio_focus),
                )
                .container(|this| this.w(px(360.0))),
            )
            .child(self.remember.clone())
    }
}
