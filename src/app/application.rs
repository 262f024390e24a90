//! Application - App Initialization and Window Management
//!
//! Entry point for the gallery application showing the form components.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::gallery::Gallery;

actions!(formkit, [Quit]);

/// Run the gallery application
pub fn run_app() {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(|cx: &mut App| {
            gpui_component::init(cx);

            // Set up action handlers
            cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

            // Quit the app when all windows are closed (macOS behavior)
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            // Create main window
            let bounds = Bounds::centered(None, gpui::size(px(760.0), px(600.0)), cx);
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from("Formkit Gallery")),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let window = cx.open_window(window_options, |window, cx| {
                cx.new(|cx| Gallery::new(window, cx))
            });
            if let Err(error) = window {
                tracing::error!(%error, "Failed to open gallery window");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
