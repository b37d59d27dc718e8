//! Utility functions for the email builder component.
//!
//! - **Gestures**: turning the browser's `drop`/`dragend` pair into exactly
//!   one `DropEvent`, and a drop on a container's empty area into the index
//!   the drag coordinator expects.
//! - **User feedback**: temporary "toast" notifications for failures the user
//!   should know about (unreadable files, images that vanished mid-upload).
//! - **Logging**: one console line per drop outcome.

use builder_common::{Container, DropEvent, DropLocation, DropOutcome};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Index targeted by a drop after the last item of `destination`.
///
/// Copying from the palette appends (`len`). A move inside one container can
/// only reach the last existing slot (`len - 1`).
pub fn end_index(source: Container, destination: Container, len: usize) -> usize {
    if source == destination {
        len.saturating_sub(1)
    } else {
        len
    }
}

/// How the browser reported the end of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// Released over an entry of a container.
    Drop(DropLocation),
    /// Released over a container's empty area; `len` is its current length.
    DropAtEnd { container: Container, len: usize },
    /// `dragend`, fired after every gesture whether or not it dropped.
    DragEnd,
}

/// Consumes the gesture started at `drag_source` and returns its drop event.
///
/// Returns `None` when no gesture is in progress, so the `dragend` that
/// follows a `drop` yields nothing.
pub fn resolve_gesture(drag_source: &mut Option<DropLocation>, end: GestureEnd) -> Option<DropEvent> {
    let source = drag_source.take()?;
    let event = match end {
        GestureEnd::Drop(destination) => DropEvent::new(source, destination),
        GestureEnd::DropAtEnd { container, len } => {
            let index = end_index(source.container, container, len);
            DropEvent::new(source, DropLocation::new(container, index))
        }
        GestureEnd::DragEnd => DropEvent::cancelled(source),
    };
    Some(event)
}

/// Writes a drop outcome to the browser console.
pub fn log_outcome(outcome: &DropOutcome) {
    let line = match outcome {
        DropOutcome::Cancelled => "drop: cancelled".to_string(),
        DropOutcome::PaletteReordered { from, to } => format!("drop: palette {} -> {}", from, to),
        DropOutcome::TemplateReordered { from, to } => format!("drop: template {} -> {}", from, to),
        DropOutcome::Inserted { id, index } => format!("drop: inserted {} at {}", id, index),
        DropOutcome::Unsupported => "drop: template items cannot go back to the palette".to_string(),
    };
    gloo_console::log!(line);
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates and injects a styled `div`, then removes it after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_other_container_appends() {
        assert_eq!(end_index(Container::Palette, Container::Template, 5), 5);
        assert_eq!(end_index(Container::Palette, Container::Template, 0), 0);
    }

    #[test]
    fn drop_then_dragend_yields_one_event() {
        let mut source = Some(DropLocation::palette(1));
        let dropped = resolve_gesture(&mut source, GestureEnd::Drop(DropLocation::template(3)));
        assert_eq!(
            dropped,
            Some(DropEvent::new(DropLocation::palette(1), DropLocation::template(3)))
        );
        assert_eq!(resolve_gesture(&mut source, GestureEnd::DragEnd), None);
        assert_eq!(source, None);
    }

    #[test]
    fn dragend_alone_is_cancelled() {
        let mut source = Some(DropLocation::template(2));
        assert_eq!(
            resolve_gesture(&mut source, GestureEnd::DragEnd),
            Some(DropEvent::cancelled(DropLocation::template(2)))
        );
        assert_eq!(source, None);
    }

    #[test]
    fn drop_without_dragstart_is_ignored() {
        let mut source = None;
        let end = GestureEnd::DropAtEnd { container: Container::Template, len: 4 };
        assert_eq!(resolve_gesture(&mut source, end), None);
    }

    #[test]
    fn drop_at_end_of_same_container_moves_to_last_slot() {
        let mut source = Some(DropLocation::template(0));
        let end = GestureEnd::DropAtEnd { container: Container::Template, len: 5 };
        assert_eq!(
            resolve_gesture(&mut source, end),
            Some(DropEvent::new(DropLocation::template(0), DropLocation::template(4)))
        );
    }

    #[test]
    fn drop_at_end_of_other_container_appends() {
        let mut source = Some(DropLocation::palette(2));
        let end = GestureEnd::DropAtEnd { container: Container::Template, len: 5 };
        assert_eq!(
            resolve_gesture(&mut source, end),
            Some(DropEvent::new(DropLocation::palette(2), DropLocation::template(5)))
        );
    }

    #[test]
    fn end_of_same_container_is_last_slot() {
        assert_eq!(end_index(Container::Template, Container::Template, 5), 4);
        assert_eq!(end_index(Container::Palette, Container::Palette, 1), 0);
    }
}
