//! Update function for the email builder component.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`, mutates
//! the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Turning HTML5 drag events into one `DropEvent` per gesture and handing it
//!   to the session's drag coordinator.
//! - Inline text edits on heading, paragraph, and button items.
//! - Image uploads: file -> bytes -> `data:` URL, applied to the item captured
//!   when the upload started, wherever it sits by then.
//! - Pasted image URLs, and the image dialog (replace / remove).

use builder_common::image::encode_data_url;
use builder_common::{Container, StoreError};
use gloo_console::warn;
use gloo_file::futures::read_as_bytes;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{log_outcome, resolve_gesture, show_toast, GestureEnd};
use super::messages::Msg;
use super::state::EmailBuilderComponent;

/// Central update function for the component.
///
/// Store rejections never reach the user as a crash: they are logged and the
/// view is left as it was.
pub fn update(component: &mut EmailBuilderComponent, ctx: &Context<EmailBuilderComponent>, msg: Msg) -> bool {
    match msg {
        Msg::DragStart(source) => {
            component.drag_source = Some(source);
            component.drag_over = None;
            false
        }
        Msg::DragOver(location) => {
            if component.drag_over == Some(location) {
                return false;
            }
            component.drag_over = Some(location);
            true
        }
        Msg::Drop(destination) => finish_drag(component, GestureEnd::Drop(destination)),
        Msg::DropAtEnd(container) => {
            let len = match container {
                Container::Palette => component.session.palette.len(),
                Container::Template => component.session.template.len(),
            };
            finish_drag(component, GestureEnd::DropAtEnd { container, len })
        }
        Msg::DragEnd => finish_drag(component, GestureEnd::DragEnd),
        Msg::UpdateText { id, text } => {
            match component.session.template.set_text_by_id(&id, text) {
                Ok(()) => true,
                Err(err) => report(&err),
            }
        }
        Msg::ImageFileSelected { index, file } => {
            let pending = match component.session.template.request_image(index) {
                Ok(pending) => pending,
                Err(err) => return report(&err),
            };
            component.uploading.insert(pending.item_id().to_string());

            let link = ctx.link().clone();
            spawn_local(async move {
                let file = gloo_file::File::from(file);
                let mime = file.raw_mime_type();
                let msg = match read_as_bytes(&file).await {
                    Ok(bytes) => match encode_data_url(&mime, &bytes) {
                        Ok(data_url) => Msg::ImageDecoded { pending, data_url },
                        Err(err) => Msg::ImageDecodeFailed {
                            pending,
                            reason: err.to_string(),
                        },
                    },
                    Err(err) => Msg::ImageDecodeFailed {
                        pending,
                        reason: err.to_string(),
                    },
                };
                link.send_message(msg);
            });
            true
        }
        Msg::ImageDecoded { pending, data_url } => {
            component.uploading.remove(pending.item_id());
            if let Err(err) = component.session.template.complete_image(pending, data_url) {
                if matches!(err, StoreError::ItemNotFound { .. }) {
                    show_toast("The image finished uploading but its block is gone.");
                }
                report(&err);
            }
            true
        }
        Msg::ImageDecodeFailed { pending, reason } => {
            component.uploading.remove(pending.item_id());
            warn!(format!("image upload for {} failed: {}", pending.item_id(), reason));
            show_toast("Could not read the selected image.");
            true
        }
        Msg::UpdateImageUrl { index, url } => {
            match component.session.template.set_image_url(index, &url) {
                Ok(()) => true,
                Err(err) => report(&err),
            }
        }
        Msg::ReplaceImageUrl { id, url } => {
            match component.session.template.set_image_url_by_id(&id, &url) {
                Ok(()) => true,
                Err(err) => report(&err),
            }
        }
        Msg::OpenImageDialog(id) => {
            component.selected_image_id = Some(id);
            open_top_sheet(component.image_dialog_ref.clone());
            true
        }
        Msg::CloseImageDialog => {
            component.selected_image_id = None;
            close_top_sheet(component.image_dialog_ref.clone());
            true
        }
        Msg::RemoveImage(id) => {
            if let Err(err) = component.session.template.clear_image_by_id(&id) {
                report(&err);
            }
            component.selected_image_id = None;
            close_top_sheet(component.image_dialog_ref.clone());
            true
        }
    }
}

/// Ends the gesture in progress and hands its drop event, if any, to the
/// session.
fn finish_drag(component: &mut EmailBuilderComponent, end: GestureEnd) -> bool {
    component.drag_over = None;
    let Some(event) = resolve_gesture(&mut component.drag_source, end) else {
        return true;
    };
    match component.session.apply_drop(event) {
        Ok(outcome) => log_outcome(&outcome),
        Err(err) => {
            report(&err);
        }
    }
    true
}

fn report(err: &StoreError) -> bool {
    warn!(format!("builder: {}", err));
    false
}
