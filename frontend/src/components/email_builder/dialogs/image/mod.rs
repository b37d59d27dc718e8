use builder_common::{ImageSource, ItemContent};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::email_builder::view::{image_source_inputs, uploading_notice};
use crate::components::email_builder::{EmailBuilderComponent, Msg};
use crate::tops_sheet::top_sheet::TopSheet;

/// Dialog for an image item that already has a picture: larger preview,
/// upload/URL controls that replace the current source, and removal.
pub fn image_dialog(component: &EmailBuilderComponent, link: &Scope<EmailBuilderComponent>) -> Html {
    html! {
        <TopSheet node_ref={component.image_dialog_ref.clone()}>
            <div class="image-dialog">
                <button class="close-btn" onclick={link.callback(|_| Msg::CloseImageDialog)}>
                    { "✕" }
                </button>
                { dialog_body(component, link) }
            </div>
        </TopSheet>
    }
}

fn dialog_body(component: &EmailBuilderComponent, link: &Scope<EmailBuilderComponent>) -> Html {
    let Some(id) = &component.selected_image_id else {
        return html! { <span class="dialog-note">{"No image selected"}</span> };
    };
    let template = &component.session.template;
    let Some((index, item)) = template.position(id).and_then(|i| template.get(i).map(|item| (i, item))) else {
        return html! { <span class="dialog-note">{"This block no longer exists"}</span> };
    };
    let ItemContent::Image { source } = &item.content else {
        return html! { <span class="dialog-note">{"This block is not an image"}</span> };
    };

    let preview = match source {
        Some(source) => {
            let caption = match source {
                ImageSource::DataUrl(_) => "Uploaded image".to_string(),
                ImageSource::Url(url) => format!("Linked image: {}", url),
            };
            let remove_id = id.clone();
            html! {
                <>
                    <img class="dialog-preview" src={source.as_src().to_string()} alt="Selected" />
                    <span class="dialog-note">{ caption }</span>
                    <button class="remove-btn" onclick={link.callback(move |_| Msg::RemoveImage(remove_id.clone()))}>
                        { "Remove image" }
                    </button>
                </>
            }
        }
        None => html! { <span class="dialog-note">{"No image yet"}</span> },
    };

    let controls = if component.uploading.contains(id) {
        uploading_notice()
    } else {
        let target = id.clone();
        let on_url = link.callback(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::ReplaceImageUrl {
                id: target.clone(),
                url: input.value(),
            }
        });
        image_source_inputs(link, index, format!("dialog-file-input-{}", id), on_url)
    };

    html! {
        <>
            { preview }
            <h3>{"Replace image"}</h3>
            { controls }
        </>
    }
}
