//! View rendering for the email builder component.
//!
//! Two drop containers side by side: the palette of available components on
//! the left and the email template on the right. Palette entries are HTML5
//! draggables; template items are dragged by their handle so their text
//! fields keep normal selection. The containers themselves accept drops after
//! their last entry. Template items render an editor matching their kind.

use builder_common::{Container, DropLocation, ImageSource, ItemContent, TemplateItem};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::image::image_dialog;
use super::messages::Msg;
use super::state::EmailBuilderComponent;

/// Main view function: palette, template, and the (hidden) image dialog.
pub fn view(component: &EmailBuilderComponent, ctx: &Context<EmailBuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="builder">
            { build_palette(component, link) }
            { build_template(component, link) }
            { image_dialog(component, link) }
        </div>
    }
}

fn build_palette(component: &EmailBuilderComponent, link: &Scope<EmailBuilderComponent>) -> Html {
    let entries = component
        .session
        .palette
        .items()
        .iter()
        .enumerate()
        .map(|(index, archetype)| {
            let location = DropLocation::palette(index);
            html! {
                <li
                    key={archetype.id.clone()}
                    class={classes!("palette-item", drag_target_class(component, location))}
                    draggable="true"
                    ondragstart={on_drag_start(link, location)}
                    ondragover={on_drag_over(link, location)}
                    ondrop={on_drop(link, location)}
                    ondragend={link.callback(|_: DragEvent| Msg::DragEnd)}
                >
                    { archetype.display_name.clone() }
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <aside class="palette">
            <h2>{"Available Components"}</h2>
            <ul
                class="drop-zone palette-list"
                ondragover={allow_drop()}
                ondrop={on_drop_at_end(link, Container::Palette)}
            >
                { entries }
            </ul>
        </aside>
    }
}

fn build_template(component: &EmailBuilderComponent, link: &Scope<EmailBuilderComponent>) -> Html {
    let entries = component
        .session
        .template
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| build_template_item(component, link, index, item))
        .collect::<Html>();

    html! {
        <section class="template">
            <h2>{"Email Template"}</h2>
            <div
                class="drop-zone template-list"
                ondragover={allow_drop()}
                ondrop={on_drop_at_end(link, Container::Template)}
            >
                { entries }
                {
                    if component.session.template.is_empty() {
                        html! { <p class="empty-hint">{"Drag components here to build your email."}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}

fn build_template_item(
    component: &EmailBuilderComponent,
    link: &Scope<EmailBuilderComponent>,
    index: usize,
    item: &TemplateItem,
) -> Html {
    let location = DropLocation::template(index);
    let placeholder = item.display_name.clone();

    let body = match &item.content {
        ItemContent::Heading { text } => html! {
            <input
                class="heading-input"
                type="text"
                placeholder={placeholder}
                value={text.clone()}
                oninput={on_text_input(link, &item.id)}
            />
        },
        ItemContent::Paragraph { text } => html! {
            <textarea
                class="paragraph-input"
                placeholder={placeholder}
                value={text.clone()}
                oninput={on_text_input(link, &item.id)}
            />
        },
        ItemContent::Button { label } => html! {
            <button type="button" class="email-button">
                <input
                    class="button-input"
                    type="text"
                    placeholder={placeholder}
                    value={label.clone()}
                    oninput={on_text_input(link, &item.id)}
                />
            </button>
        },
        ItemContent::Image { source } => build_image(component, link, index, &item.id, source.as_ref()),
        ItemContent::Divider => html! { <hr class="divider" /> },
    };

    html! {
        <div
            key={item.id.clone()}
            class={classes!("template-item", drag_target_class(component, location))}
            ondragover={on_drag_over(link, location)}
            ondrop={on_drop(link, location)}
        >
            <span
                class="drag-handle"
                title="Drag to reorder"
                draggable="true"
                ondragstart={on_handle_drag_start(link, location)}
                ondragend={link.callback(|_: DragEvent| Msg::DragEnd)}
            >
                { "⋮⋮" }
            </span>
            { body }
        </div>
    }
}

fn build_image(
    component: &EmailBuilderComponent,
    link: &Scope<EmailBuilderComponent>,
    index: usize,
    id: &str,
    source: Option<&ImageSource>,
) -> Html {
    if let Some(source) = source {
        let id = id.to_string();
        return html! {
            <img
                class="image-preview"
                src={source.as_src().to_string()}
                alt="Selected"
                title="Click to change the image"
                onclick={link.callback(move |_| Msg::OpenImageDialog(id.clone()))}
            />
        };
    }
    if component.uploading.contains(id) {
        return uploading_notice();
    }
    let on_url = link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateImageUrl {
            index,
            url: input.value(),
        }
    });
    image_source_inputs(link, index, format!("file-input-{}", id), on_url)
}

pub(super) fn uploading_notice() -> Html {
    html! {
        <div class="image-prompt">
            <span class="uploading">{"Uploading image…"}</span>
        </div>
    }
}

/// Upload button for the item at `index` and a URL field handled by `on_url`.
/// The URL is applied on `change` (enter or blur), not on every keystroke.
pub(super) fn image_source_inputs(
    link: &Scope<EmailBuilderComponent>,
    index: usize,
    input_id: String,
    on_url: Callback<Event>,
) -> Html {
    let on_file = link.batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        // Reset so picking the same file again still fires `change`.
        input.set_value("");
        file.map(|file| Msg::ImageFileSelected { index, file })
    });

    html! {
        <div class="image-prompt">
            <input type="file" accept="image/*" class="hidden" id={input_id.clone()} onchange={on_file} />
            <label for={input_id} class="upload-btn">{"Upload Image"}</label>
            <input type="text" class="url-input" placeholder="Paste image URL" onchange={on_url} />
        </div>
    }
}

fn drag_target_class(component: &EmailBuilderComponent, location: DropLocation) -> Option<&'static str> {
    component.is_drag_target(location).then_some("drag-target")
}

fn on_drag_start(link: &Scope<EmailBuilderComponent>, location: DropLocation) -> Callback<DragEvent> {
    link.callback(move |e: DragEvent| {
        if let Some(transfer) = e.data_transfer() {
            // Firefox only starts a drag when some data is attached.
            transfer.set_data("text/plain", "").ok();
            transfer.set_effect_allowed("copyMove");
        }
        Msg::DragStart(location)
    })
}

/// Starts a template drag from the handle, showing the whole item as the
/// drag image.
fn on_handle_drag_start(link: &Scope<EmailBuilderComponent>, location: DropLocation) -> Callback<DragEvent> {
    let start = on_drag_start(link, location);
    Callback::from(move |e: DragEvent| {
        let item = e
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|handle| handle.closest(".template-item").ok().flatten());
        if let (Some(transfer), Some(item)) = (e.data_transfer(), item) {
            transfer.set_drag_image(&item, 0, 0);
        }
        start.emit(e);
    })
}

fn on_drag_over(link: &Scope<EmailBuilderComponent>, location: DropLocation) -> Callback<DragEvent> {
    link.callback(move |e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        Msg::DragOver(location)
    })
}

fn on_drop(link: &Scope<EmailBuilderComponent>, location: DropLocation) -> Callback<DragEvent> {
    link.callback(move |e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        Msg::Drop(location)
    })
}

fn on_drop_at_end(link: &Scope<EmailBuilderComponent>, container: Container) -> Callback<DragEvent> {
    link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DropAtEnd(container)
    })
}

fn allow_drop() -> Callback<DragEvent> {
    Callback::from(|e: DragEvent| e.prevent_default())
}

fn on_text_input(link: &Scope<EmailBuilderComponent>, id: &str) -> Callback<InputEvent> {
    let id = id.to_string();
    link.callback(move |e: InputEvent| {
        let text = e
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
            .unwrap_or_default();
        Msg::UpdateText { id: id.clone(), text }
    })
}
