//! Email builder: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `EmailBuilderProps`, `EmailBuilderComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Own the `BuilderSession` (palette + template) for the lifetime of the page.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EmailBuilderProps;
pub use state::EmailBuilderComponent;

impl Component for EmailBuilderComponent {
    type Message = Msg;
    type Properties = EmailBuilderProps;

    fn create(ctx: &Context<Self>) -> Self {
        EmailBuilderComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            gloo_console::log!(format!(
                "email builder ready: {} palette components, {} template items",
                self.session.palette.len(),
                self.session.template.len()
            ));
        }
    }
}
