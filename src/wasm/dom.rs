//! DOM renderer: paints a [`View`] onto the hosting page's fixed elements.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement, MouseEvent};

use crate::controller::Renderer;
use crate::core::constants::dom;
use crate::core::{Action, Panel, View, WalletListView};

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force(dom::HIDDEN_CLASS, hidden);
}

pub struct DomRenderer {
    document: Document,
    connect_view: Element,
    authorize_view: Element,
    final_view: Element,
    wallet_list: Element,
    authorize_btn: HtmlButtonElement,
    loader: Element,
    status_message: Element,
    connected_wallet_info: Element,
}

impl DomRenderer {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            connect_view: element(document, dom::CONNECT_VIEW)?,
            authorize_view: element(document, dom::AUTHORIZE_VIEW)?,
            final_view: element(document, dom::FINAL_VIEW)?,
            wallet_list: element(document, dom::WALLET_LIST)?,
            authorize_btn: element(document, dom::AUTHORIZE_BTN)?.dyn_into::<HtmlButtonElement>()?,
            loader: element(document, dom::LOADER)?,
            status_message: element(document, dom::STATUS_MESSAGE)?,
            connected_wallet_info: element(document, dom::CONNECTED_WALLET_INFO)?,
        })
    }

    /// Fill the wallet picker. Buttons are only created (and bound) for a
    /// non-empty list.
    pub fn render_wallet_list(&self, list: &WalletListView, on_action: Rc<dyn Fn(Action)>) -> Result<(), JsValue> {
        self.wallet_list.set_inner_html("");
        match list {
            WalletListView::Empty { message } => {
                let p = self.document.create_element("p")?;
                p.set_text_content(Some(message));
                self.wallet_list.append_child(&p)?;
            }
            WalletListView::Entries(entries) => {
                for entry in entries {
                    let button = self.document.create_element("button")?.dyn_into::<HtmlElement>()?;

                    let icon = self.document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
                    icon.set_src(&entry.icon);
                    icon.set_alt(&format!("{} icon", entry.name));
                    button.append_child(&icon)?;
                    let label = self.document.create_element("span")?;
                    label.set_text_content(Some(&format!(" {}", entry.name)));
                    button.append_child(&label)?;

                    bind_click(&button, entry.action.clone(), on_action.clone());
                    self.wallet_list.append_child(&button)?;
                }
            }
        }
        Ok(())
    }

    pub fn bind_authorize(&self, on_action: Rc<dyn Fn(Action)>) {
        bind_click(&self.authorize_btn, Action::Authorize, on_action);
    }
}

fn bind_click(target: &HtmlElement, action: Action, on_action: Rc<dyn Fn(Action)>) {
    let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        on_action(action.clone());
    });
    target.set_onclick(Some(handler.as_ref().unchecked_ref()));
    // Lives as long as the page.
    handler.forget();
}

impl Renderer for DomRenderer {
    fn render(&self, view: &View) {
        set_hidden(&self.loader, !view.loader_visible);
        self.authorize_btn.set_disabled(view.authorize_disabled);

        self.status_message.set_text_content(Some(&view.status_text));
        let class = if view.status_is_error {
            format!("{} {}", dom::STATUS_CLASS, dom::ERROR_CLASS)
        } else {
            dom::STATUS_CLASS.to_string()
        };
        self.status_message.set_class_name(&class);

        set_hidden(&self.connect_view, !view.shows(Panel::Connect));
        set_hidden(&self.authorize_view, !view.shows(Panel::Authorize));
        set_hidden(&self.final_view, !view.shows(Panel::Final));

        if let Some(caption) = &view.wallet_caption {
            self.connected_wallet_info.set_text_content(Some(caption));
        }
    }
}
