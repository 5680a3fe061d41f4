//! Guarded widget wiring against the live document.
//!
//! One `wire_*` function per widget. Each checks for its required
//! elements and degrades to a logged no-op when they are absent, so a
//! page that renders only some of the widgets mounts cleanly.
//!
//! Listeners live for the page's lifetime: closures are handed to the
//! DOM and leaked with `forget`. Controllers shared between several
//! closures sit behind `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use pagewire_core::{
    parse_ordinal, Appearance, CoverPicker, Dismissible, FlashMessage, Star, StarRating,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, Window};

use crate::config::MountConfig;
use crate::page::DomPage;
use crate::query;

/// Wire every widget the document carries.
pub fn mount_all(window: &Window, document: &Document, config: &MountConfig) {
    wire_modal(window, document, config);
    wire_profile_menu(window, document, config);
    wire_star_rating(window, document, config);
    wire_flash_messages(window, document, config);
    wire_cover_picker(window, document, config);
}

/// Look up a required element, logging the skip when it is missing.
fn require(document: &Document, id: &str, widget: &str) -> Option<Element> {
    let element = document.get_element_by_id(id);
    if element.is_none() {
        log::warn!("{}: #{} not found, skipping", widget, id);
    }
    element
}

/// Resolve a click event's target as an element.
fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// `#openModal` opens `#Modal`; clicking outside closes it and strips
/// the query string. A `update_review_id` deep link opens it at mount.
fn wire_modal(window: &Window, document: &Document, config: &MountConfig) {
    let modal = match require(document, &config.modal_id, "modal") {
        Some(element) => element,
        None => return,
    };
    let trigger = match require(document, &config.modal_trigger_id, "modal") {
        Some(element) => element,
        None => return,
    };

    let controller = Dismissible::new(modal, Appearance::Display)
        .with_trigger(trigger.clone())
        .with_query_clear();
    let controller = Rc::new(RefCell::new(controller));

    // Reopen straight away when the URL carries a review deep link.
    if let Ok(search) = window.location().search() {
        if query::review_param(&search).is_some() {
            let mut page = DomPage::new(window.clone());
            controller.borrow_mut().open(&mut page);
            log::info!("modal: reopened for review deep link");
        }
    }

    {
        let controller = controller.clone();
        let mut page = DomPage::new(window.clone());
        let on_open = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            controller.borrow_mut().open(&mut page);
        });
        let _ = trigger
            .add_event_listener_with_callback("click", on_open.as_ref().unchecked_ref());
        on_open.forget();
    }

    {
        let controller = controller.clone();
        let mut page = DomPage::new(window.clone());
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(target) = target_element(&event) {
                controller.borrow_mut().on_global_click(&mut page, &target);
            }
        });
        let _ = window
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    log::info!("mounted modal");
}

/// `#profileTrigger` toggles `#profileMenu`; clicking elsewhere closes it.
fn wire_profile_menu(window: &Window, document: &Document, config: &MountConfig) {
    let menu = match require(document, &config.profile_menu_id, "profile menu") {
        Some(element) => element,
        None => return,
    };
    let trigger = match require(document, &config.profile_trigger_id, "profile menu") {
        Some(element) => element,
        None => return,
    };

    let controller = Dismissible::new(menu, Appearance::Class(config.menu_active_class.clone()))
        .with_trigger(trigger.clone());
    let controller = Rc::new(RefCell::new(controller));

    {
        let controller = controller.clone();
        let mut page = DomPage::new(window.clone());
        let on_toggle = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            controller.borrow_mut().toggle(&mut page);
        });
        let _ = trigger
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
        on_toggle.forget();
    }

    {
        let controller = controller.clone();
        let mut page = DomPage::new(window.clone());
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(target) = target_element(&event) {
                controller.borrow_mut().on_global_click(&mut page, &target);
            }
        });
        let _ = document
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    log::info!("mounted profile menu");
}

/// Clicking a star selects its ordinal, repaints the row, and mirrors
/// the hidden rating field.
fn wire_star_rating(window: &Window, document: &Document, config: &MountConfig) {
    let nodes = match document.query_selector_all(&config.star_selector) {
        Ok(nodes) => nodes,
        Err(_) => {
            log::warn!("star rating: invalid selector {:?}", config.star_selector);
            return;
        }
    };
    if nodes.length() == 0 {
        return;
    }

    let max = u8::try_from(nodes.length()).unwrap_or(u8::MAX);
    let mut stars = Vec::new();
    for index in 0..nodes.length() {
        let node = match nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(element) => element,
            None => continue,
        };
        let raw = node.get_attribute("data-value").unwrap_or_default();
        match parse_ordinal(&raw, max) {
            Ok(value) => stars.push(Star { node, value }),
            Err(err) => log::warn!("star rating: ignoring star: {}", err),
        }
    }
    if stars.is_empty() {
        log::warn!("star rating: no usable stars, skipping");
        return;
    }

    let backing = document.get_element_by_id(&config.rating_input_id);
    let initial = backing
        .as_ref()
        .and_then(|element| element.dyn_ref::<HtmlInputElement>())
        .map(|input| input.value());

    let controller = Rc::new(RefCell::new(StarRating::new(
        stars.clone(),
        backing,
        initial.as_deref(),
    )));

    for star in stars {
        let controller = controller.clone();
        let value = star.value;
        let mut page = DomPage::new(window.clone());
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Err(err) = controller.borrow_mut().select(&mut page, value) {
                log::warn!("star rating: {}", err);
            }
        });
        let _ = star
            .node
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    log::info!("mounted star rating with {} stars", controller.borrow().star_count());
}

/// Every `.flash` message hides after the configured delay and is
/// removed when its hide animation finishes.
fn wire_flash_messages(window: &Window, document: &Document, config: &MountConfig) {
    let nodes = match document.query_selector_all(&config.flash_selector) {
        Ok(nodes) => nodes,
        Err(_) => {
            log::warn!("flash: invalid selector {:?}", config.flash_selector);
            return;
        }
    };

    for index in 0..nodes.length() {
        let node = match nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(element) => element,
            None => continue,
        };
        let controller = Rc::new(RefCell::new(FlashMessage::new(node.clone())));

        {
            let controller = controller.clone();
            let mut page = DomPage::new(window.clone());
            let begin_hide = Closure::once(move || {
                controller.borrow_mut().begin_hide(&mut page);
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                begin_hide.as_ref().unchecked_ref(),
                config.flash_delay_ms as i32,
            );
            begin_hide.forget();
        }

        {
            let controller = controller.clone();
            let mut page = DomPage::new(window.clone());
            let on_end = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                controller.borrow_mut().on_animation_end(&mut page);
            });
            let _ = node
                .add_event_listener_with_callback("animationend", on_end.as_ref().unchecked_ref());
            on_end.forget();
        }
    }

    if nodes.length() > 0 {
        log::info!("mounted {} flash messages", nodes.length());
    }
}

/// Selecting a cover image updates the name label and, once the file
/// has been read, the preview image.
fn wire_cover_picker(window: &Window, document: &Document, config: &MountConfig) {
    let input = match require(document, &config.file_input_id, "cover picker") {
        Some(element) => element,
        None => return,
    };
    let input = match input.dyn_into::<HtmlInputElement>() {
        Ok(input) => input,
        Err(_) => {
            log::warn!("cover picker: #{} is not a file input, skipping", config.file_input_id);
            return;
        }
    };
    let label = document.get_element_by_id(&config.file_label_id);
    let preview = document.get_element_by_id(&config.preview_image_id);
    if label.is_none() && preview.is_none() {
        log::warn!("cover picker: no label or preview target, skipping");
        return;
    }

    let controller = Rc::new(RefCell::new(CoverPicker::new(
        label,
        preview,
        config.label_placeholder.clone(),
    )));

    let window = window.clone();
    let input_in_closure = input.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let file = input_in_closure.files().and_then(|files| files.get(0));
        let name = file.as_ref().map(|file| file.name());

        let mut page = DomPage::new(window.clone());
        let ticket = controller
            .borrow_mut()
            .on_selection(&mut page, name.as_deref());

        let (file, ticket) = match (file, ticket) {
            (Some(file), Some(ticket)) => (file, ticket),
            _ => return,
        };

        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => return,
        };

        let controller = controller.clone();
        let window = window.clone();
        let reader_in_closure = reader.clone();
        // One-shot callback per read; freed after it fires.
        let on_load = Closure::once_into_js(move || {
            let data_url = reader_in_closure
                .result()
                .ok()
                .and_then(|value| value.as_string());
            if let Some(data_url) = data_url {
                let mut page = DomPage::new(window.clone());
                controller
                    .borrow_mut()
                    .on_read_complete(&mut page, ticket, &data_url);
            }
        });
        reader.set_onload(Some(on_load.unchecked_ref()));

        if reader.read_as_data_url(&file).is_err() {
            log::warn!("cover picker: failed to start file read");
        }
    });
    let _ = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();

    log::info!("mounted cover picker");
}
