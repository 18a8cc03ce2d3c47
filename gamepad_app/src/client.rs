//! Browser entry point.
//!
//! Builds the router over `window.history`, renders the resolved view into the
//! outlet, and keeps it in sync with link clicks, `gamepad:navigate` events and
//! the back/forward buttons.

use gamepad_router::{BrowserHistory, RouteError, Router, RouterConfig};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{JsCast, JsValue, prelude::*};

use crate::{
    AppView, build_router,
    shell::{OUTLET_ID, render_outlet},
};

/// Custom event that navigates by route name; the name goes in `detail`.
pub const NAVIGATE_EVENT: &str = "gamepad:navigate";

type AppRouter = Rc<RefCell<Router<AppView, BrowserHistory>>>;

fn js_error(err: JsValue) -> RouteError {
    RouteError::History(format!("{err:?}"))
}

fn document() -> Result<web_sys::Document, RouteError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| RouteError::History("document not found".to_owned()))
}

/// Called by `static/client.js` once the module is instantiated.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    start().map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Mounts the application on the current page.
pub fn start() -> Result<(), RouteError> {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();

    tracing_wasm::set_as_global_default();

    let config = RouterConfig::from_window().unwrap_or_else(RouterConfig::from_build_env);
    let router: AppRouter = Rc::new(RefCell::new(build_router(
        &config,
        BrowserHistory::new()?,
    )?));
    let document = document()?;

    render(&router, &document);

    listen_navigate_events(router.clone(), &document)?;
    listen_link_clicks(router.clone(), &document)?;
    listen_popstate(router)?;

    Ok(())
}

fn render(router: &AppRouter, document: &web_sys::Document) {
    let router = router.borrow();
    let (title, outlet) = render_outlet(router.current_route(), router.current_path());

    document.set_title(&title);

    match document.get_element_by_id(OUTLET_ID) {
        Some(element) => element.set_inner_html(&outlet),
        None => tracing::error!(id = OUTLET_ID, "outlet element not found"),
    }
}

fn navigate(router: &AppRouter, document: &web_sys::Document, name: &str) {
    let result = router.borrow_mut().navigate(name).map(|_| ());

    match result {
        Ok(()) => render(router, document),
        Err(err) => tracing::warn!(name, error = %err, "navigation failed"),
    }
}

fn listen_navigate_events(
    router: AppRouter,
    document: &web_sys::Document,
) -> Result<(), RouteError> {
    let navigate_callback = {
        let document = document.clone();

        Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
            if let Some(name) = event.detail().as_string() {
                navigate(&router, &document, &name);
            }
        }) as Box<dyn FnMut(_)>)
    };

    document
        .add_event_listener_with_callback(
            NAVIGATE_EVENT,
            navigate_callback.as_ref().unchecked_ref(),
        )
        .map_err(js_error)?;

    navigate_callback.forget();

    Ok(())
}

fn listen_link_clicks(
    router: AppRouter,
    document: &web_sys::Document,
) -> Result<(), RouteError> {
    let click_callback = {
        let document = document.clone();

        Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            // let the browser handle new-tab and non-primary clicks
            if event.default_prevented()
                || event.button() != 0
                || event.ctrl_key()
                || event.meta_key()
                || event.shift_key()
                || event.alt_key()
            {
                return;
            }

            let Some(link) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| element.closest("a[data-route]").ok().flatten())
            else {
                return;
            };

            let Some(name) = link.get_attribute("data-route") else {
                return;
            };

            event.prevent_default();
            navigate(&router, &document, &name);
        }) as Box<dyn FnMut(_)>)
    };

    document
        .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
        .map_err(js_error)?;

    click_callback.forget();

    Ok(())
}

fn listen_popstate(router: AppRouter) -> Result<(), RouteError> {
    let window =
        web_sys::window().ok_or_else(|| RouteError::History("window not found".to_owned()))?;
    let document = document()?;

    let popstate_callback = Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
        router.borrow_mut().sync();
        render(&router, &document);
    }) as Box<dyn FnMut(_)>);

    window
        .add_event_listener_with_callback(
            "popstate",
            popstate_callback.as_ref().unchecked_ref(),
        )
        .map_err(js_error)?;

    popstate_callback.forget();

    Ok(())
}
