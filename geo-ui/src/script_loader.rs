//! Browser side of external script loading.
//!
//! Each URL is loaded at most once per page: loads are memoized in a
//! thread-local [`ScriptCache`], so concurrent callers await the same
//! injection and later callers get the cached outcome.

use geo_state::script_cache::{LoadResult, ScriptCache, SharedLoad};
use js_sys::{Function, Promise, Reflect};
use log::{info, warn};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Attribute recording how a tag injected here finished loading.
const LOAD_STATE_ATTR: &str = "data-load-state";

thread_local! {
    static SCRIPTS: RefCell<ScriptCache> = RefCell::new(ScriptCache::new());
}

/// An external script and how to recognise it already being on the page.
#[derive(Debug, Clone, Copy)]
pub struct ExternalScript {
    /// CSS selector matching a `<script>` tag that loads it
    pub existing_selector: &'static str,
    /// Whether the library's globals are already usable
    pub is_present: fn() -> bool,
}

/// Whether `window.a.b...` resolves to a defined, non-null value.
pub fn global_path_exists(path: &[&str]) -> bool {
    let mut current: JsValue = js_sys::global().into();
    for key in path {
        match Reflect::get(&current, &JsValue::from_str(key)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => current = value,
            _ => return false,
        }
    }
    true
}

/// Load `url` once. Awaiting the returned future yields the shared outcome.
pub fn load_script(url: &str, script: ExternalScript) -> SharedLoad {
    let owned = url.to_string();
    SCRIPTS.with(|cache| {
        cache
            .borrow_mut()
            .get_or_start(url, move || inject(owned, script))
    })
}

async fn inject(url: String, script: ExternalScript) -> LoadResult {
    if (script.is_present)() {
        return Ok(());
    }
    let promise = script_promise(&url, script);
    match JsFuture::from(promise).await {
        Ok(_) => {
            info!("Loaded script {}", url);
            Ok(())
        }
        Err(e) => {
            warn!("Script {} failed to load: {:?}", url, e);
            Err(format!("Failed to load {}", url))
        }
    }
}

/// A promise settled by the `load`/`error` events of the script tag,
/// reusing a matching tag when one is already in the document.
fn script_promise(url: &str, script: ExternalScript) -> Promise {
    let url = url.to_string();
    Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(e) = attach(&url, script, resolve, reject.clone()) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    })
}

/// What a `<script>` tag already in the document tells us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExistingTag {
    /// Still loading, or not injected here; wait for its events.
    Pending,
    Loaded,
    Failed,
}

impl ExistingTag {
    /// `load_state` is the tag's [`LOAD_STATE_ATTR`]; `present` whether the
    /// library's globals exist. A tag that finished without defining them
    /// will never fire again.
    fn classify(load_state: Option<&str>, present: bool) -> Self {
        match load_state {
            _ if present => ExistingTag::Loaded,
            Some("error") | Some("load") => ExistingTag::Failed,
            _ => ExistingTag::Pending,
        }
    }
}

fn attach(url: &str, script: ExternalScript, resolve: Function, reject: Function) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if let Some(existing) = document.query_selector(script.existing_selector)? {
        let load_state = existing.get_attribute(LOAD_STATE_ATTR);
        match ExistingTag::classify(load_state.as_deref(), (script.is_present)()) {
            ExistingTag::Loaded => {
                resolve.call0(&JsValue::NULL)?;
            }
            ExistingTag::Failed => {
                reject.call1(&JsValue::NULL, &JsValue::from_str("script tag already failed"))?;
            }
            ExistingTag::Pending => {
                let on_load = Closure::once_into_js(move || {
                    let _ = resolve.call0(&JsValue::NULL);
                });
                let on_error = Closure::once_into_js(move |event: JsValue| {
                    let _ = reject.call1(&JsValue::NULL, &event);
                });
                existing.add_event_listener_with_callback("load", on_load.unchecked_ref())?;
                existing.add_event_listener_with_callback("error", on_error.unchecked_ref())?;
            }
        }
        return Ok(());
    }

    let element: web_sys::HtmlScriptElement =
        document.create_element("script")?.dyn_into()?;
    let loaded = element.clone();
    let on_load = Closure::once_into_js(move || {
        let _ = loaded.set_attribute(LOAD_STATE_ATTR, "load");
        let _ = resolve.call0(&JsValue::NULL);
    });
    let failed = element.clone();
    let on_error = Closure::once_into_js(move |event: JsValue| {
        let _ = failed.set_attribute(LOAD_STATE_ATTR, "error");
        let _ = reject.call1(&JsValue::NULL, &event);
    });
    element.set_src(url);
    element.set_async(true);
    element.set_defer(true);
    element.set_onload(Some(on_load.unchecked_ref()));
    element.set_onerror(Some(on_error.unchecked_ref()));

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?;
    head.append_child(&element)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_tag_outcome() {
        assert_eq!(ExistingTag::classify(None, true), ExistingTag::Loaded);
        assert_eq!(ExistingTag::classify(Some("error"), false), ExistingTag::Failed);
        assert_eq!(ExistingTag::classify(Some("load"), false), ExistingTag::Failed);
        assert_eq!(ExistingTag::classify(None, false), ExistingTag::Pending);
    }
}
