//! Panic page shown after the WASM module panics.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

const PANIC_REPORT_KEY: &str = "devfolio_panic_report";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn stored_report() -> Option<String> {
    local_storage()?.get_item(PANIC_REPORT_KEY).ok()?
}

fn forget_report() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(PANIC_REPORT_KEY);
    }
}

fn panic_report(message: &str, location: Option<String>) -> String {
    let location = location.unwrap_or_else(|| "unknown location".to_string());
    format!("{message}\n\nLocation: {location}")
}

/// Installs a hook that logs the panic, stores a report in localStorage and
/// navigates to `/panic`.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);

        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
        let report = panic_report(&info.to_string(), location);

        if let Some(storage) = local_storage() {
            let _ = storage.set_item(PANIC_REPORT_KEY, &report);
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_pathname("/panic");
        }
    }));
}

#[function_component(PanicPage)]
pub fn panic_page() -> Html {
    let report = use_state(stored_report);

    let on_clear = {
        let report = report.clone();
        Callback::from(move |_: MouseEvent| {
            forget_report();
            report.set(None);
        })
    };

    let on_copy = {
        let text = (*report).clone();
        Callback::from(move |_: MouseEvent| {
            if let (Some(text), Some(window)) = (text.as_ref(), web_sys::window()) {
                let _ = window.navigator().clipboard().write_text(text);
            }
        })
    };

    html! {
        <main class="page panic-page">
            <div class="panic-container">
                <h1>{ "Something broke" }</h1>
                <p class="panic-description">
                    { "The page hit an unexpected error and had to stop." }
                </p>

                if let Some(text) = &*report {
                    <div class="panic-info-box">
                        <h2>{ "Error report" }</h2>
                        <pre class="panic-details">{ text }</pre>
                        <div class="panic-actions">
                            <button onclick={on_copy} class="btn-outline">{ "Copy" }</button>
                            <button onclick={on_clear} class="btn-outline">{ "Clear report" }</button>
                        </div>
                    </div>
                } else {
                    <p class="panic-cleared">{ "No error report is stored." }</p>
                }

                <Link<Route> to={Route::Home} classes="btn-primary">
                    { "Back to the portfolio" }
                </Link<Route>>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_report_includes_location() {
        let report = panic_report("boom", Some("src/app.rs:1:2".to_string()));
        assert_eq!(report, "boom\n\nLocation: src/app.rs:1:2");
    }

    #[wasm_bindgen_test]
    fn test_report_without_location() {
        assert!(panic_report("boom", None).ends_with("unknown location"));
    }
}
