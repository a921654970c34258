//! Document bridge.
//!
//! The page lives in the webview; everything the core needs from the live
//! DOM, or needs to write back, goes through `document::eval` here.
//! Failures are logged and the interaction is skipped.

use dioxus::document;
use flashgrid_core::{ScrollTarget, ViewportMetrics};
use serde::de::DeserializeOwned;
use serde_json::Value;

async fn run(script: String, what: &'static str) -> Option<Value> {
    match document::eval(&script).join::<Value>().await {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(?err, what, "document eval failed");
            None
        }
    }
}

async fn query<T: DeserializeOwned>(script: String, what: &'static str) -> Option<T> {
    let value = run(script, what).await?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!(%err, what, "unexpected eval result");
            None
        }
    }
}

/// Viewport width and the body's resolved horizontal padding
pub async fn read_viewport() -> Option<ViewportMetrics> {
    query(
        r#"
        const body = window.getComputedStyle(document.body);
        return {
            device_width: window.innerWidth,
            body_padding: parseFloat(body.paddingLeft) + parseFloat(body.paddingRight),
        };
        "#
        .to_string(),
        "read viewport",
    )
    .await
}

/// Rendered height of the first card's front caption, if one exists
pub async fn caption_height() -> Option<f64> {
    query::<Option<f64>>(
        r#"
        const front = document.querySelector(".card .front");
        return front ? front.offsetHeight : null;
        "#
        .to_string(),
        "caption height",
    )
    .await
    .flatten()
}

/// Set custom properties on the document root, in order
pub async fn publish(writes: Vec<(String, String)>) {
    if writes.is_empty() {
        return;
    }
    let count = writes.len();
    let payload = match serde_json::to_string(&writes) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(%err, "could not encode style writes");
            return;
        }
    };
    let script = format!(
        r#"
        const style = document.documentElement.style;
        for (const [name, value] of {payload}) {{
            style.setProperty(name, value);
        }}
        return null;
        "#
    );
    if run(script, "publish").await.is_some() {
        tracing::debug!(count, "published custom properties");
    }
}

/// Add or remove a class on `<body>`
pub async fn set_body_class(class: &str, on: bool) {
    let class = serde_json::to_string(class).unwrap_or_default();
    run(
        format!("document.body.classList.toggle({class}, {on}); return null;"),
        "body class",
    )
    .await;
}

/// Smooth-scroll to an element; a missing element is ignored
pub async fn scroll_into_view(target: &ScrollTarget) {
    let id = serde_json::to_string(target.id()).unwrap_or_default();
    run(
        format!(
            r#"
            const el = document.getElementById({id});
            if (el) el.scrollIntoView({{ behavior: "smooth" }});
            return null;
            "#
        ),
        "scroll into view",
    )
    .await;
}
