//! `document.body` class-list adapter.

use overlay_host::DocumentRoot;

#[derive(Debug, Clone, Copy, Default)]
/// Browser document root backed by `document.body.classList`.
pub struct WebDocumentRoot;

#[cfg(target_arch = "wasm32")]
fn body_class_list() -> Result<web_sys::DomTokenList, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .map(|body| body.class_list())
        .ok_or_else(|| "document body unavailable".to_string())
}

impl DocumentRoot for WebDocumentRoot {
    fn add_class(&self, token: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            return body_class_list()?
                .add_1(token)
                .map_err(|err| format!("failed to add body class `{token}`: {err:?}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
            Err("document body unavailable".to_string())
        }
    }

    fn remove_class(&self, token: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            return body_class_list()?
                .remove_1(token)
                .map_err(|err| format!("failed to remove body class `{token}`: {err:?}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
            Err("document body unavailable".to_string())
        }
    }

    fn has_class(&self, token: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            return body_class_list()
                .map(|classes| classes.contains(token))
                .unwrap_or(false);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
            false
        }
    }
}
