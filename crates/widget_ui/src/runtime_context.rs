//! Overlay runtime provider and context lookup.

use leptos::*;
use overlay_host::OverlayHostServices;
use overlay_host_web::build_overlay_host;
use overlay_runtime::OverlayRuntime;

thread_local! {
    static BROWSER_RUNTIME: OverlayRuntime = OverlayRuntime::new(build_overlay_host());
}

/// Provides an [`OverlayRuntime`] built on `host` to descendant widgets and returns it.
pub fn provide_overlay_runtime(host: OverlayHostServices) -> OverlayRuntime {
    let runtime = OverlayRuntime::new(host);
    provide_context(runtime.clone());
    runtime
}

/// Returns the provided [`OverlayRuntime`], falling back to the shared browser runtime.
///
/// All modals without a provider share one runtime, so their body flags stay reference counted.
pub fn use_overlay_runtime() -> OverlayRuntime {
    use_context::<OverlayRuntime>().unwrap_or_else(|| BROWSER_RUNTIME.with(Clone::clone))
}

#[component]
/// Scopes descendant modals to an injected host bundle (tests, embedded documents).
pub fn OverlayProvider(
    /// Host bundle; the browser adapters are used when omitted.
    #[prop(optional)]
    host_services: Option<OverlayHostServices>,
    children: Children,
) -> impl IntoView {
    let _ = provide_overlay_runtime(host_services.unwrap_or_else(build_overlay_host));
    children().into_view()
}
