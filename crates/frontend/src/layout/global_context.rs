use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Zoo units the header switcher offers.
pub const ZOO_UNITS: &[&str] = &["Safari Park Solo", "Mini Zoo Jogja"];

fn current_location() -> (String, String) {
    let Some(location) = window().map(|w| w.location()) else {
        return ("/".to_string(), String::new());
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    (normalize_path(&path), search.trim_start_matches('?').to_string())
}

/// `"/animal/"` and `"animal"` both become `"/animal"`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Splits `"/animal?page=2"` into path and query.
pub fn split_target(target: &str) -> (String, String) {
    match target.split_once('?') {
        Some((path, query)) => (normalize_path(path), query.to_string()),
        None => (normalize_path(target), String::new()),
    }
}

fn join_target(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Shell-wide state: the current route, sidebar visibility and the selected
/// zoo unit. The route is mirrored into the browser history.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub path: RwSignal<String>,
    pub query: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    pub unit: RwSignal<usize>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let (path, query) = current_location();
        Self {
            path: RwSignal::new(path),
            query: RwSignal::new(query),
            left_open: RwSignal::new(true),
            unit: RwSignal::new(0),
        }
    }

    /// Pushes a new history entry and switches the route.
    pub fn navigate(&self, target: &str) {
        let (path, query) = split_target(target);
        let same = self.path.with_untracked(|p| *p == path)
            && self.query.with_untracked(|q| *q == query);
        if same {
            return;
        }
        log::debug!("navigate: {}", join_target(&path, &query));
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(
                &JsValue::NULL,
                "",
                Some(&join_target(&path, &query)),
            );
        }
        self.query.set(query);
        self.path.set(path);
    }

    /// New history entry on the current path, e.g. a list page change.
    pub fn navigate_query(&self, query: &str) {
        let target = join_target(&self.path.get_untracked(), query);
        self.navigate(&target);
    }

    /// Follows back/forward navigation.
    pub fn init_router_integration(&self) {
        let this = *self;
        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let (path, query) = current_location();
            this.query.set(query);
            this.path.set(path);
        });
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
        }
        on_popstate.forget();
    }

    pub fn unit_name(&self) -> &'static str {
        ZOO_UNITS
            .get(self.unit.get())
            .copied()
            .unwrap_or(ZOO_UNITS[0])
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/animal/"), "/animal");
        assert_eq!(normalize_path("animal"), "/animal");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_split_target() {
        assert_eq!(
            split_target("/family?page=2&keyword=cat"),
            ("/family".to_string(), "page=2&keyword=cat".to_string())
        );
        assert_eq!(split_target("/dashboard"), ("/dashboard".to_string(), String::new()));
    }
}
