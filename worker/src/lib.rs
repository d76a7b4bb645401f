//! Server renders the page shell with the dark class already in place, so the
//! first paint matches what the client last persisted.

use darkmode_core::{Config, CookieHeader, dark_class_attribute, read_server_dark_mode};
use worker::*;

#[event(start)]
fn start() {
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        worker::console_warn!("logger already set: {}", err);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Shell,
    NotFound,
}

/// Only the page itself is rendered here, `/pkg/*` comes from the assets binding.
pub fn route(method: &Method, path: &str) -> Route {
    match (method, path) {
        (Method::Get | Method::Head, "/") => Route::Shell,
        _ => Route::NotFound,
    }
}

#[event(fetch)]
async fn fetch(req: Request, _env: Env, _ctx: Context) -> Result<Response> {
    let method = req.method();
    let path = req.path();
    if route(&method, &path) == Route::NotFound {
        log::info!("{:?} {} not found", method, path);
        return Response::error("Not Found", 404);
    }

    let header = req.headers().get("Cookie")?.unwrap_or_default();
    let config = Config::default();
    let dark = read_server_dark_mode(&CookieHeader::new(&header), &config);
    log::info!("{:?} {} dark={}", method, path, dark);
    Response::from_html(render_shell(dark, &config))
}

/// The markup the client script hydrates; `<html>` is the dark mode target.
pub fn render_shell(dark: bool, config: &Config) -> String {
    let class = dark_class_attribute(dark, config)
        .map(|class| format!(" class=\"{}\"", class))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-darkmode-target{class}>
<head>
<meta charset="utf-8">
<meta name="color-scheme" content="light dark">
<title>Dark mode</title>
<script type="module">
import init, {{ initLogging, mountDarkModeManager }} from "/pkg/darkmode_web.js";
await init();
initLogging();
mountDarkModeManager(false);
</script>
</head>
<body></body>
</html>
"#
    )
}
