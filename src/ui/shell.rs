//! Page shell: document head, desktop sidebar, mobile header and drawer.

use super::components::icons;
use super::escape;
use crate::config::AppConfig;
use crate::router::{Tool, ViewRouter};

const APP_TITLE: &str = "Caja de Herramientas";

fn nav_links(current: Tool) -> String {
    Tool::ALL
        .into_iter()
        .map(|tool| {
            let (state, aria) = if tool == current {
                ("bg-primary text-white", r#" aria-current="page""#)
            } else {
                ("text-textSecondary hover:text-textPrimary hover:bg-surface", "")
            };
            format!(
                r#"<a href="/tools/{}" class="block px-3 py-2 rounded-xl text-sm transition-all {state}"{aria}>{}</a>"#,
                tool.slug(),
                escape(tool.label())
            )
        })
        .collect()
}

fn drawer_toggle(open: bool) -> String {
    let (label, icon) = if open {
        ("Cerrar menú", icons::close("h-5 w-5"))
    } else {
        ("Abrir menú", icons::menu("h-5 w-5"))
    };
    format!(
        r#"<form method="post" action="/nav/drawer" hx-boost="true" hx-push-url="false"><button type="submit" class="p-2 rounded-lg hover:bg-surface" aria-label="{label}" aria-expanded="{open}">{icon}</button></form>"#
    )
}

fn drawer(router: &ViewRouter) -> String {
    if !router.drawer_open() {
        return String::new();
    }
    format!(
        r#"<div id="drawer" class="fixed inset-0 z-40 lg:hidden">
            <div class="absolute inset-0 bg-black/50"></div>
            <aside class="relative h-full w-64 bg-surfaceContainer p-4 space-y-4 shadow-lg">
                <div class="flex items-center justify-between"><span class="font-semibold">{APP_TITLE}</span>{toggle}</div>
                <nav class="space-y-1" hx-boost="true">{links}</nav>
            </aside>
        </div>"#,
        toggle = drawer_toggle(true),
        links = nav_links(router.current()),
    )
}

/// Generate the HTML shell around a rendered screen.
#[must_use]
pub fn render(router: &ViewRouter, config: &AppConfig, screen_html: &str) -> String {
    let current = router.current();
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Una colección de utilidades prácticas para tu día a día">
    <title>{title} - {APP_TITLE}</title>
    <script src="{htmx}"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-background text-textPrimary antialiased">
    <div id="app-shell" class="flex h-screen overflow-hidden">
        <aside class="hidden lg:flex lg:flex-col w-64 shrink-0 bg-surfaceContainer p-4 space-y-6">
            <a href="/tools/home" class="flex items-center gap-2 font-semibold text-lg">{wrench}<span>{APP_TITLE}</span></a>
            <nav class="space-y-1" hx-boost="true">{links}</nav>
        </aside>
        <div class="flex flex-1 flex-col overflow-hidden">
            <header class="lg:hidden sticky top-0 z-30 flex h-14 items-center justify-between bg-surfaceContainer px-4 shadow-sm">
                <a href="/tools/home" class="flex items-center gap-2 font-semibold">{wrench}<span>{APP_TITLE}</span></a>
                {toggle}
            </header>
            {drawer}
            <main id="app" class="flex-1 overflow-y-auto container mx-auto px-4 md:px-6 py-4 md:py-8 max-w-5xl">
                {screen_html}
            </main>
        </div>
    </div>
</body>
</html>"#,
        title = escape(current.label()),
        htmx = escape(&config.ui.htmx_src),
        wrench = icons::wrench("h-6 w-6 text-primary"),
        links = nav_links(current),
        toggle = drawer_toggle(router.drawer_open()),
        drawer = drawer(router),
    )
}
