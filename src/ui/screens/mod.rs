//! One renderer per tool screen.
//!
//! Every screen renders to a `<section id="screen">` element; HTMX requests
//! replace that element wholesale (`hx-swap="outerHTML"`).

pub mod about;
pub mod age;
pub mod creature;
pub mod gender;
pub mod home;
pub mod news;
pub mod not_found;
pub mod universities;
pub mod weather;

use super::components::{ButtonSize, ButtonVariant, button, icons, notice, text_input};
use super::escape;
use crate::config::AppConfig;
use crate::router::Tool;
use crate::tools::{Screen, ScreenState};

/// Render whichever screen is mounted.
#[must_use]
pub fn render(screen: &ScreenState, config: &AppConfig) -> String {
    match screen {
        ScreenState::Home => home::render(),
        ScreenState::Gender(s) => gender::render(s),
        ScreenState::Age(s) => age::render(s),
        ScreenState::Universities(s) => universities::render(s),
        ScreenState::Weather(s) => weather::render(s),
        ScreenState::Creature(s) => creature::render(s),
        ScreenState::News(s) => news::render(s, config.news.per_page),
        ScreenState::About => about::render(&config.about),
    }
}

/// Wrap screen markup in the swappable section.
fn section(tool: Tool, inner: &str) -> String {
    format!(
        r#"<section id="screen" data-tool="{}" class="space-y-6">{inner}</section>"#,
        tool.slug()
    )
}

/// Page heading and subtitle.
fn heading(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="text-center space-y-2"><h1 class="text-4xl font-bold">{}</h1><p class="text-textMuted">{}</p></div>"#,
        escape(title),
        escape(subtitle)
    )
}

/// Texts for an input screen's form.
struct FormTexts {
    placeholder: &'static str,
    submit: &'static str,
}

/// Query form that posts to `/tools/{slug}`; the submit control is disabled
/// while a request is in flight.
fn search_form<T>(tool: Tool, screen: &Screen<T>, texts: &FormTexts) -> String {
    let action = format!("/tools/{}", tool.slug());
    let (label, disabled) = if screen.loading() {
        (icons::loader(""), " disabled")
    } else {
        (escape(texts.submit), "")
    };
    let submit = button(
        &label,
        ButtonVariant::Primary,
        ButtonSize::Md,
        "",
        &format!(r#"type="submit"{disabled}"#),
    );
    format!(
        r##"<form method="post" action="{action}" hx-post="{action}" hx-target="#screen" hx-swap="outerHTML" hx-disabled-elt="find button" class="flex gap-2">{input}{submit}</form>"##,
        input = text_input("query", screen.input(), texts.placeholder),
    )
}

fn notice_for<T>(screen: &Screen<T>) -> String {
    screen.notice().map(notice).unwrap_or_default()
}

/// Spinner for a screen that loads on mount.
///
/// A screen that has not requested yet triggers its fetch as soon as it is
/// swapped in; one with a request in flight polls until it settles. The
/// plain link runs the same fetch when htmx is unavailable.
fn mount_loader<T>(tool: Tool, screen: &Screen<T>) -> String {
    let url = format!("/tools/{}/load", tool.slug());
    let trigger = if screen.awaiting_request() {
        "load"
    } else {
        "load delay:1s"
    };
    format!(
        r##"<div class="flex justify-center py-12" hx-get="{url}" hx-trigger="{trigger}" hx-target="#screen" hx-swap="outerHTML" aria-busy="true"><div class="flex flex-col items-center gap-4">{spinner}<a href="{url}" class="text-sm text-textMuted underline">Cargar</a></div></div>"##,
        spinner = icons::loader("h-8 w-8 text-primary"),
    )
}
