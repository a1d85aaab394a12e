use super::{heading, mount_loader, notice_for, section};
use crate::router::Tool;
use crate::tools::Screen;
use crate::tools::news::NewsItem;
use crate::ui::components::{ButtonSize, ButtonVariant, card, card_content, icons, link_button};
use crate::ui::escape;

fn article(item: &NewsItem) -> String {
    let body = format!(
        r#"<p class="text-textMuted">{excerpt}</p>{link}"#,
        excerpt = escape(&item.excerpt_preview()),
        link = link_button(
            &item.link,
            &format!("Visitar noticia completa {}", icons::external_link("ml-2")),
            ButtonVariant::Primary,
            ButtonSize::Md,
            true,
        ),
    );
    card(
        "news-item hover:shadow-lg transition-shadow",
        &format!(
            r#"<div class="flex flex-col space-y-1.5 p-6"><h3 class="text-xl font-semibold">{}</h3><p class="text-sm text-textMuted">{}</p></div>{}"#,
            escape(&item.title()),
            escape(&item.date_label()),
            card_content("space-y-4", &body)
        ),
    )
}

#[must_use]
pub fn render(screen: &Screen<Vec<NewsItem>>, per_page: u32) -> String {
    let body = if screen.loading() {
        mount_loader(Tool::News, screen)
    } else {
        let articles: String = screen
            .result()
            .map(|items| items.iter().map(article).collect())
            .unwrap_or_default();
        format!(
            r#"{}<div class="space-y-4">{articles}</div>"#,
            notice_for(screen)
        )
    };
    section(
        Tool::News,
        &format!(
            "{}{body}",
            heading(
                "WordPress News",
                &format!("Últimas {per_page} noticias de WordPress.org")
            )
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::news::NOTICES;

    #[test]
    fn test_articles_are_escaped() {
        let mut screen = Screen::awaiting_mount();
        screen.begin_mount().unwrap();
        screen.finish(
            Ok(vec![NewsItem {
                id: 1,
                title_html: "Tips &amp; &lt;tricks&gt;".to_string(),
                excerpt_html: "<p>Hello</p>".to_string(),
                link: "https://wordpress.org/news/x/".to_string(),
                date: "2026-10-14T18:30:00".to_string(),
            }]),
            &NOTICES,
        );
        let html = render(&screen, 3);
        assert!(html.contains("Tips &amp; &lt;tricks&gt;"));
        assert!(html.contains("Hello..."));
        assert!(html.contains("14 de octubre de 2026"));
        assert!(html.contains("Últimas 3 noticias de WordPress.org"));
    }
}
