//! Notice banner.

use crate::tools::{Notice, NoticeVariant};
use crate::ui::escape;

#[must_use]
pub fn notice(notice: &Notice) -> String {
    let (role, classes) = match notice.variant {
        NoticeVariant::Destructive => ("alert", "border-danger bg-danger/10 text-danger"),
        NoticeVariant::Default => ("status", "border-panelBorder bg-panel text-textPrimary"),
    };
    format!(
        r#"<div role="{role}" class="notice rounded-lg border p-4 {classes}"><p class="font-semibold">{}</p><p class="text-sm">{}</p></div>"#,
        escape(notice.title),
        escape(notice.description)
    )
}
