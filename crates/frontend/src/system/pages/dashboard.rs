use leptos::prelude::*;

use crate::shared::date_utils::today_long_es;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_session;

const DEFAULT_AVATAR_COLOR: &str = "#3498db";

/// Hue in `0..360` derived from `name`. Uses the classic
/// `hash = c + ((hash << 5) - hash)` string hash over UTF-16 code units,
/// with the shift done in 32-bit arithmetic, so a name keeps its colour
/// across sessions.
pub fn avatar_hue(name: &str) -> u32 {
    let mut hash: i64 = 0;
    for unit in name.encode_utf16() {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        hash = i64::from(unit) + (shifted - hash);
    }
    hash.rem_euclid(360) as u32
}

pub fn avatar_color(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_AVATAR_COLOR.to_string();
    }
    format!("hsl({}, 70%, 50%)", avatar_hue(name))
}

pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let name = Memo::new(move |_| {
        session
            .profile
            .with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default())
    });
    let today = today_long_es();

    view! {
        <PageFrame page_id="dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="dashboard__header">
                <div
                    class="dashboard__avatar"
                    style:background-color=move || name.with(|n| avatar_color(n))
                >
                    {move || name.with(|n| avatar_initial(n))}
                </div>
                <h1>"Bienvenido, " {move || name.get()}</h1>
                <div class="dashboard__info">
                    <strong>"Rol: "</strong>
                    {move || session.role().map(|r| r.code()).unwrap_or_default()}
                </div>
                <div class="dashboard__info">
                    {icon("calendar")}
                    " "
                    {today}
                </div>
            </div>
            <div class="dashboard__welcome">
                <p>"Este es tu panel de inicio."</p>
                <p>"Comienza a explorar y gestionar tus métricas de manera sencilla."</p>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_hue_small_names() {
        assert_eq!(avatar_hue("A"), 65);
        // 98 + (65 << 5) - 65 = 2113
        assert_eq!(avatar_hue("Ab"), 2113 % 360);
    }

    #[test]
    fn test_avatar_hue_is_stable_and_in_range() {
        let long = "María Fernanda de la Cruz Hernández";
        assert_eq!(avatar_hue(long), avatar_hue(long));
        assert!(avatar_hue(long) < 360);
    }

    #[test]
    fn test_avatar_color_defaults_for_empty_name() {
        assert_eq!(avatar_color(""), "#3498db");
        assert_eq!(avatar_color("A"), "hsl(65, 70%, 50%)");
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("ana"), "A");
        assert_eq!(avatar_initial("élan"), "É");
        assert_eq!(avatar_initial(""), "");
    }
}
