//! Text rendering of the pages: card grids, pagination controls, and the
//! loading / failure / empty states.

use std::time::SystemTime;

use chrono::{DateTime, Local};
use postboard_core::{
    CardContent, LoadPhase, PostCardView, PostsViewModel, UserCardView, UsersViewModel,
};

use crate::ui::{Button, ButtonShape, ButtonSize, Card};

/// The three static navigation targets.
pub fn header() -> String {
    "== Postboard ==  home | about | posts | users  (q quits)".to_string()
}

pub fn home(cards: &[CardContent]) -> String {
    let mut out = String::from("Welcome to Postboard\n\n");
    for card in cards {
        out.push_str(&Card::new(card.title.clone(), card.content.clone()).render());
        out.push('\n');
    }
    out
}

/// Button showcase, one per size and shape class.
pub fn about() -> String {
    let mut out = String::from("About Us\n\nButton examples:\n");
    let combos = [
        (ButtonSize::Small, ButtonShape::RoundedSm, "Small Button"),
        (ButtonSize::Medium, ButtonShape::RoundedFull, "Medium Button"),
        (ButtonSize::Large, ButtonShape::RoundedMd, "Large Button"),
    ];
    for (size, shape, label) in combos {
        out.push_str("  ");
        out.push_str(&Button::new(label, size, shape).render());
        out.push('\n');
    }
    out
}

pub fn posts(view: &PostsViewModel) -> String {
    match &view.load {
        LoadPhase::Idle | LoadPhase::Loading => "Loading posts...\n".to_string(),
        LoadPhase::Failed(message) => {
            let retry = Button::new("Try Again", ButtonSize::Small, ButtonShape::RoundedMd);
            format!("Error Loading Posts\n{message}\n{} (press r)\n", retry.render())
        }
        LoadPhase::Loaded if view.cards.is_empty() => {
            let refresh = Button::new("Refresh Posts", ButtonSize::Medium, ButtonShape::RoundedMd);
            format!(
                "No posts found\nThere are currently no posts to display.\n{} (press r)\n",
                refresh.render()
            )
        }
        LoadPhase::Loaded => {
            let mut out = String::from("Blog Posts\n\n");
            for card in &view.cards {
                out.push_str(&post_card(card));
                out.push('\n');
            }
            out.push_str(&pagination_row(view));
            if let Some(summary) = &view.summary {
                out.push_str(&format!(
                    "Showing {}-{} of {} posts\n",
                    summary.first, summary.last, summary.total
                ));
            }
            out
        }
    }
}

fn post_card(card: &PostCardView) -> String {
    let header = format!(
        "({}|{}) {} - {}",
        card.avatar.0, card.author_label, card.post_label, card.title
    );
    format!("{}\n{}", header, Card::new(card.title.clone(), card.preview.clone()).render())
}

fn pagination_row(view: &PostsViewModel) -> String {
    if view.pagination.total_pages <= 1 {
        return String::new();
    }
    let mut row = Vec::new();
    row.push(
        Button::new("Previous", ButtonSize::Small, ButtonShape::RoundedMd)
            .enabled(view.pagination.prev_enabled)
            .render(),
    );
    for page in &view.pagination.window {
        let label = if *page == view.pagination.current_page {
            format!("*{page}*")
        } else {
            page.to_string()
        };
        row.push(Button::new(label, ButtonSize::Small, ButtonShape::RoundedMd).render());
    }
    row.push(
        Button::new("Next", ButtonSize::Small, ButtonShape::RoundedMd)
            .enabled(view.pagination.next_enabled)
            .render(),
    );
    format!("{}\n", row.join(" "))
}

pub fn users(view: &UsersViewModel, fetched_at: Option<SystemTime>) -> String {
    if view.cards.is_empty() {
        return "No users found\nThere are currently no users to display.\n".to_string();
    }
    let mut out = String::from("Users Page\n\n");
    for card in &view.cards {
        out.push_str(&user_card(card));
        out.push('\n');
    }
    out.push_str(&format!(
        "Community Statistics: {} users, {} companies, {} cities, {} with websites\n",
        view.stats.total_users, view.stats.companies, view.stats.cities, view.stats.with_websites
    ));
    if let Some(fetched_at) = fetched_at {
        let stamp: DateTime<Local> = fetched_at.into();
        out.push_str(&format!(
            "Last revalidated {}\n",
            stamp.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    out
}

fn user_card(card: &UserCardView) -> String {
    format!(
        "({}|{}) {} {}\n  {} | {} | {}\n  {} | {}\n",
        card.avatar.0,
        card.initials,
        card.name,
        card.handle,
        card.email,
        card.phone,
        card.website_url,
        card.city_line,
        card.company_line,
    )
}
