use std::collections::HashSet;

use crate::avatar::{avatar_color, initials, AvatarColor};
use crate::pagination::{page_window, PageSlice};
use crate::preview::{truncate_preview, MAX_PREVIEW_CHARS};
use crate::records::{PostRecord, UserRecord};
use crate::state::LoadPhase;

/// Pagination controls for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationView {
    /// Page-number controls to render, at most five.
    pub window: Vec<u32>,
    pub current_page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// "Showing X-Y of N" line under the grid; 1-based display indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCardView {
    pub id: u64,
    pub title: String,
    /// Content truncated for preview.
    pub preview: String,
    pub author_label: String,
    pub post_label: String,
    pub avatar: AvatarColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostsViewModel {
    pub load: LoadPhase,
    /// Cards for the current page only.
    pub cards: Vec<PostCardView>,
    pub pagination: PaginationView,
    pub summary: Option<RangeSummary>,
}

impl PostsViewModel {
    pub(crate) fn build(
        posts: &[PostRecord],
        load: &LoadPhase,
        current_page: u32,
        page_size: u32,
    ) -> Self {
        let slice = PageSlice::compute(posts.len(), current_page, page_size);
        let cards = posts[slice.start..slice.end]
            .iter()
            .map(post_card)
            .collect();
        let pagination = PaginationView {
            window: page_window(slice.total_pages, current_page),
            current_page,
            total_pages: slice.total_pages,
            prev_enabled: current_page > 1,
            next_enabled: current_page < slice.total_pages,
        };
        let summary = if slice.is_empty() {
            None
        } else {
            Some(RangeSummary {
                first: slice.start + 1,
                last: slice.end,
                total: posts.len(),
            })
        };
        Self {
            load: load.clone(),
            cards,
            pagination,
            summary,
        }
    }
}

fn post_card(post: &PostRecord) -> PostCardView {
    PostCardView {
        id: post.id,
        title: post.title.clone(),
        preview: truncate_preview(&post.content, MAX_PREVIEW_CHARS),
        author_label: format!("User {}", post.owner_id),
        post_label: format!("Post #{}", post.id),
        avatar: avatar_color(post.owner_id),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCardView {
    pub id: u64,
    pub name: String,
    /// "@username" handle shown under the name.
    pub handle: String,
    pub email: String,
    pub phone: String,
    /// Website with a scheme prepended when the raw value has none.
    pub website_url: String,
    pub city_line: String,
    pub company_line: String,
    pub initials: String,
    pub avatar: AvatarColor,
}

/// Community statistics shown on the users page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommunityStats {
    pub total_users: usize,
    pub companies: usize,
    pub cities: usize,
    pub with_websites: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsersViewModel {
    pub cards: Vec<UserCardView>,
    pub stats: CommunityStats,
}

/// Pure mapping from the users collection to its page view.
pub fn users_view(users: &[UserRecord]) -> UsersViewModel {
    let cards = users.iter().map(user_card).collect();
    let companies: HashSet<&str> = users.iter().map(|u| u.company.name.as_str()).collect();
    let cities: HashSet<&str> = users.iter().map(|u| u.address.city.as_str()).collect();
    let stats = CommunityStats {
        total_users: users.len(),
        companies: companies.len(),
        cities: cities.len(),
        with_websites: users.iter().filter(|u| !u.website.is_empty()).count(),
    };
    UsersViewModel { cards, stats }
}

fn user_card(user: &UserRecord) -> UserCardView {
    UserCardView {
        id: user.id,
        name: user.name.clone(),
        handle: format!("@{}", user.username),
        email: user.email.clone(),
        phone: user.phone.clone(),
        website_url: format_website(&user.website),
        city_line: format!("{}, {}", user.address.city, user.address.zipcode),
        company_line: user.company.name.clone(),
        initials: initials(&user.name),
        avatar: avatar_color(user.id),
    }
}

fn format_website(website: &str) -> String {
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_string()
    } else {
        format!("https://{website}")
    }
}
