//! Postboard core: pure state machine, pagination, and view-model helpers.
mod avatar;
mod effect;
mod msg;
mod pagination;
mod preview;
mod records;
mod sample;
mod state;
mod update;
mod view_model;

pub use avatar::{avatar_color, initials, AvatarColor, AVATAR_PALETTE};
pub use effect::Effect;
pub use msg::Msg;
pub use pagination::{page_window, total_pages, PageSlice, DEFAULT_PAGE_SIZE, PAGE_WINDOW};
pub use preview::{truncate_preview, MAX_PREVIEW_CHARS};
pub use records::{Address, CardContent, Company, PostRecord, UserRecord};
pub use sample::sample_cards;
pub use state::{LoadPhase, PostsState};
pub use update::update;
pub use view_model::{
    users_view, CommunityStats, PaginationView, PostCardView, PostsViewModel, RangeSummary,
    UserCardView, UsersViewModel,
};
