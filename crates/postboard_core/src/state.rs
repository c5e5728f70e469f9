use crate::pagination::{total_pages, DEFAULT_PAGE_SIZE};
use crate::records::PostRecord;
use crate::view_model::PostsViewModel;

/// Fetch lifecycle phase governing what the posts page renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Carries the human-readable failure message shown in the error banner.
    Failed(String),
}

/// State bundle for the posts listing page.
///
/// Owned exclusively by the page controller; the collection is replaced
/// wholesale on every successful fetch. `generation` guards against results
/// from superseded fetches: each issued fetch carries the generation it was
/// started under, and a completion whose generation no longer matches is
/// discarded (newest issue wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsState {
    posts: Vec<PostRecord>,
    load: LoadPhase,
    current_page: u32,
    page_size: u32,
    generation: u64,
}

impl Default for PostsState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl PostsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: u32) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            posts: Vec::new(),
            load: LoadPhase::Idle,
            current_page: 1,
            page_size,
            generation: 0,
        }
    }

    pub fn load(&self) -> &LoadPhase {
        &self.load
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.posts.len(), self.page_size)
    }

    pub fn view(&self) -> PostsViewModel {
        PostsViewModel::build(&self.posts, &self.load, self.current_page, self.page_size)
    }

    /// Starts a fetch: Loading phase, page reset to 1, new generation.
    /// Returns the generation the effect must carry.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.load = LoadPhase::Loading;
        self.current_page = 1;
        self.generation += 1;
        self.generation
    }

    /// Replaces the collection after a successful fetch and clamps the
    /// current page back into range if the collection shrank under it.
    pub(crate) fn apply_fetched(&mut self, posts: Vec<PostRecord>) {
        self.posts = posts;
        self.load = LoadPhase::Loaded;
        self.current_page = self.current_page.min(self.total_pages().max(1));
    }

    /// Records a fetch failure. The previously loaded collection stays in
    /// place, visible under the failure banner.
    pub(crate) fn apply_failed(&mut self, message: String) {
        self.load = LoadPhase::Failed(message);
    }

    /// Moves to `page` if it is a currently valid page number; out-of-range
    /// requests (including clicks on disabled controls) are no-ops.
    pub(crate) fn go_to_page(&mut self, page: u32) -> bool {
        if page >= 1 && page <= self.total_pages() && page != self.current_page {
            self.current_page = page;
            true
        } else {
            false
        }
    }
}
