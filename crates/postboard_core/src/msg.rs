#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Posts page was opened; kicks off the initial fetch.
    PostsOpened,
    /// User clicked the manual "Refresh Posts" control.
    RefreshClicked,
    /// User clicked "Try Again" on the failure banner.
    RetryClicked,
    /// User clicked a numbered page control.
    PageClicked(u32),
    /// User clicked the Previous control.
    PrevClicked,
    /// User clicked the Next control.
    NextClicked,
    /// Engine completion for a posts fetch issued under `generation`.
    FetchCompleted {
        generation: u64,
        result: Result<Vec<crate::PostRecord>, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
