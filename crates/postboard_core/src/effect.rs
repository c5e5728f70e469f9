#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue a posts fetch; the completion message must echo `generation`
    /// so superseded results can be told apart from current ones.
    FetchPosts { generation: u64 },
}
