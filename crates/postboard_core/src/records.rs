/// One post as displayed by the list components.
///
/// Records are immutable once fetched; the whole collection is replaced
/// wholesale on every successful fetch, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub owner_id: u64,
}

/// One user as displayed by the user cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Static card content for the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub title: String,
    pub content: String,
}
