/// Palette for record avatars; a record hashes into it by owner id.
pub const AVATAR_PALETTE: [&str; 8] = [
    "blue", "green", "purple", "pink", "yellow", "indigo", "red", "teal",
];

/// Avatar background color derived from a record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarColor(pub &'static str);

pub fn avatar_color(id: u64) -> AvatarColor {
    AvatarColor(AVATAR_PALETTE[(id % AVATAR_PALETTE.len() as u64) as usize])
}

/// Up to two uppercased initials from the leading words of a name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
