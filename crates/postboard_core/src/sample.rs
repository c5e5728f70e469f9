use crate::records::CardContent;

/// Static sample cards for the home page. Passed into the home view at
/// construction instead of living as implicit global state.
const SAMPLE_CARDS: [(&str, &str); 5] = [
    (
        "Mobile App Development",
        "Create powerful mobile applications for iOS and Android applications. \
         Our stack are React Native and Swift for cross-platform development.",
    ),
    (
        "Web App Development",
        "Build modern, responsive websites using the latest technologies and \
         best practices. Our development approach focuses on performance, \
         accessibility, and user experience.",
    ),
    (
        "Cloud Solutions",
        "Deploy and scale your applications with cloud infrastructure. We \
         provide expertise in AWS, Azure, and Google Cloud Platform services.",
    ),
    (
        "UI/UX Design",
        "Transform your data into actionable insights with advanced analytics \
         and machine learning. We help businesses make data-driven decisions.",
    ),
    (
        "Digital Marketing",
        "Grow your online presence with strategic digital marketing campaigns. \
         Our services include SEO, social media marketing, and content strategy.",
    ),
];

pub fn sample_cards() -> Vec<CardContent> {
    SAMPLE_CARDS
        .iter()
        .map(|(title, content)| CardContent {
            title: (*title).to_string(),
            content: (*content).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sample_cards;

    #[test]
    fn sample_table_has_five_cards_with_content() {
        let cards = sample_cards();
        assert_eq!(cards.len(), 5);
        assert!(cards.iter().all(|card| !card.title.is_empty()));
        assert!(cards.iter().all(|card| !card.content.is_empty()));
    }
}
