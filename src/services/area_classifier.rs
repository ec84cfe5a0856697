/// Assigns a place to a sub-area of the destination ("North Goa",
/// "South Goa") from its name and address. The day planner stays
/// destination-agnostic; per-destination knowledge lives behind this trait.
pub trait AreaClassifier {
    fn classify(&self, name: &str, address: &str) -> Option<&str>;

    /// Declared sub-areas in canonical order; grouping must not depend on the
    /// order places happen to arrive in.
    fn areas(&self) -> Vec<&str>;
}

/// Keyword-table classifier: the first area whose keyword list matches the
/// combined name + address text wins.
pub struct KeywordAreaClassifier {
    areas: Vec<(&'static str, &'static [&'static str])>,
}

impl KeywordAreaClassifier {
    pub fn new(areas: Vec<(&'static str, &'static [&'static str])>) -> Self {
        Self { areas }
    }
}

impl AreaClassifier for KeywordAreaClassifier {
    fn classify(&self, name: &str, address: &str) -> Option<&str> {
        let haystack = format!("{} {}", address.to_lowercase(), name.to_lowercase());
        self.areas
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
            .map(|(area, _)| *area)
    }

    fn areas(&self) -> Vec<&str> {
        self.areas.iter().map(|(area, _)| *area).collect()
    }
}

const NORTH_GOA: &[&str] = &[
    "north goa",
    "calangute",
    "baga",
    "anjuna",
    "candolim",
    "sinquerim",
    "arambol",
    "morjim",
    "ashwem",
    "vagator",
    "fort aguada",
    "chapora",
];

const SOUTH_GOA: &[&str] = &[
    "south goa",
    "margao",
    "colva",
    "benaulim",
    "varca",
    "cavelossim",
    "palolem",
    "agonda",
    "patnem",
    "canacona",
    "dudhsagar",
    "old goa",
];

/// The classifier for a destination, when one is known. Goa is the shipped
/// table; other destinations fall back to even distribution in the planner.
pub fn classifier_for(destination: &str) -> Option<KeywordAreaClassifier> {
    let dest = destination.to_lowercase();
    if dest.contains("goa") {
        return Some(KeywordAreaClassifier::new(vec![
            ("North Goa", NORTH_GOA),
            ("South Goa", SOUTH_GOA),
        ]));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goa_beaches_classify_north_and_south() {
        let classifier = classifier_for("Goa").unwrap();
        assert_eq!(
            classifier.classify("Baga Beach", "Baga, Goa 403516"),
            Some("North Goa")
        );
        assert_eq!(
            classifier.classify("Palolem Beach", "Canacona, Goa"),
            Some("South Goa")
        );
        assert_eq!(
            classifier.classify("Chapora Fort", "Near Vagator"),
            Some("North Goa")
        );
    }

    #[test]
    fn unknown_address_falls_through() {
        let classifier = classifier_for("Goa").unwrap();
        assert_eq!(classifier.classify("Panjim Market", "Panaji"), None);
    }

    #[test]
    fn name_alone_can_classify() {
        let classifier = classifier_for("goa, india").unwrap();
        assert_eq!(
            classifier.classify("Dudhsagar Falls Viewpoint", ""),
            Some("South Goa")
        );
    }

    #[test]
    fn no_classifier_for_unmapped_destinations() {
        assert!(classifier_for("Tokyo").is_none());
    }
}
