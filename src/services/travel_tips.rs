/// Money-saving tips shown alongside the itinerary. Curated per destination,
/// keyed loosely on the destination or its resolved city, with generic advice
/// for everywhere else.
pub fn money_saving_tips(destination: &str, main_city: &str) -> Vec<String> {
    let dest = destination.trim().to_lowercase();
    let city = if main_city.trim().is_empty() {
        dest.clone()
    } else {
        main_city.trim().to_lowercase()
    };
    let matches = |needle: &str| dest.contains(needle) || city.contains(needle);
    let matches_any = |needles: &[&str]| needles.iter().any(|n| matches(n));

    let tips: &[&str] = if matches("goa") {
        &[
            "Rent a scooter/bike instead of taxis - much cheaper for exploring beaches.",
            "Eat at local shacks and beachside cafes - authentic Goan food at great prices.",
            "Buy alcohol from local wine shops, not restaurants - save 50% on drinks.",
            "Visit free beaches like Anjuna, Baga, Calangute - no entry fees.",
            "Shop at Mapusa Market for souvenirs - better prices than tourist shops.",
            "Stay in North Goa for budget options or South Goa for quieter, affordable stays.",
        ]
    } else if matches_any(&["rajasthan", "jaipur", "udaipur", "jodhpur", "jaisalmer"]) {
        &[
            "Use auto-rickshaws or shared buses for local transport - very affordable.",
            "Eat at local dhabas and street food stalls - authentic Rajasthani cuisine at low prices.",
            "Buy handicrafts directly from artisans in markets - avoid middlemen.",
            "Visit monuments early morning or late evening - better lighting and fewer crowds.",
            "Stay in heritage havelis converted to hotels - unique experience, reasonable prices.",
            "Carry water bottles and snacks - saves money on tourist site vendors.",
        ]
    } else if matches_any(&["kerala", "kochi", "munnar", "alleppey"]) {
        &[
            "Use local buses and ferries for transport - scenic and budget-friendly.",
            "Eat at local toddy shops and small restaurants - authentic Kerala food.",
            "Book houseboats in advance during off-season - better rates.",
            "Visit spice plantations and tea gardens - many offer free tours.",
            "Stay in homestays instead of hotels - authentic experience, lower cost.",
            "Buy spices and tea directly from plantations - better quality and prices.",
        ]
    } else if matches("mumbai") {
        &[
            "Use local trains and BEST buses - cheapest way to travel Mumbai.",
            "Eat at street food stalls and local restaurants - vada pav, pav bhaji are budget-friendly.",
            "Visit free attractions like Marine Drive, Gateway of India, Juhu Beach.",
            "Shop at Colaba Causeway and Linking Road - bargain for better prices.",
            "Stay in suburbs like Andheri or Bandra - more affordable than South Mumbai.",
            "Use ride-sharing apps during off-peak hours - better rates.",
        ]
    } else if matches("delhi") {
        &[
            "Use Delhi Metro - cheapest and fastest way to travel.",
            "Eat at Old Delhi street food stalls - parathas, chaat at great prices.",
            "Visit free attractions like India Gate, Lotus Temple, Lodhi Gardens.",
            "Shop at Sarojini Nagar and Janpath - bargain for best deals.",
            "Stay in Paharganj or Karol Bagh - budget-friendly accommodation options.",
            "Use auto-rickshaws with meters or negotiate fares upfront.",
        ]
    } else if matches("dubai") {
        &[
            "Use Dubai Metro and buses - cost-effective public transport.",
            "Eat at local restaurants in Deira and Bur Dubai - authentic and affordable.",
            "Visit free attractions like Dubai Fountain, JBR Beach, Dubai Marina.",
            "Shop at Gold Souk and Spice Souk - bargain for better prices.",
            "Stay in Deira or Bur Dubai - more budget-friendly than Downtown.",
            "Book activities and tours online in advance - better deals than walk-in.",
        ]
    } else {
        &[
            "Cook light meals/snacks at accommodation if kitchen is available.",
            "Visit free/low-cost attractions and parks first.",
            "Use public transport or shared vehicles instead of private taxis.",
            "Buy local snacks and souvenirs from markets, not tourist shops.",
            "Eat at local restaurants and street food stalls - authentic and affordable.",
            "Book accommodation in advance and compare prices online.",
        ]
    };

    tips.iter().map(|t| t.to_string()).collect()
}
