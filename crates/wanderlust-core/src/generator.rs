//! Itinerary and packing list generation.
//!
//! Everything here is template filling: a fixed three-day schedule and a
//! fixed set of packing items, specialised by the destination's interest
//! tags. No I/O, no randomness.
//!
//! # Default values
//!
//! | Slot                            | Source                        | Default                        |
//! |---------------------------------|-------------------------------|--------------------------------|
//! | Day 2 main activity type        | destination's first interest  | [`DEFAULT_MAIN_INTEREST`]      |
//! | Quick trip day 2 activity type  | first selected interest       | [`DEFAULT_MAIN_INTEREST`]      |
//! | Quick trip day 3 activity type  | second selected interest      | [`DEFAULT_SECONDARY_INTEREST`] |

use crate::models::{
    Activity, Day, Destination, InterestSelection, InterestTag, NewItinerary, PackingChecklist,
    PackingListItem,
};

/// Activity type used when no interest is available for the main activity.
pub const DEFAULT_MAIN_INTEREST: &str = "adventure";

/// Activity type used when no second interest is available.
pub const DEFAULT_SECONDARY_INTEREST: &str = "cultural";

pub const LOGISTICS: &str = "logistics";
pub const CULTURAL: &str = "cultural";
pub const SCENIC: &str = "scenic";

static BASE_ITEMS: [(&str, &str); 4] = [
    ("Passport and travel documents", "Documents"),
    ("Camera and extra batteries", "Electronics"),
    ("First aid kit", "Health"),
    ("Local currency", "Money"),
];

/// Interest-triggered item groups, in the order they are appended.
static INTEREST_ITEMS: [(InterestTag, &[(&str, &str)]); 3] = [
    (
        InterestTag::Hiking,
        &[
            ("Hiking boots", "Footwear"),
            ("Backpack", "Gear"),
            ("Water bottle", "Gear"),
        ],
    ),
    (
        InterestTag::Beaches,
        &[
            ("Swimwear", "Clothing"),
            ("Sunscreen", "Health"),
            ("Beach towel", "Accessories"),
        ],
    ),
    (
        InterestTag::Cultural,
        &[
            ("Modest clothing", "Clothing"),
            ("Comfortable walking shoes", "Footwear"),
        ],
    ),
];

static QUICK_PACKING_LIST: [&str; 6] = [
    "Comfortable hiking boots",
    "Weather-appropriate clothing",
    "Camera and extra batteries",
    "First aid kit",
    "Local currency",
    "Travel documents",
];

/// Interest that drives the destination's main adventure day.
pub fn main_interest(destination: &Destination) -> &str {
    destination
        .interests
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_MAIN_INTEREST)
}

/// Builds the three-day template for a destination.
///
/// Day 1 is arrival and orientation, day 2 the main adventure typed by
/// [`main_interest`], day 3 cultural immersion and departure.
///
/// # Examples
///
/// ```rust
/// use wanderlust_core::{generator::generate_itinerary, models::Destination};
///
/// let destination = Destination {
///     id: "1".to_string(),
///     name: "Zermatt".to_string(),
///     country: "Switzerland".to_string(),
///     description: String::new(),
///     hero_image: String::new(),
///     difficulty: "Moderate".to_string(),
///     best_months: vec![],
///     interests: vec!["hiking".to_string()],
///     created: None,
/// };
///
/// let days = generate_itinerary(&destination);
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[1].activities[0].kind, "hiking");
/// assert_eq!(days[1].activities[0].activity, "hiking adventure");
/// ```
pub fn generate_itinerary(destination: &Destination) -> Vec<Day> {
    let main = main_interest(destination);

    vec![
        Day {
            day: 1,
            title: Some("Arrival & Orientation".to_string()),
            activities: vec![
                Activity::new("09:00", "Airport pickup and check-in", LOGISTICS),
                Activity::new("14:00", "Local orientation walk", CULTURAL),
                Activity::new("18:00", "Welcome dinner at local restaurant", CULTURAL),
            ],
        },
        Day {
            day: 2,
            title: Some("Main Adventure".to_string()),
            activities: vec![
                Activity::new("08:00", format!("{main} adventure"), main),
                Activity::new("12:00", "Local lunch break", CULTURAL),
                Activity::new("15:00", "Explore hidden gems", CULTURAL),
                Activity::new("19:00", "Sunset viewing", SCENIC),
            ],
        },
        Day {
            day: 3,
            title: Some("Cultural Immersion".to_string()),
            activities: vec![
                Activity::new("09:00", "Local market visit", CULTURAL),
                Activity::new("13:00", "Traditional cooking class", CULTURAL),
                Activity::new("16:00", "Departure preparation", LOGISTICS),
            ],
        },
    ]
}

/// Builds the packing list for a destination.
///
/// Base items come first, then the hiking, beaches and cultural groups for
/// each of those tags the destination carries. Every item starts unchecked.
pub fn generate_packing_list(destination: &Destination) -> Vec<PackingListItem> {
    let interest_items = INTEREST_ITEMS
        .iter()
        .filter(|(tag, _)| destination.has_interest(tag.as_str()))
        .flat_map(|(_, items)| items.iter());

    BASE_ITEMS
        .iter()
        .chain(interest_items)
        .map(|(item, category)| PackingListItem::new(item, category))
        .collect()
}

/// Draft saved by the detail view's "create trip" action.
pub fn itinerary_draft(destination: &Destination) -> NewItinerary {
    NewItinerary {
        destination_id: destination.id.clone(),
        days: generate_itinerary(destination),
        packing_list: PackingChecklist::new(generate_packing_list(destination)).labels(),
    }
}

/// Draft saved by the discover view's quick itinerary action.
///
/// Days are untitled and typed by the user's selection rather than the
/// destination's own interests; the packing list is a fixed generic one.
pub fn quick_itinerary(destination: &Destination, selection: &InterestSelection) -> NewItinerary {
    let main = selection.first().unwrap_or(DEFAULT_MAIN_INTEREST);
    let secondary = selection.second().unwrap_or(DEFAULT_SECONDARY_INTEREST);

    let days = vec![
        Day {
            day: 1,
            title: None,
            activities: vec![
                Activity::new("09:00", "Arrival and check-in", LOGISTICS),
                Activity::new("14:00", "Local orientation walk", CULTURAL),
                Activity::new("18:00", "Traditional dinner", CULTURAL),
            ],
        },
        Day {
            day: 2,
            title: None,
            activities: vec![
                Activity::new("08:00", "Main adventure activity", main),
                Activity::new("12:00", "Local lunch", CULTURAL),
                Activity::new("15:00", "Explore hidden gems", CULTURAL),
            ],
        },
        Day {
            day: 3,
            title: None,
            activities: vec![
                Activity::new("09:00", "Secondary activity", secondary),
                Activity::new("13:00", "Farewell lunch", CULTURAL),
                Activity::new("16:00", "Departure preparation", LOGISTICS),
            ],
        },
    ];

    NewItinerary {
        destination_id: destination.id.clone(),
        days,
        packing_list: QUICK_PACKING_LIST.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination_with(interests: &[&str]) -> Destination {
        Destination {
            id: "d1".to_string(),
            name: "Test".to_string(),
            country: "Testland".to_string(),
            description: String::new(),
            hero_image: String::new(),
            difficulty: "Easy".to_string(),
            best_months: Vec::new(),
            interests: interests.iter().map(|t| t.to_string()).collect(),
            created: None,
        }
    }

    fn labels(items: &[PackingListItem]) -> Vec<&str> {
        items.iter().map(|i| i.item.as_str()).collect()
    }

    #[test]
    fn test_hiking_packing_list() {
        let items = generate_packing_list(&destination_with(&["hiking"]));
        assert_eq!(
            labels(&items),
            vec![
                "Passport and travel documents",
                "Camera and extra batteries",
                "First aid kit",
                "Local currency",
                "Hiking boots",
                "Backpack",
                "Water bottle",
            ]
        );
        assert!(items.iter().all(|i| !i.checked));
        assert_eq!(items[4].category, "Footwear");
    }

    #[test]
    fn test_beach_group_precedes_cultural_group() {
        // Tag order on the destination does not affect group order
        let items = generate_packing_list(&destination_with(&["cultural", "beaches"]));
        assert_eq!(items.len(), 9);
        assert_eq!(
            labels(&items)[4..],
            [
                "Swimwear",
                "Sunscreen",
                "Beach towel",
                "Modest clothing",
                "Comfortable walking shoes",
            ]
        );
    }

    #[test]
    fn test_untriggering_tags_add_nothing() {
        let items = generate_packing_list(&destination_with(&["wildlife", "history", "surfing"]));
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_all_groups() {
        let items = generate_packing_list(&destination_with(&["beaches", "hiking", "cultural"]));
        assert_eq!(items.len(), 12);
        assert_eq!(items[4].item, "Hiking boots");
        assert_eq!(items[7].item, "Swimwear");
        assert_eq!(items[10].item, "Modest clothing");
    }

    #[test]
    fn test_itinerary_template_shape() {
        let days = generate_itinerary(&destination_with(&["beaches", "cultural"]));
        assert_eq!(days.iter().map(|d| d.day).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(
            days.iter().map(|d| d.activities.len()).collect::<Vec<_>>(),
            vec![3, 4, 3]
        );
        assert_eq!(days[0].title.as_deref(), Some("Arrival & Orientation"));
        assert_eq!(days[1].activities[0].kind, "beaches");
        assert_eq!(days[1].activities[3].kind, SCENIC);
        assert_eq!(days[2].activities[2].activity, "Departure preparation");
    }

    #[test]
    fn test_itinerary_falls_back_to_adventure() {
        let days = generate_itinerary(&destination_with(&[]));
        assert_eq!(days[1].activities[0].kind, DEFAULT_MAIN_INTEREST);
        assert_eq!(days[1].activities[0].activity, "adventure adventure");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let destination = destination_with(&["hiking", "cultural"]);
        assert_eq!(generate_itinerary(&destination), generate_itinerary(&destination));
        assert_eq!(
            generate_packing_list(&destination),
            generate_packing_list(&destination)
        );
    }

    #[test]
    fn test_itinerary_draft_stores_labels() {
        let draft = itinerary_draft(&destination_with(&["hiking"]));
        assert_eq!(draft.destination_id, "d1");
        assert_eq!(draft.days.len(), 3);
        assert_eq!(draft.packing_list.len(), 7);
        assert_eq!(draft.packing_list[6], "Water bottle");
    }

    #[test]
    fn test_quick_itinerary_uses_selection() {
        let selection: InterestSelection = ["wildlife", "history"].into_iter().collect();
        let draft = quick_itinerary(&destination_with(&["beaches"]), &selection);
        assert_eq!(draft.days[1].activities[0].kind, "wildlife");
        assert_eq!(draft.days[2].activities[0].kind, "history");
        assert!(draft.days.iter().all(|d| d.title.is_none()));
        assert_eq!(draft.packing_list.len(), 6);
    }

    #[test]
    fn test_quick_itinerary_defaults() {
        let draft = quick_itinerary(&destination_with(&["beaches"]), &InterestSelection::new());
        assert_eq!(draft.days[1].activities[0].kind, DEFAULT_MAIN_INTEREST);
        assert_eq!(draft.days[2].activities[0].kind, DEFAULT_SECONDARY_INTEREST);
    }
}
