#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{
        Destination, DestinationPatch, InterestSelection, InterestTag, Itinerary, ItineraryPatch,
        NewDestination, PackingChecklist, PackingListItem, Recommendation, RecommendationPatch,
    };

    fn create_test_destination() -> Destination {
        Destination {
            id: "1".to_string(),
            name: "Torres del Paine".to_string(),
            country: "Chile".to_string(),
            description: "Granite towers above glacial lakes".to_string(),
            hero_image: "https://example.com/paine.jpg".to_string(),
            difficulty: "Challenging".to_string(),
            best_months: vec!["December".to_string(), "January".to_string()],
            interests: vec!["hiking".to_string(), "wildlife".to_string(), "kayaking".to_string()],
            created: None,
        }
    }

    #[test]
    fn test_interest_tag_round_trip_strings() {
        for tag in InterestTag::ALL {
            assert_eq!(tag.as_str().parse::<InterestTag>(), Ok(tag));
        }
        assert_eq!("  Hiking ".parse::<InterestTag>(), Ok(InterestTag::Hiking));
        assert!("snorkeling".parse::<InterestTag>().is_err());
    }

    #[test]
    fn test_interest_tag_labels_and_icons() {
        assert_eq!(InterestTag::Wildlife.label(), "Wildlife");
        assert_eq!(InterestTag::History.icon(), "Castle");
        assert_eq!(InterestTag::label_for("beaches"), "Hidden Beaches");
        assert_eq!(InterestTag::label_for("kayaking"), "kayaking");
    }

    #[test]
    fn test_destination_interest_helpers_tolerate_unknown_tags() {
        let destination = create_test_destination();
        assert!(destination.has_interest("kayaking"));
        assert!(!destination.has_interest("beaches"));
        assert_eq!(
            destination.interest_tags(),
            vec![InterestTag::Hiking, InterestTag::Wildlife]
        );
    }

    #[test]
    fn test_destination_json_uses_camel_case() {
        let destination = create_test_destination();
        let json = serde_json::to_value(&destination).unwrap();
        assert_eq!(json["heroImage"], "https://example.com/paine.jpg");
        assert_eq!(json["bestMonths"][1], "January");
        assert!(json.get("created").is_none());
    }

    #[test]
    fn test_new_destination_drops_duplicate_interests() {
        let draft = NewDestination {
            name: "Hoi An".to_string(),
            interests: vec![
                "cultural".to_string(),
                "history".to_string(),
                "cultural".to_string(),
            ],
            ..Default::default()
        };
        let created = Timestamp::from_second(1_700_000_000).unwrap();
        let record = draft.into_record("42".to_string(), created);
        assert_eq!(record.id, "42");
        assert_eq!(record.interests, vec!["cultural", "history"]);
        assert_eq!(record.created, Some(created));
    }

    #[test]
    fn test_itinerary_activity_kind_serializes_as_type() {
        let json = r#"{
            "id": "5",
            "destinationId": "1",
            "days": [{"day": 1, "activities": [
                {"time": "09:00", "activity": "Check-in", "type": "logistics"}
            ]}],
            "packingList": ["Backpack"],
            "created": "2024-03-01T10:00:00Z"
        }"#;
        let itinerary: Itinerary = serde_json::from_str(json).unwrap();
        assert_eq!(itinerary.destination_id, "1");
        assert_eq!(itinerary.days[0].title, None);
        assert_eq!(itinerary.days[0].activities[0].kind, "logistics");

        let back = serde_json::to_value(&itinerary).unwrap();
        assert_eq!(back["days"][0]["activities"][0]["type"], "logistics");
    }

    #[test]
    fn test_destination_patch_only_touches_some_fields() {
        let mut destination = create_test_destination();
        let patch = DestinationPatch {
            name: Some("Paine".to_string()),
            interests: Some(vec!["hiking".to_string()]),
            ..Default::default()
        };
        let changes = patch.apply(&mut destination);

        assert_eq!(changes, vec!["name", "interests"]);
        assert_eq!(destination.name, "Paine");
        assert_eq!(destination.country, "Chile");
        assert_eq!(destination.interests, vec!["hiking"]);
        assert_eq!(destination.id, "1");
    }

    #[test]
    fn test_empty_patches_change_nothing() {
        assert!(DestinationPatch::default().is_empty());
        assert!(ItineraryPatch::default().is_empty());
        assert!(RecommendationPatch::default().is_empty());

        let mut recommendation = Recommendation {
            id: "r1".to_string(),
            destination_id: "1".to_string(),
            name: "Refugio".to_string(),
            description: "Mountain hut".to_string(),
            rating: 4.5,
            kind: "lodging".to_string(),
            created: None,
        };
        let before = recommendation.clone();
        assert!(RecommendationPatch::default()
            .apply(&mut recommendation)
            .is_empty());
        assert_eq!(recommendation, before);
    }

    #[test]
    fn test_interest_selection_toggle_keeps_order() {
        let mut selection = InterestSelection::new();
        assert!(selection.toggle("beaches"));
        assert!(selection.toggle("hiking"));
        assert_eq!(selection.first(), Some("beaches"));
        assert_eq!(selection.second(), Some("hiking"));

        assert!(!selection.toggle("beaches"));
        assert_eq!(selection.first(), Some("hiking"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_interest_selection_from_iter_dedupes() {
        let selection: InterestSelection = ["hiking", "hiking", " ", "history"].into_iter().collect();
        assert_eq!(selection.as_slice(), ["hiking", "history"]);
    }

    #[test]
    fn test_packing_checklist_grouping_and_progress() {
        let mut checklist = PackingChecklist::new(vec![
            PackingListItem::new("Swimwear", "Clothing"),
            PackingListItem::new("Sunscreen", "Health"),
            PackingListItem::new("Modest clothing", "Clothing"),
        ]);
        assert_eq!(checklist.progress_percent(), 0);

        let groups = checklist.by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Clothing");
        assert_eq!(groups[0].1[1].0, 2);
        assert_eq!(groups[1].0, "Health");

        assert!(checklist.toggle(0));
        assert!(checklist.toggle(2));
        assert_eq!(checklist.packed_count(), 2);
        assert_eq!(checklist.progress_percent(), 66);

        assert!(!checklist.toggle(0));
        assert!(!checklist.toggle(99));
        assert_eq!(checklist.packed_count(), 1);
    }

    #[test]
    fn test_empty_checklist_progress_is_zero() {
        let checklist = PackingChecklist::default();
        assert!(checklist.is_empty());
        assert_eq!(checklist.progress_percent(), 0);
    }
}
