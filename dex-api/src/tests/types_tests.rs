use super::*;

const PIKACHU: &str = r#"{
    "id": 25,
    "name": "pikachu",
    "height": 4,
    "weight": 60,
    "base_experience": 112,
    "sprites": {
        "front_default": "https://example.test/sprites/25.png",
        "other": {
            "official-artwork": {
                "front_default": "https://example.test/artwork/25.png"
            },
            "home": { "front_default": null }
        }
    },
    "types": [
        { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
    ],
    "abilities": [
        { "ability": { "name": "static", "url": "" }, "is_hidden": false, "slot": 1 },
        { "ability": { "name": "lightning-rod", "url": "" }, "is_hidden": true, "slot": 3 }
    ],
    "stats": [
        { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "" } },
        { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "" } }
    ]
}"#;

fn pikachu() -> RawEntry {
    serde_json::from_str(PIKACHU).unwrap()
}

#[test]
fn detail_keeps_upstream_order() {
    let detail = pikachu().into_detail();
    assert_eq!(detail.id, 25);
    assert_eq!(detail.name, "pikachu");
    assert_eq!(detail.height, 4);
    assert_eq!(detail.weight, 60);
    assert_eq!(detail.categories, vec!["electric"]);
    assert_eq!(detail.abilities, vec!["static", "lightning-rod"]);
    assert_eq!(
        detail.stats,
        vec![
            Stat { name: "hp".into(), value: 35 },
            Stat { name: "attack".into(), value: 55 },
        ]
    );
}

#[test]
fn prefers_official_artwork() {
    assert_eq!(pikachu().sprites.best_image(), "https://example.test/artwork/25.png");
}

#[test]
fn falls_back_to_default_sprite() {
    let mut entry = pikachu();
    entry.sprites.other = None;
    assert_eq!(entry.sprites.best_image(), "https://example.test/sprites/25.png");
}

#[test]
fn empty_artwork_string_counts_as_missing() {
    let mut entry = pikachu();
    entry.sprites.other = Some(OtherSprites {
        official_artwork: Some(Artwork {
            front_default: Some(String::new()),
        }),
    });
    assert_eq!(entry.sprites.best_image(), "https://example.test/sprites/25.png");
}

#[test]
fn falls_back_to_placeholder() {
    let entry: RawEntry =
        serde_json::from_str(r#"{"id": 10001, "name": "deoxys-attack", "sprites": {"front_default": null}}"#)
            .unwrap();
    let summary = entry.into_summary();
    assert_eq!(summary.image_url, PLACEHOLDER_IMAGE);
    assert!(summary.categories.is_empty());
}

#[test]
fn categories_sorted_by_slot() {
    let entry: RawEntry = serde_json::from_str(
        r#"{
            "id": 6, "name": "charizard",
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "" } },
                { "slot": 1, "type": { "name": "fire", "url": "" } }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(entry.category_names(), vec!["fire", "flying"]);
}

#[test]
fn summary_matches_detail_subset() {
    let detail = pikachu().into_detail();
    let summary = pikachu().into_summary();
    assert_eq!(summary.id, detail.id);
    assert_eq!(summary.name, detail.name);
    assert_eq!(summary.image_url, detail.image_url);
    assert_eq!(summary.categories, detail.categories);
}

#[test]
fn category_response_parses_membership() {
    let response: CategoryResponse = serde_json::from_str(
        r#"{
            "id": 10, "name": "fire",
            "pokemon": [
                { "slot": 1, "pokemon": { "name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/" } },
                { "slot": 1, "pokemon": { "name": "vulpix", "url": "https://pokeapi.co/api/v2/pokemon/37/" } }
            ]
        }"#,
    )
    .unwrap();
    let names: Vec<_> = response.pokemon.iter().map(|m| m.pokemon.name.as_str()).collect();
    assert_eq!(names, vec!["charmander", "vulpix"]);
}
