use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use passforge_core::{CharClass, WORDS};
use passforge_generate::{
    build_components, Component, GenerationError, NumberConfig, RandomCharsConfig, WordCase,
    WordConfig,
};

#[test]
fn empty_sequence_yields_empty_string() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let password = build_components(&[], &mut rng).expect("empty sequence builds");
    assert_eq!(password, "");
}

#[test]
fn text_components_append_verbatim_in_order() {
    let components = vec![
        Component::Text {
            value: "left".to_string(),
        },
        Component::Text {
            value: "-right".to_string(),
        },
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let password = build_components(&components, &mut rng).expect("builds");
    assert_eq!(password, "left-right");
}

#[test]
fn number_component_respects_range_and_padding() {
    let components = vec![Component::Number {
        config: NumberConfig::new(7, 42, 5).expect("valid config"),
    }];

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let password = build_components(&components, &mut rng).expect("builds");
        assert_eq!(password.len(), 5);
        let value: i64 = password.parse().expect("padded decimal");
        assert!((7..=42).contains(&value));
    }
}

#[test]
fn number_component_rejects_inverted_range() {
    assert!(matches!(
        NumberConfig::new(10, 1, 0),
        Err(GenerationError::InvalidRequest(_))
    ));
}

#[test]
fn number_config_parses_string_form() {
    let config = NumberConfig::from_strings("5", "900", "3").expect("parses");
    assert_eq!(config.min, 5);
    assert_eq!(config.max, 900);
    assert_eq!(config.padding, 3);

    assert!(matches!(
        NumberConfig::from_strings("five", "900", "0"),
        Err(GenerationError::Parse(_))
    ));
    assert!(matches!(
        NumberConfig::from_strings("0", "9", "-1"),
        Err(GenerationError::Parse(_))
    ));
}

#[test]
fn random_chars_draw_from_requested_pools_only() {
    let components = vec![Component::RandomChars {
        config: RandomCharsConfig {
            length: 32,
            types: vec![CharClass::Digits],
        },
    }];
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let password = build_components(&components, &mut rng).expect("builds");
    assert_eq!(password.len(), 32);
    assert!(password.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn random_chars_with_empty_type_list_appends_nothing() {
    let components = vec![Component::RandomChars {
        config: RandomCharsConfig {
            length: 8,
            types: Vec::new(),
        },
    }];
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let password = build_components(&components, &mut rng).expect("builds");
    assert_eq!(password, "");
}

#[test]
fn random_chars_type_list_parsing() {
    let config = RandomCharsConfig::from_list(6, "lowercase, digits").expect("parses");
    assert_eq!(config.types, vec![CharClass::Lowercase, CharClass::Digits]);

    assert!(matches!(
        RandomCharsConfig::from_list(6, "letters"),
        Err(GenerationError::Parse(_))
    ));
}

#[test]
fn separator_component_draws_from_candidates() {
    let options = vec!["-".to_string(), "_".to_string()];
    let components = vec![Component::Separator {
        options: options.clone(),
    }];

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let password = build_components(&components, &mut rng).expect("builds");
        assert!(options.contains(&password));
    }
}

#[test]
fn separator_component_falls_back_to_defaults() {
    let defaults = ["-", "_", ".", "!", "@", "#"];
    let components = vec![Component::Separator {
        options: Vec::new(),
    }];
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let password = build_components(&components, &mut rng).expect("builds");
    assert!(defaults.contains(&password.as_str()));
}

#[test]
fn word_component_honors_length_window_and_replacements() {
    let components = vec![Component::Word {
        config: WordConfig {
            min_length: 4,
            max_length: 6,
            case: WordCase::Lowercase,
            replacements: true,
        },
    }];

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let password = build_components(&components, &mut rng).expect("builds");
        assert!(password.len() >= 4 && password.len() <= 6);
        // Mapped letters are substituted everywhere.
        assert!(password.chars().all(|c| !"aeios".contains(c)));
    }
}

#[test]
fn word_case_flags_resolve_by_priority() {
    assert_eq!(
        WordCase::from_flags(true, true, true, true),
        WordCase::Capitalize
    );
    assert_eq!(
        WordCase::from_flags(false, true, true, true),
        WordCase::Uppercase
    );
    assert_eq!(
        WordCase::from_flags(false, false, true, true),
        WordCase::Lowercase
    );
    assert_eq!(
        WordCase::from_flags(false, false, false, true),
        WordCase::Random
    );
    assert_eq!(
        WordCase::from_flags(false, false, false, false),
        WordCase::Keep
    );
}

#[test]
fn capitalized_word_comes_from_the_corpus() {
    let components = vec![Component::Word {
        config: WordConfig {
            case: WordCase::Capitalize,
            ..WordConfig::default()
        },
    }];
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let password = build_components(&components, &mut rng).expect("builds");
    assert!(WORDS.contains(&password.to_ascii_lowercase().as_str()));
    assert!(password.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
}

#[test]
fn component_sequence_round_trips_through_json() {
    let spec = serde_json::json!([
        { "type": "word", "config": { "case": "capitalize" } },
        { "type": "separator", "options": ["-"] },
        { "type": "number", "config": { "min": 0, "max": 99, "padding": 2 } },
        { "type": "text", "value": "!" }
    ]);
    let components: Vec<Component> =
        serde_json::from_value(spec).expect("sequence deserializes");

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let password = build_components(&components, &mut rng).expect("builds");

    assert!(password.ends_with('!'));
    assert!(password.contains('-'));

    let encoded = serde_json::to_string(&components).expect("sequence serializes");
    let decoded: Vec<Component> = serde_json::from_str(&encoded).expect("round trip");
    assert_eq!(decoded, components);
}

#[test]
fn repeated_builds_over_one_sequence_are_independent() {
    let components = vec![Component::RandomChars {
        config: RandomCharsConfig::default(),
    }];
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let outputs: Vec<String> = (0..8)
        .map(|_| build_components(&components, &mut rng).expect("builds"))
        .collect();
    let distinct: std::collections::HashSet<&String> = outputs.iter().collect();
    assert!(distinct.len() > 1);
}
