use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use passforge_core::{CharClass, AMBIGUOUS};
use passforge_generate::{generate_password, ClassRule, GenerationError, GenerationRequest};

fn count_class(password: &str, class: CharClass) -> usize {
    password.chars().filter(|c| class.contains(*c)).count()
}

#[test]
fn output_has_exact_length_and_meets_quotas() {
    let request = GenerationRequest {
        length: 20,
        lowercase: ClassRule::on(3),
        uppercase: ClassRule::on(2),
        digits: ClassRule::on(4),
        special: ClassRule::on(2),
        exclude_ambiguous: false,
    };

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let password = generate_password(&request, &mut rng).expect("valid request");
        assert_eq!(password.chars().count(), 20);
        assert!(count_class(&password, CharClass::Lowercase) >= 3);
        assert!(count_class(&password, CharClass::Uppercase) >= 2);
        assert!(count_class(&password, CharClass::Digits) >= 4);
        assert!(count_class(&password, CharClass::Special) >= 2);
    }
}

#[test]
fn excluding_ambiguous_removes_ambiguous_characters() {
    let request = GenerationRequest {
        exclude_ambiguous: true,
        ..GenerationRequest::default()
    };

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let password = generate_password(&request, &mut rng).expect("valid request");
        assert!(password.chars().all(|c| !AMBIGUOUS.contains(c)));
    }
}

#[test]
fn quotas_equal_to_length_leave_no_filler() {
    let request = GenerationRequest {
        length: 8,
        lowercase: ClassRule::on(4),
        uppercase: ClassRule::off(),
        digits: ClassRule::on(4),
        special: ClassRule::off(),
        exclude_ambiguous: false,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let password = generate_password(&request, &mut rng).expect("valid request");
    assert_eq!(password.chars().count(), 8);
    assert_eq!(count_class(&password, CharClass::Lowercase), 4);
    assert_eq!(count_class(&password, CharClass::Digits), 4);
}

#[test]
fn disabled_classes_never_appear_when_disjoint() {
    let request = GenerationRequest {
        length: 16,
        lowercase: ClassRule::on(1),
        uppercase: ClassRule::off(),
        digits: ClassRule::off(),
        special: ClassRule::off(),
        exclude_ambiguous: false,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let password = generate_password(&request, &mut rng).expect("valid request");
    assert!(password.chars().all(|c| CharClass::Lowercase.contains(c)));
}

#[test]
fn rejects_length_below_four() {
    let request = GenerationRequest {
        length: 3,
        ..GenerationRequest::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = generate_password(&request, &mut rng);
    assert!(matches!(result, Err(GenerationError::InvalidRequest(_))));
}

#[test]
fn rejects_request_with_no_classes() {
    let request = GenerationRequest {
        length: 12,
        lowercase: ClassRule::off(),
        uppercase: ClassRule::off(),
        digits: ClassRule::off(),
        special: ClassRule::off(),
        exclude_ambiguous: false,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = generate_password(&request, &mut rng);
    assert!(matches!(result, Err(GenerationError::InvalidRequest(_))));
}

#[test]
fn rejects_quotas_exceeding_length() {
    let request = GenerationRequest {
        length: 6,
        lowercase: ClassRule::on(4),
        uppercase: ClassRule::on(4),
        digits: ClassRule::off(),
        special: ClassRule::off(),
        exclude_ambiguous: false,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = generate_password(&request, &mut rng);
    assert!(matches!(result, Err(GenerationError::InvalidRequest(_))));
}
