use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::errors::GenerationError;
use crate::request::GenerationRequest;

/// Generate a password satisfying the per-class quotas in `request`.
///
/// The required characters for each enabled class are drawn first, the
/// remainder comes from the union pool of all enabled classes, and the
/// whole buffer is shuffled so final positions carry no class bias. When
/// the quotas sum to the full length the filler phase draws nothing and
/// the buffer is still shuffled.
pub fn generate_password(
    request: &GenerationRequest,
    rng: &mut impl Rng,
) -> Result<String, GenerationError> {
    request.validate()?;

    let mut union_pool: Vec<char> = Vec::new();
    let mut chars: Vec<char> = Vec::with_capacity(request.length);

    for class in request.enabled_classes() {
        let pool = class.usable(request.exclude_ambiguous);
        for _ in 0..request.rule(class).minimum {
            chars.push(pool[rng.random_range(0..pool.len())]);
        }
        union_pool.extend(pool);
    }

    let filler = request.length - chars.len();
    for _ in 0..filler {
        chars.push(union_pool[rng.random_range(0..union_pool.len())]);
    }

    chars.shuffle(rng);
    debug!(length = request.length, filler, "generated constrained password");
    Ok(chars.into_iter().collect())
}
