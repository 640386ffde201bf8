use crate::domain::model::{RollOutcome, RollSpec};
use rand::Rng;

/// Roll the dice described by `spec` with a fresh thread-local generator.
pub fn roll_dice(spec: &RollSpec) -> RollOutcome {
    roll_with(spec, &mut rand::thread_rng())
}

/// Roll with a caller-supplied generator.
pub fn roll_with<R: Rng>(spec: &RollSpec, rng: &mut R) -> RollOutcome {
    let rolls: Vec<u32> = (0..spec.count())
        .map(|_| rng.gen_range(1..=spec.sides()))
        .collect();

    tracing::debug!(notation = %spec, ?rolls, "🎲 rolled dice");
    RollOutcome::new(rolls, spec.modifier(), spec.to_string())
}
