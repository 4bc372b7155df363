//! Range bounds and defensive caps.

/// Most dice a single roll may request.
pub const MAX_DICE: u32 = 1000;

/// Fewest sides a die may have.
pub const MIN_SIDES: u32 = 2;

/// Most sides a die may have.
pub const MAX_SIDES: u32 = 100;

/// Most repetitions of a roll in one token; also bounds the pool sizes of
/// the pool-based systems.
pub const MAX_ROLLS: u32 = 30;

/// Explosion generations allowed before the engine declares the random
/// source broken.
pub const MAX_EXPLOSION_GENERATIONS: u32 = 50;

/// Passes an extended test may take before the engine gives up. Must stay
/// well above the expected pass count for the largest legal test (pool 1
/// against threshold 1000 needs about 3000 passes).
pub const MAX_EXTENDED_PASSES: u32 = 10_000;
