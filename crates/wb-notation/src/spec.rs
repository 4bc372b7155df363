//! Typed parameters extracted from recognized tokens.

use serde::{Deserialize, Serialize};

/// A parsed dice expression, tagged by the grammar that recognized it.
///
/// Immutable once parsed. Parameters are carried exactly as written in the
/// token; bounds such as the dice cap are enforced by the evaluators, not
/// here, so an out-of-range token still consumes its grammar slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollSpec {
    /// Standard roll such as `2d6+3`: one sum of several dice.
    Standard {
        /// Number of dice rolled (1 when the count is omitted, as in `d20`).
        dice: u32,
        /// Sides per die.
        sides: u32,
        /// Static modifier added to the sum.
        modifier: i32,
    },

    /// Repeated roll such as `3#2d6+3`: one sum per repetition.
    Multiple {
        /// Number of independent repetitions.
        repeats: u32,
        /// Number of dice rolled each time.
        dice: u32,
        /// Sides per die.
        sides: u32,
        /// Static modifier added to each sum.
        modifier: i32,
    },

    /// Shadowrun pool such as `5#sd`.
    Shadowrun {
        /// Dice in the pool.
        pool: u32,
    },

    /// Shadowrun exploding pool such as `5#sdx`.
    ShadowrunExploding {
        /// Dice in the pool.
        pool: u32,
    },

    /// Shadowrun extended test such as `5,12#sde`.
    ShadowrunExtended {
        /// Dice rolled per pass.
        pool: u32,
        /// Accumulated hits required.
        threshold: u32,
    },

    /// 7th Sea 2nd-edition raise roll such as `8s3x` or `7s2l3j`.
    Raise {
        /// Number of ten-sided dice rolled.
        dice: u32,
        /// Skill rank, 0 to 5.
        skill: u32,
        /// Whether tens explode (`x`; rank 5 explodes regardless).
        explode: bool,
        /// Lash floor: faces below this score zero (`l` marker, 0 = off).
        lash: u32,
        /// Joie de vivre (`j`): faces at or below the rank score ten.
        joie_de_vivre: bool,
    },

    /// Classic 7th Sea keep-roll such as `4k2+1` or `2#+10kk5`.
    Keep {
        /// Independent repetitions of the whole roll.
        repeats: u32,
        /// Ten-sided dice rolled.
        rolls: u32,
        /// Dice kept after sorting.
        keep: u32,
        /// Static modifier added to the kept sum.
        modifier: i32,
        /// Whether tens explode (suppressed by a leading `-`).
        explode: bool,
        /// Whether unkept dice were requested (leading `+` or `kk`);
        /// only honoured when fewer dice are kept than rolled.
        show_unkept: bool,
    },

    /// New World of Darkness pool such as `6w`, `6w9`, or `6w-`.
    WorldOfDarkness {
        /// Dice in the pool.
        pool: u32,
        /// Requested explosion threshold; `None` disables explosion (`-`),
        /// absent markers default to ten-again.
        again: Option<u32>,
    },

    /// Percentile versus roll such as `vs(20+30-10)` or `3vs(45)`.
    Versus {
        /// Number of independent percentile rolls.
        repeats: u32,
        /// Threshold expression, validated and evaluated at evaluation time.
        expr: String,
    },
}
