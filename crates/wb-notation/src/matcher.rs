//! Word-level grammar recognizers.
//!
//! Each grammar owns one compiled pattern and an extractor turning its
//! capture groups into a [`RollSpec`]. Patterns are searched inside the
//! token (not anchored), mirroring how players embed notation in prose:
//! `(2d6)` and `2d6,` both roll. Letters match case-insensitively.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::spec::RollSpec;

type Extract = fn(&Captures) -> Option<RollSpec>;

/// The grammars in priority order: more specific shapes come first, since
/// a general pattern may match a substring of a specific one (`3#2d6`
/// contains `2d6`). The first pattern that matches a token claims it —
/// even when parameter extraction then produces nothing.
static MATCHERS: LazyLock<Vec<(Regex, Extract)>> = LazyLock::new(|| {
    vec![
        (
            pattern(r"(?i)\b(?P<repeats>\d+)#(?P<dice>\d*)d(?P<sides>\d+)(?P<mod>[+-]\d+)?\b"),
            extract_multiple as Extract,
        ),
        (
            pattern(r"(?i)\b(?P<dice>\d*)d(?P<sides>\d+)(?P<mod>[+-]\d+)?\b"),
            extract_standard,
        ),
        (
            pattern(r"(?i)\b(?P<pool>\d+),(?P<threshold>\d+)#sde\b"),
            extract_sr_extended,
        ),
        (pattern(r"(?i)\b(?P<pool>\d+)#sdx\b"), extract_sr_exploding),
        (pattern(r"(?i)\b(?P<pool>\d+)#sd\b"), extract_sr_basic),
        (
            pattern(
                r"(?i)\b(?P<dice>\d+)s(?P<skill>[0-5])(?P<explode>x)?(?:l(?P<lash>\d))?(?P<joie>j)?\b",
            ),
            extract_raise,
        ),
        (
            pattern(
                r"(?i)(?:(?P<repeats>\d+)#)?(?P<prefix>[-+])?(?P<rolls>\d+)(?P<k>kk?)(?P<keep>\d+)(?P<mod>[+-]\d+)?",
            ),
            extract_keep,
        ),
        (pattern(r"(?i)\b(?P<pool>\d+)w(?P<again>\d|-)?$"), extract_wod),
        (
            pattern(r"(?i)\b(?P<repeats>\d+)?vs\((?P<expr>([-+]|\d)+)\)$"),
            extract_versus,
        ),
    ]
});

fn pattern(src: &str) -> Regex {
    Regex::new(src).expect("grammar pattern compiles")
}

/// Match one whitespace-delimited token against the grammars in priority
/// order and extract its parameters.
///
/// Returns `None` when no grammar recognizes the token, or when the
/// claiming grammar's digits do not fit the parameter types (a token with
/// an absurdly long dice count is claimed but yields nothing).
pub fn parse_token(token: &str) -> Option<RollSpec> {
    for (regex, extract) in MATCHERS.iter() {
        if let Some(caps) = regex.captures(token) {
            return extract(&caps);
        }
    }
    None
}

fn num(caps: &Captures, name: &str) -> Option<u32> {
    caps.name(name)?.as_str().parse().ok()
}

fn num_or(caps: &Captures, name: &str, default: u32) -> Option<u32> {
    match caps.name(name).map(|m| m.as_str()).filter(|s| !s.is_empty()) {
        Some(s) => s.parse().ok(),
        None => Some(default),
    }
}

fn modifier(caps: &Captures) -> Option<i32> {
    match caps.name("mod") {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

fn extract_standard(caps: &Captures) -> Option<RollSpec> {
    Some(RollSpec::Standard {
        dice: num_or(caps, "dice", 1)?,
        sides: num(caps, "sides")?,
        modifier: modifier(caps)?,
    })
}

fn extract_multiple(caps: &Captures) -> Option<RollSpec> {
    Some(RollSpec::Multiple {
        repeats: num(caps, "repeats")?,
        dice: num_or(caps, "dice", 1)?,
        sides: num(caps, "sides")?,
        modifier: modifier(caps)?,
    })
}

fn extract_sr_basic(caps: &Captures) -> Option<RollSpec> {
    Some(RollSpec::Shadowrun {
        pool: num(caps, "pool")?,
    })
}

fn extract_sr_exploding(caps: &Captures) -> Option<RollSpec> {
    Some(RollSpec::ShadowrunExploding {
        pool: num(caps, "pool")?,
    })
}

fn extract_sr_extended(caps: &Captures) -> Option<RollSpec> {
    Some(RollSpec::ShadowrunExtended {
        pool: num(caps, "pool")?,
        threshold: num(caps, "threshold")?,
    })
}

fn extract_raise(caps: &Captures) -> Option<RollSpec> {
    Some(RollSpec::Raise {
        dice: num(caps, "dice")?,
        skill: num(caps, "skill")?,
        explode: caps.name("explode").is_some(),
        lash: num_or(caps, "lash", 0)?,
        joie_de_vivre: caps.name("joie").is_some(),
    })
}

fn extract_keep(caps: &Captures) -> Option<RollSpec> {
    let prefix = caps.name("prefix").map(|m| m.as_str());
    let double_k = caps.name("k").is_some_and(|m| m.as_str().len() == 2);
    Some(RollSpec::Keep {
        repeats: num_or(caps, "repeats", 1)?,
        rolls: num(caps, "rolls")?,
        keep: num(caps, "keep")?,
        modifier: modifier(caps)?,
        explode: prefix != Some("-"),
        show_unkept: prefix == Some("+") || double_k,
    })
}

fn extract_wod(caps: &Captures) -> Option<RollSpec> {
    let again = match caps.name("again").map(|m| m.as_str()) {
        Some("-") => None,
        Some(digit) => Some(digit.parse().ok()?),
        None => Some(10),
    };
    Some(RollSpec::WorldOfDarkness {
        pool: num(caps, "pool")?,
        again,
    })
}

fn extract_versus(caps: &Captures) -> Option<RollSpec> {
    Some(RollSpec::Versus {
        repeats: num_or(caps, "repeats", 1)?,
        expr: caps.name("expr")?.as_str().to_string(),
    })
}
