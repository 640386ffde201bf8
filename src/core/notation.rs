use crate::domain::model::{RollSpec, MAX_DICE, MAX_SIDES, MIN_DICE, MIN_SIDES};
use crate::utils::error::AppError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn notation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d*)d(\d+)([+-]\d+)?$").expect("dice regex is valid"))
}

/// Parse dice notation like "2d6+2", "1d20", "d20" or "3d8-2".
///
/// Case and whitespace are ignored. Returns `None` for anything that does
/// not match or whose count / sides fall outside the allowed range.
pub fn parse_dice_notation(input: &str) -> Option<RollSpec> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let caps = notation_regex().captures(&cleaned)?;

    let count = match caps.get(1).map(|m| m.as_str()) {
        Some("") | None => 1,
        Some(digits) => digits.parse::<u32>().ok()?,
    };
    let sides = caps[2].parse::<u32>().ok()?;
    let modifier = match caps.get(3) {
        // i32 範圍內，加上最多 100 * 1000 的點數也不會溢位
        Some(m) => i64::from(m.as_str().parse::<i32>().ok()?),
        None => 0,
    };

    if !(MIN_DICE..=MAX_DICE).contains(&count) {
        return None;
    }
    if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
        return None;
    }

    Some(RollSpec::new_unchecked(count, sides, modifier))
}

impl FromStr for RollSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dice_notation(s).ok_or_else(|| AppError::InvalidNotation {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for RollSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count(), self.sides())?;
        if self.modifier() > 0 {
            write!(f, "+{}", self.modifier())?;
        } else if self.modifier() < 0 {
            write!(f, "{}", self.modifier())?;
        }
        Ok(())
    }
}
