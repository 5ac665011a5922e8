use super::{Direction, Unit};

/// A duration expressed in the largest unit it fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduced {
    pub unit: Unit,
    pub quantity: u64,
    pub direction: Direction,
}

/// Reduces the distance between `timestamp` and `now` to a unit and a rounded quantity.
///
/// Each ratio divides the already reduced value, so reaching hours takes two divisions
/// by 60. Rounding happens after the unit is chosen and is not carried over: 3599 seconds
/// come out as 60 minutes, not as one hour.
pub fn reduce(timestamp: i64, now: i64) -> Reduced {
    let direction = if now >= timestamp {
        Direction::Past
    } else {
        Direction::Future
    };

    let mut value = now.abs_diff(timestamp) as f64;
    let mut unit = Unit::Second;
    while let (Some(ratio), Some(next)) = (unit.ratio(), unit.next()) {
        if value < ratio {
            break;
        }
        value /= ratio;
        unit = next;
    }

    Reduced {
        unit,
        quantity: value.round() as u64,
        direction,
    }
}
