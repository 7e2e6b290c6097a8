use bevy_ecs::prelude::Component;

use crate::geometry::Vec2;

/// Direction an entity looks at; picks the `_up/_down/_left/_right` variant
/// of its clips.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    pub fn suffix(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    /// Dominant axis of `velocity`; horizontal wins ties. `None` when still.
    pub fn from_velocity(velocity: Vec2) -> Option<Facing> {
        if velocity.is_zero() {
            return None;
        }
        if velocity.x.abs() >= velocity.y.abs() {
            Some(if velocity.x < 0.0 { Facing::Left } else { Facing::Right })
        } else {
            Some(if velocity.y < 0.0 { Facing::Up } else { Facing::Down })
        }
    }

    /// Unit vector pointing this way (screen coordinates, y down).
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_velocity() {
        assert_eq!(Facing::from_velocity(Vec2::ZERO), None);
        assert_eq!(Facing::from_velocity(Vec2::new(-3.0, 1.0)), Some(Facing::Left));
        assert_eq!(Facing::from_velocity(Vec2::new(1.0, -3.0)), Some(Facing::Up));
        assert_eq!(Facing::from_velocity(Vec2::new(2.0, 2.0)), Some(Facing::Right));
    }

    #[test]
    fn test_unit_round_trips() {
        for f in Facing::ALL {
            assert_eq!(Facing::from_velocity(f.unit()), Some(f));
        }
    }
}
