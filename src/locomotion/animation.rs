//! Pure projection of the locomotion state onto animator flags.

use super::state::LocomotionState;

/// Mutually exclusive animator inputs: exactly one is set per tick. There is
/// no dash flag; dashing reuses the locomotion clip at higher speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationFlags {
    pub is_idle: bool,
    pub is_walking: bool,
    pub is_jumping: bool,
    pub is_falling: bool,
    pub is_dodging: bool,
}

impl AnimationFlags {
    /// Label of the one active flag, for logs.
    pub fn label(&self) -> &'static str {
        if self.is_idle {
            "idle"
        } else if self.is_walking {
            "walking"
        } else if self.is_jumping {
            "jumping"
        } else if self.is_falling {
            "falling"
        } else {
            "dodging"
        }
    }
}

/// Receives the projected flags once per tick. One-way: the sink never talks
/// back to the machine (the dodge completion signal is its own contract).
pub trait AnimationSink {
    fn set_flags(&mut self, flags: AnimationFlags);
}

/// Project the canonical state onto the flag set. Falling is a real state
/// (airborne without an active jump), so the projection stays a pure
/// function of the enum.
pub fn project(state: LocomotionState) -> AnimationFlags {
    let mut flags = AnimationFlags::default();
    match state {
        LocomotionState::Idle => flags.is_idle = true,
        LocomotionState::Walking | LocomotionState::Dashing => flags.is_walking = true,
        LocomotionState::Jumping => flags.is_jumping = true,
        LocomotionState::Falling => flags.is_falling = true,
        LocomotionState::Dodging => flags.is_dodging = true,
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_set(flags: AnimationFlags) -> usize {
        [
            flags.is_idle,
            flags.is_walking,
            flags.is_jumping,
            flags.is_falling,
            flags.is_dodging,
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    #[test]
    fn exactly_one_flag_per_state() {
        let states = [
            LocomotionState::Idle,
            LocomotionState::Walking,
            LocomotionState::Jumping,
            LocomotionState::Falling,
            LocomotionState::Dashing,
            LocomotionState::Dodging,
        ];
        for state in states {
            assert_eq!(count_set(project(state)), 1, "state {state:?}");
        }
    }

    #[test]
    fn mapping_matches_the_clip_set() {
        assert!(project(LocomotionState::Idle).is_idle);
        assert!(project(LocomotionState::Walking).is_walking);
        assert!(project(LocomotionState::Jumping).is_jumping);
        assert!(project(LocomotionState::Falling).is_falling);
        assert!(project(LocomotionState::Dodging).is_dodging);
        // Dash has no clip of its own.
        assert!(project(LocomotionState::Dashing).is_walking);
    }
}
