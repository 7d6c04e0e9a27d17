/// Minimal finite-state-machine container.
///
/// `S` is the state type (usually an enum). The machine tracks the current
/// state, the previous state, and how long the machine has been in its current
/// state. **Transition logic is intentionally kept out of the machine itself**
/// — it lives in the module that drives it (see `locomotion::machine`).
///
/// # Usage
/// ```
/// use gait::fsm::StateMachine;
///
/// #[derive(Clone)]
/// enum Phase { Idle, Active }
///
/// let mut fsm = StateMachine::new(Phase::Idle);
/// // Each tick:
/// fsm.tick(0.016);
/// fsm.go(Phase::Active);
/// assert!(fsm.just_entered());
/// assert_eq!(fsm.elapsed, 0.0);
/// ```
pub struct StateMachine<S: Clone> {
    pub state: S,
    pub previous: S,
    /// Seconds spent in the current state. Reset to 0.0 on each transition.
    pub elapsed: f32,
    entered_this_frame: bool,
}

impl<S: Clone> StateMachine<S> {
    /// Create a new machine starting in `initial`.
    /// `just_entered()` returns `true` on the first tick.
    pub fn new(initial: S) -> Self {
        Self {
            previous: initial.clone(),
            state: initial,
            elapsed: 0.0,
            entered_this_frame: true,
        }
    }

    /// Transition to `next` only if it is a **different variant** from the
    /// current state (compared by discriminant — no `PartialEq` required).
    /// Resets `elapsed` to 0.0 and sets `just_entered()` for one tick.
    pub fn go(&mut self, next: S) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next) {
            self.previous = std::mem::replace(&mut self.state, next);
            self.elapsed = 0.0;
            self.entered_this_frame = true;
        }
    }

    /// Drop back to `initial` unconditionally, clearing the timer even when
    /// the variant already matches. Used by external cancellation.
    pub fn reset(&mut self, initial: S) {
        self.previous = std::mem::replace(&mut self.state, initial);
        self.elapsed = 0.0;
        self.entered_this_frame = true;
    }

    /// Advance the elapsed-in-state timer by `dt` seconds and clear the
    /// `just_entered` flag. Call once per tick **before** processing
    /// transitions, so `just_entered()` stays observable for the whole tick
    /// on which a transition fired.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        self.entered_this_frame = false;
    }

    /// Returns `true` only on the first tick after entering this state.
    pub fn just_entered(&self) -> bool {
        self.entered_this_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Phase {
        A,
        B,
    }

    #[test]
    fn go_ignores_same_variant() {
        let mut fsm = StateMachine::new(Phase::A);
        fsm.tick(0.5);
        fsm.go(Phase::A);
        assert_eq!(fsm.elapsed, 0.5);
        assert!(!fsm.just_entered());
    }

    #[test]
    fn go_resets_timer_on_real_transition() {
        let mut fsm = StateMachine::new(Phase::A);
        fsm.tick(0.5);
        fsm.go(Phase::B);
        assert_eq!(fsm.state, Phase::B);
        assert_eq!(fsm.previous, Phase::A);
        assert_eq!(fsm.elapsed, 0.0);
        assert!(fsm.just_entered());
        fsm.tick(0.25);
        assert!(!fsm.just_entered());
        assert_eq!(fsm.elapsed, 0.25);
    }

    #[test]
    fn reset_fires_even_for_same_variant() {
        let mut fsm = StateMachine::new(Phase::A);
        fsm.tick(0.5);
        fsm.reset(Phase::A);
        assert_eq!(fsm.elapsed, 0.0);
        assert!(fsm.just_entered());
    }
}
