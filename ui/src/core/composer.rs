//! Root gate: decides between the startup splash, the login screen and the
//! tabbed application from the current session state.

use super::session::{Identity, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    /// Startup restore has not finished; render neither the login screen nor the tabs.
    Loading,
    Gated,
    Active(Identity),
}

impl Surface {
    pub fn from_state(state: &SessionState) -> Self {
        if !state.restored {
            return Self::Loading;
        }
        match state.identity.as_ref() {
            Some(identity) => Self::Active(identity.clone()),
            None => Self::Gated,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Active(identity) => Some(identity),
            Self::Loading | Self::Gated => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    SignedIn,
    SignedOut,
}

/// The gate transition between two surfaces, if any. Leaving `Loading`
/// is the first determination, not a transition.
pub fn transition(previous: &Surface, next: &Surface) -> Option<Transition> {
    match (previous, next) {
        (Surface::Gated, Surface::Active(_)) => Some(Transition::SignedIn),
        (Surface::Active(_), Surface::Gated) => Some(Transition::SignedOut),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeker() -> Identity {
        Identity {
            id: "1".into(),
            name: "Spiritual Seeker".into(),
            email: "seeker@example.com".into(),
            is_admin: false,
        }
    }

    #[test]
    fn loading_until_restored() {
        let state = SessionState::default();
        assert_eq!(Surface::from_state(&state), Surface::Loading);
    }

    #[test]
    fn interactive_login_keeps_the_gate() {
        let state = SessionState {
            identity: None,
            loading: true,
            restored: true,
        };
        assert_eq!(Surface::from_state(&state), Surface::Gated);
    }

    #[test]
    fn identity_activates() {
        let state = SessionState {
            identity: Some(seeker()),
            loading: false,
            restored: true,
        };
        let surface = Surface::from_state(&state);
        assert_eq!(surface.identity(), Some(&seeker()));
    }

    #[test]
    fn transitions() {
        let active = Surface::Active(seeker());
        assert_eq!(transition(&Surface::Gated, &active), Some(Transition::SignedIn));
        assert_eq!(transition(&active, &Surface::Gated), Some(Transition::SignedOut));
        assert_eq!(transition(&Surface::Loading, &active), None);
        assert_eq!(transition(&Surface::Loading, &Surface::Gated), None);
        assert_eq!(transition(&active, &active), None);
    }
}
