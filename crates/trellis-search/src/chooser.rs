//! Disambiguation strategy injected into the resolver

/// "Choose one of N" capability the resolver requires from its caller.
///
/// The resolver never talks to a console itself; an interactive
/// front-end prompts the user, a test supplies a deterministic
/// selector. `choose` returns the 0-based index of the picked
/// candidate, or `None` to cancel.
pub trait Chooser {
    fn choose(&mut self, candidates: &[String]) -> Option<usize>;
}

impl<F> Chooser for F
where
    F: FnMut(&[String]) -> Option<usize>,
{
    fn choose(&mut self, candidates: &[String]) -> Option<usize> {
        self(candidates)
    }
}

/// Non-interactive chooser that always takes the first candidate.
///
/// Candidates arrive in store enumeration order, so this is
/// deterministic; useful for scripted runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl Chooser for FirstCandidate {
    fn choose(&mut self, candidates: &[String]) -> Option<usize> {
        if candidates.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}
