use std::fmt::{self, Debug, Display, Formatter};
use std::time::Duration;

use itertools::Itertools;

/// Summary of the most recent search: nodes expanded, wall time, and the
/// root's legal actions with their scores.
pub struct SearchDetails<A> {
    pub visits: usize,
    pub elapsed: Duration,
    pub children: Vec<(A, f32)>,
}

impl<A: Display> Display for SearchDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let actions = self
            .children
            .iter()
            .map(|(action, score)| format!("(A: {}, S: {:.1})", action, score))
            .join(", ");

        write!(
            f,
            "V: {visits}, T: {elapsed:?}, Actions: [{actions}]",
            visits = self.visits,
            elapsed = self.elapsed,
            actions = actions
        )
    }
}

impl<A: Debug + Display> Debug for SearchDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
