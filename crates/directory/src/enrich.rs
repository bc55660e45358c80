use rand::rngs::ThreadRng;
use rand::Rng;
use shared_types::{Department, Employee, RawUser, Role, Status};
use std::collections::VecDeque;

/// Source of uniform categorical choices used by [`enrich`].
pub trait ChoiceSource {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform choices backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomChoices<R> {
    rng: R,
}

impl<R: Rng> RandomChoices<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChoices<ThreadRng> {
    /// Choices drawn from the thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> ChoiceSource for RandomChoices<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, then keeps returning `0`.
///
/// Indices larger than the pool wrap around, so a script can be reused
/// across pools of different sizes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    picks: VecDeque<usize>,
}

impl ScriptedChoices {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl ChoiceSource for ScriptedChoices {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

fn choose<T: Copy, C: ChoiceSource + ?Sized>(pool: &[T], choices: &mut C) -> T {
    pool[choices.pick(pool.len()) % pool.len()]
}

/// Attach a department, role and status to a fetched user.
///
/// Draws department, role and status in that order, one pick each.
pub fn enrich<C: ChoiceSource + ?Sized>(user: RawUser, choices: &mut C) -> Employee {
    let department = choose(&Department::ALL, choices);
    let role = choose(&Role::ALL, choices);
    let status = choose(&Status::ALL, choices);
    Employee::from_user(user, department, role, status)
}
