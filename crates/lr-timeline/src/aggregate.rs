//! The count-based sweep over member transition epochs.

use lr_core::State;
use lr_renewal::ComponentHistory;

// ── TransitionSource ──────────────────────────────────────────────────────────

/// Anything that exposes its down-transition and up-transition epochs.
///
/// Implemented by [`ComponentHistory`] (so windows can aggregate
/// components) and by [`AggregateTimeline`] itself (so the grid can
/// aggregate windows).
pub trait TransitionSource {
    /// Epochs at which this entity went down, strictly increasing.
    fn down_epochs(&self) -> &[f64];
    /// Epochs at which this entity came back up, strictly increasing.
    fn up_epochs(&self) -> &[f64];
}

impl TransitionSource for ComponentHistory {
    fn down_epochs(&self) -> &[f64] {
        &self.fails
    }
    fn up_epochs(&self) -> &[f64] {
        &self.repairs
    }
}

// ── Redundancy ────────────────────────────────────────────────────────────────

/// Composition rule deciding when the aggregate entity is down.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Redundancy {
    /// Down only while *every* member is down (window-level OR-redundancy).
    ///
    /// The counter starts at the member count ("units working"); a member
    /// fail contributes −1, a repair +1; the aggregate is down iff the
    /// counter reaches 0.
    AllMembersDown,

    /// Down while *any* member is down (grid-level AND-across-windows).
    ///
    /// The counter starts at 0 ("units broken"); a member fail contributes
    /// +1, a repair −1; the aggregate is down iff the counter is > 0.
    AnyMemberDown,
}

impl Redundancy {
    /// (initial counter, delta per member fail, down-predicate).
    fn convention(self, member_count: usize) -> (i64, i64, fn(i64) -> bool) {
        match self {
            Redundancy::AllMembersDown => (member_count as i64, -1, |c| c == 0),
            Redundancy::AnyMemberDown => (0, 1, |c| c > 0),
        }
    }
}

// ── AggregateTimeline ─────────────────────────────────────────────────────────

/// The derived up/down history of a composite entity (window or grid) over
/// one trial.
///
/// A pure value: every trial produces a fresh one, nothing is mutated in
/// place across trials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateTimeline {
    /// Every aggregate transition, ascending: `(epoch, resulting state)`.
    pub transitions: Vec<(f64, State)>,
    /// Epochs of up→down aggregate transitions.
    pub fails: Vec<f64>,
    /// Epochs of down→up aggregate transitions.
    pub repairs: Vec<f64>,
    /// First fail epoch, `None` if the aggregate never went down.
    pub first_fail: Option<f64>,
    /// First repair epoch, `None` if the aggregate never came back up.
    pub first_repair: Option<f64>,
    /// Total time spent up.  `uptime + downtime == horizon`, bitwise.
    pub uptime: f64,
    /// Total time spent down.
    pub downtime: f64,
}

impl AggregateTimeline {
    /// Mean up-interval duration (MTTF as used here): total uptime divided
    /// by the number of completed up intervals, or the bare total when the
    /// aggregate never completed a repair.
    pub fn mean_uptime(&self) -> f64 {
        if self.repairs.is_empty() {
            self.uptime
        } else {
            self.uptime / self.repairs.len() as f64
        }
    }

    /// Mean down-interval duration (MTTR as used here), symmetric to
    /// [`mean_uptime`][Self::mean_uptime].
    pub fn mean_downtime(&self) -> f64 {
        if self.fails.is_empty() {
            self.downtime
        } else {
            self.downtime / self.fails.len() as f64
        }
    }

    /// State at the end of the horizon.
    pub fn final_state(&self) -> State {
        match self.transitions.last() {
            Some(&(_, state)) => state,
            None => State::Up,
        }
    }
}

impl TransitionSource for AggregateTimeline {
    fn down_epochs(&self) -> &[f64] {
        &self.fails
    }
    fn up_epochs(&self) -> &[f64] {
        &self.repairs
    }
}

// ── The sweep ─────────────────────────────────────────────────────────────────

/// Merge the members' transition histories into one composite timeline.
///
/// 1. Every member down-epoch becomes a counter delta toward "more broken",
///    every up-epoch the reverse; sign and start value come from
///    `redundancy`.
/// 2. Deltas are sorted ascending and same-epoch deltas are summed before
///    the state is evaluated — simultaneous member transitions are legal
///    and order-independent.
/// 3. An aggregate transition is emitted only when the composite state
///    actually changes; same-state runs collapse.
/// 4. Down intervals are accrued as they close; the final open interval is
///    closed at the horizon.  Uptime is derived as `horizon − downtime`,
///    which makes `uptime + downtime == horizon` hold exactly.
///
/// A member with no transitions contributes no deltas and is implicitly in
/// its initial state throughout.  The aggregate starts up at epoch 0.
pub fn aggregate<'a, S, I>(members: I, redundancy: Redundancy, horizon: f64) -> AggregateTimeline
where
    S: TransitionSource + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let members: Vec<&S> = members.into_iter().collect();
    let (mut counter, fail_delta, is_down) = redundancy.convention(members.len());

    let mut deltas: Vec<(f64, i64)> = Vec::new();
    for member in &members {
        for &epoch in member.down_epochs() {
            deltas.push((epoch, fail_delta));
        }
        for &epoch in member.up_epochs() {
            deltas.push((epoch, -fail_delta));
        }
    }
    deltas.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut out = AggregateTimeline::default();
    let mut up = true;
    let mut prev_epoch = 0.0;

    let mut i = 0;
    while i < deltas.len() {
        let epoch = deltas[i].0;
        // Coalesce identical epochs: equal f64 bits occur whenever the same
        // member epoch feeds both levels, and simultaneous transitions from
        // different members must sum before the predicate runs.
        let mut delta = 0;
        while i < deltas.len() && deltas[i].0 == epoch {
            delta += deltas[i].1;
            i += 1;
        }
        counter += delta;

        let now_up = !is_down(counter);
        if now_up != up {
            out.transitions.push((epoch, if now_up { State::Up } else { State::Down }));
            if now_up {
                out.repairs.push(epoch);
                if out.first_repair.is_none() {
                    out.first_repair = Some(epoch);
                }
                out.downtime += epoch - prev_epoch;
            } else {
                out.fails.push(epoch);
                if out.first_fail.is_none() {
                    out.first_fail = Some(epoch);
                }
            }
            up = now_up;
            prev_epoch = epoch;
        }
    }

    if !up {
        out.downtime += horizon - prev_epoch;
    }
    out.uptime = horizon - out.downtime;
    out
}
