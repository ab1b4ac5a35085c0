use crate::error::{CfResult, ScheduleError};
use crate::schedule::{Player, Quad, Schedule};

/// One end of a swap: `player` sitting in court `subteam` of `week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub week: usize,
    pub subteam: usize,
    pub player: Player,
}

impl Slot {
    pub fn new(week: usize, subteam: usize, player: Player) -> Self {
        Self {
            week,
            subteam,
            player,
        }
    }
}

impl From<(usize, usize, Player)> for Slot {
    fn from((week, subteam, player): (usize, usize, Player)) -> Self {
        Self::new(week, subteam, player)
    }
}

/// Exchange of two players between courts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub a: Slot,
    pub b: Slot,
}

impl Swap {
    pub fn new(a: impl Into<Slot>, b: impl Into<Slot>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// The swap that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            a: Slot::new(self.a.week, self.a.subteam, self.b.player),
            b: Slot::new(self.b.week, self.b.subteam, self.a.player),
        }
    }

    /// Returns a copy of `schedule` with the move applied.
    pub fn apply(&self, schedule: &Schedule) -> CfResult<Schedule> {
        let mut out = schedule.clone();
        self.apply_in_place(&mut out)?;
        Ok(out)
    }

    /// Both positions are resolved before anything is written, so a failed
    /// lookup leaves `schedule` untouched.
    pub fn apply_in_place(&self, schedule: &mut Schedule) -> CfResult<()> {
        if (self.a.week, self.a.subteam) == (self.b.week, self.b.subteam) {
            return Err(ScheduleError::InvalidSwap(format!(
                "both players sit in week {} court {}",
                self.a.week, self.a.subteam
            )));
        }
        let pos_a = locate(schedule, &self.a)?;
        let pos_b = locate(schedule, &self.b)?;

        remove_and_push(
            &mut schedule.weeks[self.a.week][self.a.subteam],
            pos_a,
            self.b.player,
        );
        remove_and_push(
            &mut schedule.weeks[self.b.week][self.b.subteam],
            pos_b,
            self.a.player,
        );
        Ok(())
    }
}

/// Drops the member at `pos` and appends `incoming` as the last member.
#[inline(always)]
fn remove_and_push(quad: &mut Quad, pos: usize, incoming: Player) {
    quad.copy_within(pos + 1.., pos);
    quad[3] = incoming;
}

/// Removes `x` from the first court and `y` from the second, then appends
/// each to the other's court. Does not check fairness or week uniqueness;
/// callers gate the result.
pub fn swap(
    schedule: &Schedule,
    first: impl Into<Slot>,
    second: impl Into<Slot>,
) -> CfResult<Schedule> {
    Swap::new(first, second).apply(schedule)
}

fn locate(schedule: &Schedule, slot: &Slot) -> CfResult<usize> {
    let quad = schedule
        .weeks
        .get(slot.week)
        .and_then(|w| w.get(slot.subteam))
        .ok_or_else(|| {
            ScheduleError::InvalidSwap(format!(
                "no court {} in week {}",
                slot.subteam, slot.week
            ))
        })?;

    quad.iter().position(|&p| p == slot.player).ok_or_else(|| {
        ScheduleError::InvalidSwap(format!(
            "player {} is not in week {} court {}",
            slot.player, slot.week, slot.subteam
        ))
    })
}
