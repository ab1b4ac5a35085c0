//! Maps real player names onto template numbers.
use crate::error::{CfResult, ScheduleError};
use crate::schedule::{Player, Schedule};
use fastrand::Rng;
use std::collections::HashSet;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    /// Names in the order they were given.
    names: Vec<String>,
    /// `numbers[i]` is the template number assigned to `names[i]`.
    numbers: Vec<Player>,
    /// `by_number[p]` is the index into `names` for template number `p`.
    by_number: Vec<usize>,
}

/// Splits a comma or newline separated list, dropping empty entries.
pub fn parse_names(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Roster {
    /// Assigns numbers `0..N` to `names` through a random permutation.
    pub fn shuffled(names: Vec<String>, rng: &mut Rng) -> CfResult<Self> {
        let mut numbers: Vec<Player> = (0..names.len()).collect();
        rng.shuffle(&mut numbers);
        Self::with_numbers(names, numbers)
    }

    /// Identity assignment: the i-th name plays as number i.
    pub fn in_order(names: Vec<String>) -> CfResult<Self> {
        let numbers = (0..names.len()).collect();
        Self::with_numbers(names, numbers)
    }

    fn with_numbers(names: Vec<String>, numbers: Vec<Player>) -> CfResult<Self> {
        if names.is_empty() {
            return Err(ScheduleError::Roster("roster has no names".to_string()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ScheduleError::Roster(format!("duplicate name '{}'", name)));
            }
        }

        let mut by_number = vec![0; names.len()];
        for (idx, &num) in numbers.iter().enumerate() {
            by_number[num] = idx;
        }

        Ok(Self {
            names,
            numbers,
            by_number,
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, player: Player) -> Option<&str> {
        self.by_number
            .get(player)
            .map(|&idx| self.names[idx].as_str())
    }

    pub fn number(&self, name: &str) -> Option<Player> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.numbers[idx])
    }

    /// `(name, number)` in roster order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Player)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.numbers.iter().copied())
    }

    /// Replaces every number in `schedule` with its name.
    pub fn apply<'a>(&'a self, schedule: &Schedule) -> CfResult<Vec<Vec<[&'a str; 4]>>> {
        let span = schedule.player_span();
        if span > self.len() {
            return Err(ScheduleError::Roster(format!(
                "schedule uses {} players but the roster has {} names",
                span,
                self.len()
            )));
        }

        let weeks = schedule
            .weeks
            .iter()
            .map(|week| {
                week.iter()
                    .map(|quad| quad.map(|p| self.names[self.by_number[p]].as_str()))
                    .collect()
            })
            .collect();
        Ok(weeks)
    }

    /// Named schedule as CSV: a week header, one `Court i` row per court,
    /// then the name-to-number table.
    pub fn export<W: Write>(&self, writer: W, schedule: &Schedule) -> CfResult<()> {
        let named = self.apply(schedule)?;
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        for (w, week) in named.iter().enumerate() {
            wtr.write_record([format!("Week {}", w + 1)])?;
            for (c, court) in week.iter().enumerate() {
                let label = format!("Court {}", c + 1);
                wtr.write_record(std::iter::once(label.as_str()).chain(court.iter().copied()))?;
            }
        }

        wtr.write_record(["Player Name", "Assigned Number"])?;
        for (name, num) in self.entries() {
            wtr.write_record([name.to_string(), num.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
