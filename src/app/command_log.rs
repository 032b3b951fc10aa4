//! Sitzungsprotokoll: die jüngsten Strecken-Commands und Zähler je Command-Art.

use super::AppCommand;
use std::collections::VecDeque;

/// Zähler je Command-Art über die gesamte Sitzung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandTally {
    pub pointer_updates: usize,
    pub commits: usize,
    pub undos: usize,
    pub noise_toggles: usize,
    pub clears: usize,
    pub skidpads: usize,
    pub option_changes: usize,
}

impl CommandTally {
    fn count(&mut self, command: &AppCommand) {
        match command {
            // Reine Zeigerposition, verändert die Strecke nicht
            AppCommand::SetPointer { .. } => {}
            AppCommand::UpdatePendingSegment { .. } => self.pointer_updates += 1,
            AppCommand::CommitPendingSegment => self.commits += 1,
            AppCommand::UndoSegment => self.undos += 1,
            AppCommand::ToggleNoise => self.noise_toggles += 1,
            AppCommand::ClearTrack => self.clears += 1,
            AppCommand::GenerateSkidpad { .. } => self.skidpads += 1,
            AppCommand::ApplyOptions { .. } | AppCommand::ResetOptions => {
                self.option_changes += 1
            }
        }
    }

    /// Commands, die übernommene Geometrie verändern können.
    pub fn edits(&self) -> usize {
        self.commits
            + self.undos
            + self.noise_toggles
            + self.clears
            + self.skidpads
            + self.option_changes
    }
}

/// Hält die jüngsten Commands in Reihenfolge; die Zähler laufen über die ganze Sitzung.
#[derive(Debug, Default)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    tally: CommandTally,
    total: usize,
}

impl CommandLog {
    /// Anzahl gehaltener Einträge, der älteste fällt heraus.
    pub const CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen Command vor seiner Ausführung.
    pub fn record(&mut self, command: &AppCommand) {
        if self.recent.len() == Self::CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.tally.count(command);
        self.total += 1;
    }

    /// Anzahl gehaltener Einträge.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Alle protokollierten Commands seit Sitzungsbeginn.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Jüngste Commands, ältester zuerst.
    pub fn recent(&self) -> impl Iterator<Item = &AppCommand> {
        self.recent.iter()
    }

    pub fn tally(&self) -> CommandTally {
        self.tally
    }
}
