/// Audio collaborator.  Fire-and-forget: the engine never looks at results.

use std::io::Write;

use tracing::debug;

use crate::entities::SoundKind;

pub trait AudioPlayer {
    fn play_sound(&mut self, kind: SoundKind);
}

/// Rings the terminal bell on a crash; other sounds are silent.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioPlayer for TerminalBell<W> {
    fn play_sound(&mut self, kind: SoundKind) {
        if kind != SoundKind::Crash {
            return;
        }
        if let Err(err) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            debug!(%err, "bell failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_rings_only_on_crash() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play_sound(SoundKind::Jump);
        bell.play_sound(SoundKind::Milestone);
        assert!(bell.out.is_empty());
        bell.play_sound(SoundKind::Crash);
        assert_eq!(bell.out, b"\x07");
    }
}
