use std::io::{stdout, Stdout};

use crossterm::{cursor, execute, terminal};

/// Owned handle for the terminal the countdown draws on. Acquiring it hides
/// the cursor; the cursor is shown again on [`exit`], on drop, and from the
/// panic hook, so every exit path restores it.
///
/// Capability queries are best-effort: an unknown width is reported as `None`
/// and failing to hide the cursor is ignored.
///
/// [`exit`]: Term::exit
pub struct Term {
    out: Stdout,
    entered: bool,
}

impl Term {
    pub fn new() -> Self {
        Self { out: stdout(), entered: false }
    }

    pub fn enter(&mut self) {
        let _ = execute!(self.out, cursor::Hide);
        self.entered = true;
    }

    pub fn exit(&mut self) {
        if self.entered {
            let _ = execute!(self.out, cursor::Show);
            self.entered = false;
        }
    }

    /// Current terminal width in columns, if it can be determined.
    pub fn width(&self) -> Option<u16> {
        terminal::size().ok().map(|(width, _)| width)
    }
}

impl Drop for Term {
    fn drop(&mut self) {
        self.exit();
    }
}

/// Best-effort cursor restore for abnormal exits (panic hook, Ctrl-C race).
pub fn restore() {
    let _ = execute!(stdout(), cursor::Show);
}
