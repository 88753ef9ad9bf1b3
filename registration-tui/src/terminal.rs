use std::io;

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{self, Clear, ClearType, SetTitle},
};

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new(title: &str) -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            SetTitle(title)
        )?;

        Ok(Self { stdout })
    }

    /// Block until the next terminal event.
    pub fn read(&self) -> io::Result<Event> {
        event::read()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All))
    }

    pub fn out(&mut self) -> &mut io::Stdout {
        &mut self.stdout
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
