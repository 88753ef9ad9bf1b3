use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use registration_lib::{Field, FormController, SubmitOutcome};

use crate::error::Result;
use crate::render::{self, HitZone};
use crate::screens::{CompletedScreen, RegistrationScreen};
use crate::terminal::Terminal;

pub const TITLE: &str = "FSC - Splash Screen";

/// Widget that currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

const FOCUS_ORDER: [Focus; 6] = [
    Focus::Field(Field::FirstName),
    Focus::Field(Field::LastName),
    Focus::Field(Field::Email),
    Focus::Field(Field::Dob),
    Focus::Field(Field::ZipCode),
    Focus::Submit,
];

impl Focus {
    fn position(self) -> usize {
        FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        FOCUS_ORDER[(self.position() + 1) % FOCUS_ORDER.len()]
    }

    pub fn prev(self) -> Self {
        FOCUS_ORDER[(self.position() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    controller: FormController<RegistrationScreen, CompletedScreen>,
    focus: Focus,
    zones: Vec<HitZone>,
}

impl App {
    pub fn new() -> Self {
        let mut controller =
            FormController::new(RegistrationScreen::default(), CompletedScreen::default());
        // The first input receives focus when the screen opens
        controller.on_focus_changed(Field::FirstName, true);

        Self {
            controller,
            focus: Focus::Field(Field::FirstName),
            zones: Vec::new(),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal) -> Result<()> {
        loop {
            self.draw(terminal)?;

            let flow = match terminal.read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    self.handle_click(mouse.column, mouse.row)?
                }
                Event::Resize(..) => {
                    terminal.clear()?;
                    Flow::Continue
                }
                _ => Flow::Continue,
            };

            if flow == Flow::Quit {
                log::info!("Quit requested");
                return Ok(());
            }
        }
    }

    fn draw(&mut self, terminal: &mut Terminal) -> Result<()> {
        if let Some(form) = self.controller.navigator().submitted() {
            render::draw_completed(terminal.out(), form)?;
            self.zones.clear();
        } else {
            self.zones =
                render::draw_registration(terminal.out(), self.controller.view(), self.focus)?;
        }
        Ok(())
    }

    fn is_completed(&self) -> bool {
        self.controller.navigator().submitted().is_some()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Flow> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            return Ok(Flow::Quit);
        }
        if self.is_completed() {
            return Ok(Flow::Continue);
        }

        match (self.focus, key.code) {
            (_, KeyCode::Tab | KeyCode::Down) => self.move_focus(self.focus.next()),
            (_, KeyCode::BackTab | KeyCode::Up) => self.move_focus(self.focus.prev()),
            (Focus::Submit, KeyCode::Enter | KeyCode::Char(' ')) => self.submit()?,
            (Focus::Field(_), KeyCode::Enter) => self.move_focus(self.focus.next()),
            (Focus::Field(field), code) if !ctrl => self.edit(field, code),
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_click(&mut self, x: u16, y: u16) -> Result<Flow> {
        if self.is_completed() {
            return Ok(Flow::Continue);
        }
        let Some(target) = self.zones.iter().find(|z| z.contains(x, y)).map(|z| z.target) else {
            return Ok(Flow::Continue);
        };

        self.move_focus(target);
        if target == Focus::Submit {
            self.submit()?;
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self, field: Field, code: KeyCode) {
        let input = self.controller.view_mut().input_mut(field);
        match code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.left(),
            KeyCode::Right => input.right(),
            KeyCode::Home => input.home(),
            KeyCode::End => input.end(),
            _ => {}
        }
    }

    /// Report blur of the old input and focus of the new one.
    fn move_focus(&mut self, to: Focus) {
        if to == self.focus {
            return;
        }
        let from = std::mem::replace(&mut self.focus, to);
        log::trace!("[focus] {:?} -> {:?}", from, to);

        if let Focus::Field(field) = from {
            self.controller.on_focus_changed(field, false);
        }
        if let Focus::Field(field) = to {
            self.controller.on_focus_changed(field, true);
        }
    }

    fn submit(&mut self) -> Result<()> {
        // A disabled button ignores activation
        if !self.controller.state().is_enabled() {
            return Ok(());
        }

        match self.controller.on_submit()? {
            SubmitOutcome::Navigated => {}
            SubmitOutcome::Rejected(report) => {
                for error in report.errors() {
                    log::debug!("Submit rejected: {}", error);
                }
                if let Some(field) = report.first_invalid() {
                    self.move_focus(Focus::Field(field));
                }
            }
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
