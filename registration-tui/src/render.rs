//! Drawing of both screens with crossterm commands.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use registration_lib::{Field, RegistrationForm};

use crate::app::Focus;
use crate::input::{TextInput, char_width};
use crate::screens::RegistrationScreen;

const LABEL_X: u16 = 2;
const INPUT_X: u16 = 18;
const INPUT_WIDTH: usize = 32;
const TOP: u16 = 3;
const ROW_HEIGHT: u16 = 3;
const BUTTON_LABEL: &str = "[ Add ]";
const HELP: &str = "Tab/Shift-Tab: move   Enter: add   Esc: quit";

/// Clickable area of a focus target on the last drawn frame.
#[derive(Debug, Clone, Copy)]
pub struct HitZone {
    pub target: Focus,
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

impl HitZone {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.x.saturating_add(self.width)
    }
}

pub fn draw_registration(
    out: &mut impl Write,
    screen: &RegistrationScreen,
    focus: Focus,
) -> io::Result<Vec<HitZone>> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(LABEL_X, 1),
        SetAttribute(Attribute::Bold),
        Print("Student Registration"),
        SetAttribute(Attribute::Reset)
    )?;

    let mut zones = Vec::with_capacity(Field::ALL.len() + 1);

    for (row, field) in (0u16..).zip(Field::ALL) {
        let y = TOP + row * ROW_HEIGHT;
        queue!(out, MoveTo(LABEL_X, y), Print(field.label()))?;
        draw_input(out, screen.input(field), y, focus == Focus::Field(field))?;
        zones.push(HitZone {
            target: Focus::Field(field),
            x: INPUT_X,
            y,
            width: INPUT_WIDTH as u16 + 2,
        });

        let error = screen.error(field);
        if !error.is_empty() {
            queue!(
                out,
                MoveTo(INPUT_X, y + 1),
                SetForegroundColor(Color::Red),
                Print(error),
                ResetColor
            )?;
        }
    }

    let y = TOP + Field::ALL.len() as u16 * ROW_HEIGHT;
    queue!(out, MoveTo(INPUT_X, y))?;
    if focus == Focus::Submit {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    if !screen.submit_enabled() {
        queue!(out, SetForegroundColor(Color::DarkGrey))?;
    }
    queue!(out, Print(BUTTON_LABEL), SetAttribute(Attribute::Reset), ResetColor)?;
    zones.push(HitZone {
        target: Focus::Submit,
        x: INPUT_X,
        y,
        width: BUTTON_LABEL.len() as u16,
    });

    queue!(
        out,
        MoveTo(LABEL_X, y + 2),
        SetForegroundColor(Color::DarkGrey),
        Print(HELP),
        ResetColor
    )?;
    out.flush()?;

    Ok(zones)
}

fn draw_input(out: &mut impl Write, input: &TextInput, y: u16, focused: bool) -> io::Result<()> {
    queue!(out, MoveTo(INPUT_X, y), Print('['))?;

    let range = input.visible_range(INPUT_WIDTH, focused);
    let mut drawn = 0;
    for (offset, c) in input.text()[range.clone()].char_indices() {
        if focused && range.start + offset == input.cursor() {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(c),
                SetAttribute(Attribute::NoReverse)
            )?;
        } else {
            queue!(out, Print(c))?;
        }
        drawn += char_width(c);
    }

    let cursor_past_end = input.cursor() == input.text().len() && range.end == input.cursor();
    if focused && cursor_past_end && drawn < INPUT_WIDTH {
        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(' '),
            SetAttribute(Attribute::NoReverse)
        )?;
        drawn += 1;
    }
    queue!(out, Print("_".repeat(INPUT_WIDTH.saturating_sub(drawn))))?;

    queue!(out, Print(']'))
}

pub fn draw_completed(out: &mut impl Write, form: &RegistrationForm) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(LABEL_X, 1),
        SetAttribute(Attribute::Bold),
        Print("Registration complete"),
        SetAttribute(Attribute::Reset)
    )?;

    for (row, field) in (0u16..).zip(Field::ALL) {
        queue!(
            out,
            MoveTo(LABEL_X, TOP + row),
            Print(format!("{:<16}{}", field.label(), form.get(field)))
        )?;
    }

    queue!(
        out,
        MoveTo(LABEL_X, TOP + Field::ALL.len() as u16 + 1),
        SetForegroundColor(Color::DarkGrey),
        Print("Esc: quit"),
        ResetColor
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_zone_contains() {
        let zone = HitZone {
            target: Focus::Submit,
            x: 10,
            y: 5,
            width: 7,
        };
        assert!(zone.contains(10, 5));
        assert!(zone.contains(16, 5));
        assert!(!zone.contains(17, 5));
        assert!(!zone.contains(12, 6));
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::default();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    fn draw(input: &TextInput, focused: bool) -> String {
        let mut buf = Vec::new();
        draw_input(&mut buf, input, 0, focused).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("crossterm writes UTF-8")
    }

    #[test]
    fn test_long_email_tail_visible_while_editing() {
        let email = registration_lib::validation::expected_email(
            "Jane",
            "Abcdefghijklmnopqrstuvwxy",
            registration_lib::validation::DEFAULT_EMAIL_DOMAIN,
        )
        .expect("both names are present");
        assert_eq!(email.len(), 41);

        let out = draw(&typed(&email), true);
        assert!(out.contains("wxj@farmingdale.edu"));
        assert!(!out.contains("abcdefghij"));
        assert!(!out.contains('_'));
    }

    #[test]
    fn test_wide_chars_stay_inside_box() {
        let out = draw(&typed(&"李".repeat(40)), false);
        let printed = out.chars().filter(|&c| c == '李').count();
        assert_eq!(printed * 2, INPUT_WIDTH);
        assert!(out.ends_with(']'));
    }

    #[test]
    fn test_short_input_is_padded() {
        let out = draw(&typed("Jo"), false);
        assert!(out.contains(&format!("Jo{}]", "_".repeat(INPUT_WIDTH - 2))));
    }

    #[test]
    fn test_draw_registration_zones() {
        let mut buf = Vec::new();
        let zones = draw_registration(&mut buf, &RegistrationScreen::default(), Focus::Submit)
            .expect("writing to a Vec cannot fail");

        assert_eq!(zones.len(), 6);
        assert_eq!(zones[0].target, Focus::Field(Field::FirstName));
        assert_eq!(zones[5].target, Focus::Submit);

        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("Student Registration"));
        assert!(text.contains(BUTTON_LABEL));
    }
}
