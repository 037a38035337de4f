//! Output palette, shared by status lines and `--help`.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// README written or already current.
pub(crate) const SUCCESS: Style = fg(AnsiColor::Green);

/// Pipeline failures.
pub(crate) const ERROR: Style = fg(AnsiColor::Red);

/// Stale README under `--check`.
pub(crate) const WARNING: Style = fg(AnsiColor::Yellow);

pub(crate) const HINT: Style = Style::new().effects(Effects::DIMMED);

/// Section headings and the usage line in `--help`.
const HEADING: Style = SUCCESS.effects(Effects::BOLD);

/// Flag names and value placeholders in `--help`.
const FLAG: Style = fg(AnsiColor::Cyan);

pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(HEADING)
        .usage(HEADING)
        .literal(FLAG)
        .placeholder(FLAG)
}
