use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use wideseek_chat::{MAX_TOKENS_RANGE, TEMPERATURE_RANGE};
use wideseek_models::ModelName;

use crate::app::commands::COMMAND_NAMES;

/// A numeric input bounded to `[min, max]` on a fixed grid of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const TEMPERATURE_SLIDER: Slider = Slider {
    min: *TEMPERATURE_RANGE.start() as f64,
    max: *TEMPERATURE_RANGE.end() as f64,
    step: 0.1,
};

pub const MAX_TOKENS_SLIDER: Slider = Slider {
    min: *MAX_TOKENS_RANGE.start() as f64,
    max: *MAX_TOKENS_RANGE.end() as f64,
    step: 100.0,
};

impl Slider {
    /// Clamp into range, then snap to the nearest step counted from `min`.
    /// Non-finite input lands on `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).min(self.max);
        // Drop float noise such as 0.7000000000000001
        (snapped * 1e6).round() / 1e6
    }
}

pub fn temperature_slider(value: f64) -> f32 {
    TEMPERATURE_SLIDER.snap(value) as f32
}

pub fn max_tokens_slider(value: f64) -> u32 {
    MAX_TOKENS_SLIDER.snap(value) as u32
}

/// Pick a model by name or by its 1-based position in the list
pub fn pick_model(choice: &str) -> Option<ModelName> {
    if let Ok(index) = choice.trim().parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| ModelName::ALL.get(i))
            .copied();
    }
    choice.parse().ok()
}

/// Terminals on which the line editor falls back to plain reading
const UNSUPPORTED_TERMS: [&str; 3] = ["dumb", "cons25", "emacs"];

/// Whether typed input can be hidden. Masking is done by the line editor's
/// highlighter, which is bypassed when stdin is not a terminal or the
/// terminal type is one the editor does not drive.
pub fn masking_supported(term: Option<&str>, interactive: bool) -> bool {
    interactive && !term.is_some_and(|t| UNSUPPORTED_TERMS.contains(&t))
}

/// [`masking_supported`] for the current process
pub fn terminal_can_mask() -> bool {
    use std::io::IsTerminal;
    let term = std::env::var("TERM").ok();
    masking_supported(
        term.as_deref(),
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
    )
}

/// Line-editor helper: completes slash commands and masks input while a
/// secret is being typed.
#[derive(Debug, Default)]
pub struct ReplHelper {
    pub masking: bool,
}

impl ReplHelper {
    /// Command names matching a partially typed `/command`
    fn matching_commands<'a>(&self, line: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        let active = !self.masking && line.starts_with('/') && !line.contains(' ');
        COMMAND_NAMES
            .iter()
            .copied()
            .filter(move |name| active && name.starts_with(line))
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .matching_commands(&line[..pos])
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        self.matching_commands(line)
            .find(|name| name.len() > line.len())
            .map(|name| name[line.len()..].to_string())
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking {
            Cow::Owned("*".repeat(line.chars().count()))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.masking
    }
}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}
