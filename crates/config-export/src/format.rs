//! Line builder for the Source-style `.cfg` dialect shared by CS2 and Dota 2.

use proconfig_settings::{Game, PlayerSettings};

/// Fractional digits kept before trailing zeros are trimmed.
const MAX_FRACTION_DIGITS: usize = 6;

/// Format a number the way it reads in a config: `2`, `0.55`, `-1.5`.
///
/// Float noise past six fractional digits is dropped, so `0.3 * 1000.0` prints as `300`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format a stored value exactly, using the shortest representation that reads back the same.
///
/// `2.0` prints as `2`, `1.23456789` and `0.0000004` print unchanged.
pub fn format_raw_number(value: f64) -> String {
    // Adding zero folds `-0` into `0`.
    format!("{}", value + 0.0)
}

/// Everything written to a config must stay on one line.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Contents of a `"..."` token: one line, no quote that could close it early.
fn quoted(text: &str) -> String {
    single_line(text).replace('"', "")
}

#[derive(Debug, Default)]
pub(crate) struct CfgLines {
    lines: Vec<String>,
}

impl CfgLines {
    /// Start a document with the `// <nickname> (<GAME>) Config` header and a blank line.
    pub(crate) fn with_header(nickname: &str, game: &Game) -> Self {
        let mut lines = Self::default();
        lines.comment(&format!(
            "{} ({}) Config",
            single_line(nickname),
            game.id().to_uppercase()
        ));
        lines.blank();
        lines
    }

    pub(crate) fn comment(&mut self, text: &str) {
        self.lines.push(format!("// {text}"));
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// `<command> "<value>"`
    pub(crate) fn setting(&mut self, command: &str, value: &str) {
        self.lines
            .push(format!("{} \"{}\"", single_line(command), quoted(value)));
    }

    /// Computed value, float noise trimmed.
    pub(crate) fn number(&mut self, command: &str, value: f64) {
        self.setting(command, &format_number(value));
    }

    /// Stored value, written exactly.
    pub(crate) fn raw_number(&mut self, command: &str, value: f64) {
        self.setting(command, &format_raw_number(value));
    }

    /// `bind "<key>" "<action>"`
    pub(crate) fn bind(&mut self, key: &str, action: &str) {
        self.lines
            .push(format!("bind \"{}\" \"{}\"", quoted(key), quoted(action)));
    }

    /// Custom binds and passthrough commands, shared by every exporter.
    pub(crate) fn trailer(&mut self, settings: &PlayerSettings) {
        let custom: Vec<_> = settings
            .custom_binds
            .iter()
            .filter(|bind| !bind.key.trim().is_empty())
            .collect();
        if !custom.is_empty() {
            self.blank();
            self.comment("Custom");
            for bind in custom {
                self.bind(bind.key.trim(), &bind.label);
            }
        }

        let extra: Vec<_> = settings
            .config_commands
            .iter()
            .filter(|command| !command.command.trim().is_empty())
            .collect();
        if !extra.is_empty() {
            self.blank();
            self.comment("Extra");
            for command in extra {
                self.setting(command.command.trim(), &command.value);
            }
        }
    }

    /// `\n`-separated document with a single trailing newline.
    pub(crate) fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
