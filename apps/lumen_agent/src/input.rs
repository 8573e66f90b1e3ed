//! Interactive line commands for `watch`, standing in for the mode buttons and
//! the scene selector.

use anyhow::{anyhow, bail};
use shared::domain::{Command, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Command(Command),
    Quit,
}

/// Parses one stdin line. `scene` takes the rest of the line, so scene names
/// may contain spaces.
pub fn parse_line(line: &str) -> anyhow::Result<Option<UserInput>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let argument = Some(rest.trim()).filter(|rest| !rest.is_empty());

    let input = match (verb.to_ascii_lowercase().as_str(), argument) {
        ("quit" | "exit", None) => UserInput::Quit,
        ("mode", Some(mode)) if !mode.contains(char::is_whitespace) => {
            UserInput::Command(Command::SetMode(mode.parse::<Mode>()?))
        }
        ("mode", Some(_)) => bail!("expected a single mode: {line}"),
        ("scene", Some(scene)) => UserInput::Command(Command::SetScene(scene.to_string())),
        (verb @ ("mode" | "scene"), None) => return Err(anyhow!("usage: {verb} <name>")),
        _ => bail!("unknown input '{line}'; try 'mode <idle|assist|chat>', 'scene <name>' or 'quit'"),
    };
    Ok(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_line("mode Assist").expect("parse"),
            Some(UserInput::Command(Command::SetMode(Mode::Assist)))
        );
        assert_eq!(
            parse_line("  scene night ").expect("parse"),
            Some(UserInput::Command(Command::SetScene("night".to_string())))
        );
        assert_eq!(
            parse_line("scene   late night ").expect("parse"),
            Some(UserInput::Command(Command::SetScene("late night".to_string())))
        );
        assert_eq!(parse_line("quit").expect("parse"), Some(UserInput::Quit));
        assert_eq!(parse_line("   ").expect("parse"), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_line("mode sleep").is_err());
        assert!(parse_line("scene").is_err());
        assert!(parse_line("mode chat now").is_err());
        assert!(parse_line("quit now").is_err());
        assert!(parse_line("dance").is_err());
    }
}
