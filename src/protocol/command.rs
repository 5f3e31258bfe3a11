//! Protocol command parsing

use anyhow::{bail, ensure, Context, Result};

use crate::core::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    StartPos,
    Empty,
    Fen(String),
    /// Digitizer report: square and owner code
    Squares(Vec<(Square, usize)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    IsReady,
    SetOption { name: String, value: String },
    Position(Position),
    /// Raw player token; anything but `1` or `2` lists no moves
    Moves(String),
    Show(String),
    Hide,
    Display,
    GetFen,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(input: &str) -> Result<Option<Command>> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&name) = parts.first() else {
        return Ok(None);
    };
    let args = &parts[1..];

    let command = match name {
        "hello" => Command::Hello,
        "isready" => Command::IsReady,
        "setoption" => {
            ensure!(args.len() == 4 && args[0] == "name" && args[2] == "value",
                "invalid setoption command");

            Command::SetOption {
                name: args[1].to_string(),
                value: args[3].to_string(),
            }
        }
        "position" => Command::Position(parse_position(args)?),
        "moves" => {
            ensure!(args.len() == 1, "moves command requires a player");
            Command::Moves(args[0].to_string())
        }
        "show" => {
            ensure!(!args.is_empty(), "show command requires a path");
            Command::Show(args.join(" "))
        }
        "hide" => Command::Hide,
        "display" => Command::Display,
        "getfen" => Command::GetFen,
        "quit" => Command::Quit,
        cmd => bail!("Unknown command: {}", cmd),
    };

    Ok(Some(command))
}

fn parse_position(args: &[&str]) -> Result<Position> {
    ensure!(!args.is_empty(), "position command requires at least 1 argument");

    let position = match args[0] {
        "startpos" => Position::StartPos,
        "empty" => Position::Empty,
        "fen" if args.len() == 2 => Position::Fen(args[1].to_string()),
        "squares" => {
            let squares = args[1..].iter()
                .map(|token| {
                    let (square, code) = token.split_once('=')
                        .with_context(|| format!("invalid square report: {}", token))?;
                    Ok((
                        square.parse::<Square>()?,
                        code.parse::<usize>().with_context(|| format!("invalid owner code: {}", code))?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            Position::Squares(squares)
        }
        _ => bail!("invalid position command"),
    };

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test_case("hello", Command::Hello; "hello")]
    #[test_case("isready", Command::IsReady; "isready")]
    #[test_case("  display ", Command::Display; "display with padding")]
    #[test_case("moves 1", Command::Moves("1".into()); "moves for player a")]
    #[test_case("moves 7", Command::Moves("7".into()); "moves for unknown player")]
    #[test_case("show A1 C3 E5", Command::Show("A1 C3 E5".into()); "show path")]
    #[test_case("position startpos", Command::Position(Position::StartPos); "startpos")]
    #[test_case("position fen 2/P1", Command::Position(Position::Fen("2/P1".into())); "fen")]
    #[test_case(
        "setoption name chain value own",
        Command::SetOption { name: "chain".into(), value: "own".into() };
        "setoption"
    )]
    fn test_parse(input: &str, expected: Command) {
        assert_eq!(parse_command(input).unwrap(), Some(expected));
    }

    #[test]
    fn test_parse_square_report() {
        let cmd = parse_command("position squares A1=1 B2=2 C3=0").unwrap();
        assert_eq!(cmd, Some(Command::Position(Position::Squares(vec![
            (Square::new(1, 1), 1),
            (Square::new(2, 2), 2),
            (Square::new(3, 3), 0),
        ]))));
    }

    #[test_case("go"; "unknown")]
    #[test_case("moves"; "moves without player")]
    #[test_case("show"; "show without path")]
    #[test_case("position"; "position without kind")]
    #[test_case("position fen"; "fen without notation")]
    #[test_case("position squares A1"; "report without code")]
    #[test_case("position squares A1=x"; "report with bad code")]
    #[test_case("setoption name size 8"; "setoption without value")]
    fn test_parse_rejects(input: &str) {
        assert!(parse_command(input).is_err());
    }
}
