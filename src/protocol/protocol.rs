//! Protocol implementation

use std::io::Write;
use anyhow::{Context, Result};

use crate::{
    core::{BoardSnapshot, FromIndex, Owner, ToIndex},
    engine::{CycleReport, Engine, EngineOptions},
};

use super::command::{Command, Position};

/// Whether the command loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle a protocol command, writing responses to `out`
pub fn handle_command<W: Write>(cmd: &Command, engine: &mut Engine, out: &mut W) -> Result<Flow> {
    match cmd {
        Command::Hello => {
            writeln!(out, "id name jumpchain")?;
            for name in EngineOptions::NAMES {
                if let Some(line) = engine.options.describe(name) {
                    writeln!(out, "{}", line)?;
                }
            }
            writeln!(out, "hellook")?;
        }
        Command::IsReady => {
            writeln!(out, "readyok")?;
        }
        Command::SetOption { name, value } => {
            engine.set_option(name, value)?;
        }
        Command::Position(position) => {
            match position {
                Position::StartPos => engine.reset_board()?,
                Position::Empty => engine.clear_board()?,
                Position::Fen(notation) => {
                    engine.set_snapshot(BoardSnapshot::from_notation(notation)?)?;
                }
                Position::Squares(squares) => {
                    let snapshot = BoardSnapshot::from_codes(engine.options.size, squares.iter().copied())
                        .context("invalid square report")?;
                    engine.set_snapshot(snapshot)?;
                }
            }
        }
        Command::Moves(player) => {
            let player = Owner::from_index_str(player).unwrap_or(Owner::Empty);
            let (moves, stats) = engine.moves_with_stats(player);

            for sequence in &moves {
                writeln!(out, "move {}", sequence)?;
            }
            if engine.options.debug {
                writeln!(
                    out,
                    "info string nodes {} depth {} sequences {}",
                    stats.nodes, stats.max_depth, moves.len()
                )?;
            }
            writeln!(out, "movesok {}", moves.len())?;
        }
        Command::Show(path) => {
            engine.select(path)?;
            write!(out, "{}", engine.render())?;
        }
        Command::Hide => {
            engine.clear_selection();
        }
        Command::Display => {
            write!(out, "{}", engine.render())?;
        }
        Command::GetFen => {
            writeln!(out, "{}", engine.get_fen())?;
        }
        Command::Quit => {
            return Ok(Flow::Quit);
        }
    }

    out.flush()?;
    Ok(Flow::Continue)
}

/// Write one cycle of watch mode
pub fn write_cycle<W: Write>(report: &CycleReport, out: &mut W) -> Result<()> {
    writeln!(out, "cycle {}", report.cycle)?;
    for player in Owner::players() {
        let code = player.to_index()?;
        if let Some(moves) = report.moves(player) {
            for sequence in moves {
                writeln!(out, "player {} {}", code, sequence)?;
            }
        }
    }
    writeln!(out, "cycleok")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::command::parse_command;
    use indoc::indoc;

    fn run(engine: &mut Engine, script: &str) -> String {
        let mut out = Vec::new();
        for line in script.lines() {
            if let Some(cmd) = parse_command(line).unwrap() {
                handle_command(&cmd, engine, &mut out).unwrap();
            }
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_hello_lists_options() {
        let mut engine = Engine::new();
        let output = run(&mut engine, "hello");
        assert!(output.starts_with("id name jumpchain\n"));
        assert!(output.contains("option name chain type combo default first var first var own"));
        assert!(output.ends_with("hellook\n"));
    }

    #[test]
    fn test_moves_for_chained_capture() {
        let mut engine = Engine::new();
        let output = run(&mut engine, indoc! {"
            position fen 8/8/8/8/3p4/8/1p6/P7
            moves 1
        "});
        assert_eq!(output, "move A1 C3\nmove A1 C3 E5\nmovesok 2\n");
    }

    #[test]
    fn test_unknown_player_lists_nothing() {
        let mut engine = Engine::new();
        let output = run(&mut engine, indoc! {"
            position startpos
            moves 0
            moves 3
            moves two
        "});
        assert_eq!(output, "movesok 0\nmovesok 0\nmovesok 0\n");
    }

    #[test]
    fn test_debug_prints_search_counters() {
        let mut engine = Engine::new();
        let output = run(&mut engine, indoc! {"
            setoption name debug value true
            position fen 8/8/8/8/3p4/8/1p6/P7
            moves 1
        "});
        assert!(output.contains("info string nodes 3 depth 2 sequences 2\n"));
    }

    #[test]
    fn test_square_report_position() {
        let mut engine = Engine::new();
        run(&mut engine, "setoption name size value 3");
        let output = run(&mut engine, indoc! {"
            position squares A1=1 B2=2 C3=0 A3=0 C1=0
            moves 1
            getfen
        "});
        assert_eq!(output, "move A1 C3\nmovesok 1\n3/1p1/P2\n");
        assert!(!engine.snapshot.is_complete());
    }

    #[test]
    fn test_bad_square_report_is_rejected() {
        let mut engine = Engine::new();
        let cmd = parse_command("position squares A1=4").unwrap().unwrap();
        let mut out = Vec::new();
        assert!(handle_command(&cmd, &mut engine, &mut out).is_err());
    }

    #[test]
    fn test_quit() {
        let mut engine = Engine::new();
        let mut out = Vec::new();
        let flow = handle_command(&Command::Quit, &mut engine, &mut out).unwrap();
        assert_eq!(flow, Flow::Quit);
    }

    #[test]
    fn test_write_cycle() {
        let mut engine = Engine::new();
        let mut source = vec![BoardSnapshot::from_notation("8/8/8/8/8/8/1p6/P7").unwrap()].into_iter();
        let report = engine.poll(&mut source).unwrap().unwrap();

        let mut out = Vec::new();
        write_cycle(&report, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cycle 1\nplayer 1 A1 C3\nplayer 2 B2 C1\ncycleok\n"
        );
    }
}
