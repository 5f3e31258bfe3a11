use jumpchain::{
    engine::{is_read_error, Engine, LineSource},
    protocol::{handle_command, parse_command, write_cycle, Flow},
};
use anyhow::{bail, Context, Result};
use std::io::{self, BufRead};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("watch") => watch(&args[1..]),
        None | Some("protocol") => protocol(),
        Some(other) => bail!("Unknown mode: {}", other),
    }
}

/// Apply `--<option> <value>` pairs; `--strict` alone enables strict mode
fn apply_flags(engine: &mut Engine, flags: &[String]) -> Result<()> {
    let mut i = 0;
    while i < flags.len() {
        let name = flags[i].strip_prefix("--")
            .with_context(|| format!("invalid argument {}", flags[i]))?;

        if name == "strict" {
            engine.set_option("strictmode", "true")?;
        } else {
            let value = flags.get(i + 1)
                .with_context(|| format!("missing value for --{}", name))?;
            engine.set_option(name, value)?;
            i += 1;
        }
        i += 1;
    }
    Ok(())
}

/// One cycle per stdin line: each line is a snapshot from the digitizer
fn watch(flags: &[String]) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut source = LineSource::new(stdin.lock());
    let mut engine = Engine::new();
    apply_flags(&mut engine, flags)?;

    loop {
        match engine.poll(&mut source) {
            Ok(Some(report)) => write_cycle(&report, &mut out)?,
            Ok(None) => return Ok(()),
            Err(err) => {
                if engine.options.strict_mode || is_read_error(&err) {
                    return Err(err);
                }
                eprintln!("{:#}", err);
            }
        }
    }
}

fn protocol() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let input = line?;

        let result = parse_command(&input).and_then(|cmd| match cmd {
            Some(cmd) => handle_command(&cmd, &mut engine, &mut out),
            None => Ok(Flow::Continue),
        });

        match result {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                if engine.options.strict_mode {
                    return Err(err);
                }
                eprintln!("{:#}", err);
            }
        }
    }

    Ok(())
}
