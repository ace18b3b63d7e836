//! Grid Snake headless driver
//!
//! Stands in for the input and scheduling side of the game: every line read
//! from stdin is one tick. A line may carry a direction (`up`, `down`,
//! `left`, `right` or `u`/`d`/`l`/`r`); a blank line ticks without one;
//! `quit` stops. The first stdout line is the resolved palette, then each
//! tick's snapshot follows as one JSON line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use grid_snake::consts::*;
use grid_snake::palette::{NamedColor, Palette};
use grid_snake::sim::{Direction, FieldConfig, GameSession, TickOutcome, tick};

#[derive(Parser, Debug)]
#[command(name = "grid-snake")]
#[command(version, about = "Headless snake: one stdin line per tick, JSON snapshots on stdout")]
struct Args {
    /// Fruit placement seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Field width, a multiple of the cell size
    #[arg(long, default_value_t = DEFAULT_FIELD_WIDTH)]
    width: i32,

    /// Field height, a multiple of the cell size
    #[arg(long, default_value_t = DEFAULT_FIELD_HEIGHT)]
    height: i32,

    /// Palette as JSON, e.g. '{"head": "Yellow", "fruit": "Magenta"}'
    #[arg(long)]
    palette: Option<String>,

    /// Snake head color (overrides --palette)
    #[arg(long, value_parser = parse_color)]
    head: Option<NamedColor>,

    /// Snake tail color (overrides --palette)
    #[arg(long, value_parser = parse_color)]
    tail: Option<NamedColor>,

    /// Fruit color (overrides --palette)
    #[arg(long, value_parser = parse_color)]
    fruit: Option<NamedColor>,
}

fn parse_color(s: &str) -> Result<NamedColor, String> {
    NamedColor::from_str(s).ok_or_else(|| {
        let names: Vec<_> = NamedColor::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown color {:?}, expected one of {}", s, names.join(", "))
    })
}

impl Args {
    fn field(&self) -> Result<FieldConfig> {
        Ok(FieldConfig::new(self.width, self.height)?)
    }

    fn palette(&self) -> Result<Palette> {
        let mut palette = match &self.palette {
            Some(json) => Palette::from_json(json).context("reading --palette")?,
            None => Palette::default(),
        };
        if let Some(color) = self.head {
            palette.head = color;
        }
        if let Some(color) = self.tail {
            palette.tail = color;
        }
        if let Some(color) = self.fruit {
            palette.fruit = color;
        }
        Ok(palette)
    }
}

fn run(args: Args) -> Result<u32> {
    let field = args.field()?;
    let palette = args.palette()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "Palette: head {}, tail {}, fruit {}",
        palette.head.as_str(),
        palette.tail.as_str(),
        palette.fruit.as_str()
    );

    let mut session = GameSession::with_seed(field, seed)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    writeln!(
        stdout,
        "{}",
        serde_json::json!({ "palette": palette.rgb(), "seed": seed })
    )?;
    writeln!(stdout, "{}", serde_json::to_string(&session.snapshot())?)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            log::info!("Quit requested at tick {}", session.ticks());
            break;
        }
        if !line.is_empty() {
            match line.parse::<Direction>() {
                Ok(direction) => session.set_intent(direction),
                Err(e) => log::warn!("{}", e),
            }
        }

        let result = tick(&mut session);
        writeln!(stdout, "{}", serde_json::to_string(&result)?)?;

        if let Some(TickOutcome::GameOver { cause, final_score }) = result.outcome {
            eprintln!("Game over ({:?}). Final score: {}", cause, final_score);
            return Ok(final_score);
        }
    }

    eprintln!("Stopped. Score: {}", session.score());
    Ok(session.score())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!(
        "Grid Snake (headless) starting; suggested pace {} ticks/s",
        DEFAULT_TICKS_PER_SECOND
    );

    run(args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_snake::SnakeError;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["grid-snake"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.field().unwrap(), FieldConfig::default());
        assert_eq!(args.palette().unwrap(), Palette::default());
    }

    #[test]
    fn test_field_is_validated() {
        let args = Args::try_parse_from(["grid-snake", "--width", "410", "--seed", "7"]).unwrap();
        assert_eq!(args.seed, Some(7));
        let err = args.field().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SnakeError>(),
            Some(SnakeError::InvalidConfiguration { width: 410, height: 400 })
        ));
    }

    #[test]
    fn test_non_numeric_seed_rejected() {
        assert!(Args::try_parse_from(["grid-snake", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_color_flags_override_palette_json() {
        let args = Args::try_parse_from([
            "grid-snake",
            "--palette",
            r#"{"head": "Blue", "fruit": "Cyan"}"#,
            "--head",
            "yellow",
        ])
        .unwrap();
        let palette = args.palette().unwrap();
        assert_eq!(palette.head, NamedColor::Yellow);
        assert_eq!(palette.tail, NamedColor::Green);
        assert_eq!(palette.fruit, NamedColor::Cyan);
    }

    #[test]
    fn test_bad_palette_inputs() {
        assert!(Args::try_parse_from(["grid-snake", "--fruit", "teal"]).is_err());

        let args = Args::try_parse_from(["grid-snake", "--palette", "{not json"]).unwrap();
        assert!(args.palette().is_err());
    }
}
