//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go programs. This
//! module implements the subset of GTP version 2 that a rules-only engine can
//! answer, so graphical clients can use it as a referee.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new game on a board of the given size
//! - `clear_board` - Reset the board to empty
//! - `play <color> <vertex>` - Play a move (`pass` is accepted as a vertex)
//! - `showboard` - Print the current position
//! - `final_score` - Score the position and end the game
//! - `resign <color>` - End the game with `color` resigning
//!
//! ## Example
//!
//! ```ignore
//! use go_rules::gtp::GtpEngine;
//! let mut engine = GtpEngine::new();
//! engine.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{Color, Point};
use crate::constants::COLUMN_LETTERS;
use crate::engine::{BoardEngine, EndReason, EngineConfig, GameStatus};
use crate::error::MoveError;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "final_score",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "resign",
    "showboard",
    "version",
];

/// A parsed GTP vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vertex {
    Pass,
    Point(Point),
}

/// Parse a vertex such as `D4` or `pass` for a board of the given size.
///
/// Columns are letters starting at `A` and skipping `I`; rows count up from
/// the bottom edge. Returns `None` for malformed or off-board vertices.
pub fn parse_vertex(s: &str, size: usize) -> Option<Vertex> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }

    let bytes = s.as_bytes();
    let (&col_char, row_digits) = bytes.split_first()?;
    let x = COLUMN_LETTERS
        .iter()
        .position(|&c| c == col_char.to_ascii_uppercase())?;
    let row: usize = std::str::from_utf8(row_digits).ok()?.parse().ok()?;

    if x >= size || row == 0 || row > size {
        return None;
    }
    Some(Vertex::Point((x, size - row)))
}

/// Format a point as a GTP vertex (e.g. `D4`).
pub fn format_vertex((x, y): Point, size: usize) -> String {
    format!("{}{}", COLUMN_LETTERS[x] as char, size - y)
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// GTP engine state.
pub struct GtpEngine {
    game: BoardEngine,
    config: EngineConfig,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a GTP engine with the default board size and rules.
    pub fn new() -> Self {
        Self {
            game: BoardEngine::default(),
            config: EngineConfig::default(),
        }
    }

    /// Create a GTP engine from an explicit configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, MoveError> {
        Ok(Self {
            game: BoardEngine::with_config(config)?,
            config,
        })
    }

    /// The game being refereed.
    pub fn game(&self) -> &BoardEngine {
        &self.game
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            debug!(%command, success, "gtp command");

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                let config = EngineConfig { size, ..self.config };
                match BoardEngine::with_config(config) {
                    Ok(game) => {
                        self.game = game;
                        self.config = config;
                        (true, String::new())
                    }
                    Err(_) => (false, "unacceptable size".to_string()),
                }
            }

            "clear_board" => {
                self.game.reset();
                (true, String::new())
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let Some(color) = parse_color(color) else {
                    return (false, "invalid color".to_string());
                };
                let result = match parse_vertex(vertex, self.game.size()) {
                    Some(Vertex::Pass) => self.game.pass(),
                    Some(Vertex::Point((x, y))) => self.game.apply_move(x, y, color).map(|_| ()),
                    None => return (false, "invalid vertex".to_string()),
                };
                match result {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "final_score" => {
                if !self.game.is_over() {
                    if let Err(e) = self.game.finish() {
                        return (false, e.to_string());
                    }
                }
                match self.game.status() {
                    GameStatus::Ended(outcome) => match outcome.reason {
                        EndReason::Scored(score) => (true, score.to_string()),
                        EndReason::Resignation(Color::Black) => (true, "W+R".to_string()),
                        EndReason::Resignation(Color::White) => (true, "B+R".to_string()),
                    },
                    GameStatus::InProgress => (false, "game is still in progress".to_string()),
                }
            }

            "resign" => {
                let Some(color) = args.first().and_then(|c| parse_color(c)) else {
                    return (false, "invalid color".to_string());
                };
                match self.game.resign(color) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_engine() -> GtpEngine {
        GtpEngine::with_config(EngineConfig {
            size: 5,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_vertex() {
        assert_eq!(parse_vertex("A1", 9), Some(Vertex::Point((0, 8))));
        assert_eq!(parse_vertex("a9", 9), Some(Vertex::Point((0, 0))));
        assert_eq!(parse_vertex("J9", 9), Some(Vertex::Point((8, 0))));
        assert_eq!(parse_vertex("PASS", 9), Some(Vertex::Pass));
        assert_eq!(parse_vertex("K1", 9), None);
        assert_eq!(parse_vertex("A0", 9), None);
        assert_eq!(parse_vertex("A10", 9), None);
        assert_eq!(parse_vertex("I5", 19), None);
        assert_eq!(parse_vertex("", 9), None);
    }

    #[test]
    fn test_format_vertex_skips_i() {
        assert_eq!(format_vertex((7, 4), 9), "H5");
        assert_eq!(format_vertex((8, 4), 9), "J5");
        assert_eq!(format_vertex((0, 18), 19), "A1");
    }

    #[test]
    fn test_name_command() {
        let mut engine = GtpEngine::new();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "go-rules");
    }

    #[test]
    fn test_known_command() {
        let mut engine = GtpEngine::new();

        let (success, response) = engine.execute("known_command", &["play"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_boardsize() {
        let mut engine = GtpEngine::new();

        let (success, _) = engine.execute("boardsize", &["9"]);
        assert!(success);
        assert_eq!(engine.game().size(), 9);

        let (success, _) = engine.execute("boardsize", &["40"]);
        assert!(!success);
        assert_eq!(engine.game().size(), 9);
    }

    #[test]
    fn test_play_capture_and_clear() {
        let mut engine = small_engine();
        for (color, vertex) in [("b", "B3"), ("w", "C3"), ("b", "D3"), ("w", "E5"), ("b", "C4")] {
            let (success, _) = engine.execute("play", &[color, vertex]);
            assert!(success);
        }
        let (success, _) = engine.execute("play", &["b", "C2"]);
        assert!(success);
        assert_eq!(engine.game().get(2, 2), None);

        let (success, response) = engine.execute("play", &["w", "C2"]);
        assert!(!success);
        assert!(response.contains("not EMPTY"));

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(engine.game().board().count(Color::Black), 0);
    }

    #[test]
    fn test_final_score_ends_game() {
        let mut engine = small_engine();
        engine.execute("play", &["black", "C3"]);
        let (success, response) = engine.execute("final_score", &[]);
        assert!(success);
        assert_eq!(response, "B+25");

        let (success, _) = engine.execute("play", &["white", "A1"]);
        assert!(!success);
    }

    #[test]
    fn test_resign() {
        let mut engine = small_engine();
        let (success, _) = engine.execute("resign", &["white"]);
        assert!(success);
        let (_, response) = engine.execute("final_score", &[]);
        assert_eq!(response, "B+R");
    }

    #[test]
    fn test_run_loop() {
        let mut engine = small_engine();
        let input = b"1 protocol_version\n# comment\n\nplay b A1\n2 foo\nquit\nname\n";
        let mut output = Vec::new();
        engine.run(&input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "=1 2\n\n= \n\n?2 unknown command: foo\n\n= \n\n");
    }
}
