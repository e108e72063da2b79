//! Line-oriented terminal frontend for the diagram surface.
//!
//! Each input line is one discrete event or menu action. Modal dialogs are
//! answered by reading a single line. An empty line accepts the bracketed
//! default, or cancels when the prompt shows none. End of input always cancels.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use log::{debug, warn};
use thiserror::Error;

use mindmap::{
    DiagramSurface, Dialogs, InputEvent, MenuAction, Notification, color::Color,
    geometry::{Point, Size},
};

const HELP: &str = "\
commands:
  press X Y            primary button press
  rpress X Y           secondary button press
  release X Y [popup]  button release, optionally as the popup gesture
  dclick X Y           double click (edit node text)
  drag X Y             pointer drag
  dismiss              dismiss the context menu
  resize W H           resize the canvas
  menu ACTION          add-child | export-xml | delete | color | export-png
  list                 show the diagram
  help                 show this text
  quit                 leave the shell";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    #[error("invalid canvas dimension '{0}'")]
    InvalidDimension(String),

    #[error("{0}")]
    InvalidMenuAction(String),

    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

/// A parsed shell line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(InputEvent),
    Menu(MenuAction),
    Resize(Size),
    List,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::MissingArgument("command"));
        };

        let command = match name {
            "press" => Self::Event(InputEvent::PrimaryPress(point(&mut words)?)),
            "rpress" => Self::Event(InputEvent::SecondaryPress(point(&mut words)?)),
            "release" => {
                let point = point(&mut words)?;
                let popup_trigger = match words.next() {
                    None => false,
                    Some("popup") => true,
                    Some(other) => return Err(CommandError::Unexpected(other.to_string())),
                };
                Self::Event(InputEvent::Release {
                    point,
                    popup_trigger,
                })
            }
            "dclick" => Self::Event(InputEvent::DoubleClick(point(&mut words)?)),
            "drag" => Self::Event(InputEvent::DragMove(point(&mut words)?)),
            "dismiss" => Self::Event(InputEvent::PopupDismiss(Point::default())),
            "menu" => {
                let action = words
                    .next()
                    .ok_or(CommandError::MissingArgument("menu action"))?;
                Self::Menu(action.parse().map_err(CommandError::InvalidMenuAction)?)
            }
            "resize" => Self::Resize(size(&mut words)?),
            "list" => Self::List,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Unexpected(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn point<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Point, CommandError> {
    let mut coordinate = |name| {
        let word = words.next().ok_or(CommandError::MissingArgument(name))?;
        word.parse::<i32>()
            .map_err(|_| CommandError::InvalidCoordinate(word.to_string()))
    };
    let x = coordinate("x coordinate")?;
    let y = coordinate("y coordinate")?;
    Ok(Point::new(x, y))
}

fn size<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Size, CommandError> {
    let mut dimension = |name| {
        let word = words.next().ok_or(CommandError::MissingArgument(name))?;
        word.parse::<u16>()
            .ok()
            .filter(|&value| value > 0)
            .map(i32::from)
            .ok_or_else(|| CommandError::InvalidDimension(word.to_string()))
    };
    let width = dimension("width")?;
    let height = dimension("height")?;
    Ok(Size::new(width, height))
}

/// Terminal input and output, doubling as the dialog collaborator.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts and reads an answer; `None` at end of input or on a read error.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        let answer = write!(self.output, "{prompt}")
            .and_then(|()| self.output.flush())
            .and_then(|()| self.read_line());

        match answer {
            Ok(line) => line,
            Err(err) => {
                warn!(err:err; "Terminal prompt failed, treating as cancelled");
                None
            }
        }
    }

    fn say(&mut self, message: impl std::fmt::Display) {
        if let Err(err) = writeln!(self.output, "{message}") {
            warn!(err:err; "Failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> Dialogs for Terminal<R, W> {
    fn prompt_text(&mut self, label: &str, default: Option<&str>) -> Option<String> {
        let answer = match default {
            Some(default) => self.ask(&format!("{label} [{default}] "))?,
            None => self.ask(&format!("{label} "))?,
        };

        if answer.is_empty() {
            return default.map(str::to_string);
        }
        Some(answer)
    }

    fn prompt_color(&mut self, default: Color) -> Option<Color> {
        let answer = self.ask(&format!("Choose a color [{default}] "))?;
        if answer.trim().is_empty() {
            return Some(default);
        }
        match Color::new(answer.trim()) {
            Ok(color) => Some(color),
            Err(err) => {
                self.say(err);
                None
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.say(notification);
    }
}

/// Reads commands and applies them to a surface until `quit` or end of input.
pub struct Shell<R, W> {
    surface: DiagramSurface,
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(surface: DiagramSurface, input: R, output: W) -> Self {
        Self {
            surface,
            terminal: Terminal::new(input, output),
        }
    }

    pub fn surface(&self) -> &DiagramSurface {
        &self.surface
    }

    pub fn into_surface(self) -> DiagramSurface {
        self.surface
    }

    /// Runs the read-eval loop.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading commands from the terminal fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.redraw();

        loop {
            write!(self.terminal.output, "> ")?;
            self.terminal.output.flush()?;

            let Some(line) = self.terminal.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command),
                Err(err) => self.terminal.say(format_args!("error: {err}")),
            }

            if self.surface.take_redraw() {
                self.redraw();
            }
        }

        Ok(())
    }

    fn execute(&mut self, command: Command) {
        debug!(command:?; "Executing shell command");
        match command {
            Command::Event(event) => self.surface.handle_event(event, &mut self.terminal),
            Command::Menu(action) => self.surface.handle_menu(action, &mut self.terminal),
            Command::Resize(size) => self.surface.resize(size),
            Command::List => self.redraw(),
            Command::Help => self.terminal.say(HELP),
            Command::Quit => {}
        }
    }

    /// Prints the active nodes in drawing order.
    fn redraw(&mut self) {
        self.surface.take_redraw();
        let lines = describe(&self.surface);
        for line in lines {
            self.terminal.say(line);
        }
    }
}

fn describe(surface: &DiagramSurface) -> Vec<String> {
    if surface.is_empty() {
        return vec!["(empty diagram)".to_string()];
    }

    surface
        .active_nodes()
        .map(|(id, node)| {
            let children: Vec<String> = node
                .children()
                .iter()
                .filter(|&&child| surface.is_active(child))
                .map(ToString::to_string)
                .collect();
            let marker = if surface.selected() == Some(id) { "*" } else { " " };
            format!(
                "{marker}{id} \"{}\" at ({}, {}) {}x{} color {} children [{}]",
                node.text(),
                node.position().x(),
                node.position().y(),
                node.size().width(),
                node.size().height(),
                node.color().to_hex_rgb(),
                children.join(", "),
            )
        })
        .collect()
}
