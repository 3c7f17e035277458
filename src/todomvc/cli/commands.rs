//! # Session driver
//!
//! `run()` parses arguments, sets up logging and configuration, then either handles the `config`
//! subcommand or runs a session over stdin.
//!
//! A [`Session`] owns the one mutable [`Store`] in the program plus the host-side focus state.
//! It writes to any `Write`, which is how the tests below drive it without a terminal.

use super::input::{parse_edit_line, parse_line, HostCommand, HELP};
use super::render::{Frame, Message, Renderer};
use super::setup::{Cli, Commands, OutputMode};
use clap::Parser;
use console::Term;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use todomvc::actions::{Action, Effect};
use todomvc::config::{self, ColorChoice, TodoConfig};
use todomvc::error::Result;
use todomvc::model::{Filter, Snapshot, TaskId};
use todomvc::store::Store;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive, e.g. `TODOMVC_LOG=todomvc=trace`.
pub const LOG_ENV: &str = "TODOMVC_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = config::config_dir()?;
    let config = TodoConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), ?config, "loaded config");

    let color = cli.color.map(ColorChoice::from).unwrap_or(config.color);
    let renderer = Renderer::new(use_color(color), config.line_width);

    match &cli.command {
        Some(Commands::Config { key, value }) => handle_config(
            &renderer,
            &config_dir,
            config,
            key.as_deref(),
            value.as_deref(),
        ),
        None => run_session(&cli, &config, renderer),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Auto => Term::stdout().features().colors_supported(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

fn handle_config(
    renderer: &Renderer,
    config_dir: &Path,
    mut config: TodoConfig,
    key: Option<&str>,
    value: Option<&str>,
) -> Result<()> {
    match (key, value) {
        (None, _) => println!("{}", renderer.render_config(&config.entries())),
        (Some(key), None) => {
            let value = config.get(key)?;
            println!("{}", renderer.render_config(&[(key, value)]));
        }
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(config_dir)?;
            info!(key, value, "config updated");
            println!(
                "{}",
                renderer.render_messages(&[Message::success(format!("{} = {}", key, value))])
            );
        }
    }
    Ok(())
}

fn run_session(cli: &Cli, config: &TodoConfig, renderer: Renderer) -> Result<()> {
    let initial = if cli.demo || config.demo {
        Snapshot::demo()
    } else {
        Snapshot::default()
    };

    let mut store = Store::new(initial);
    let filter = cli.filter.map(Filter::from).unwrap_or(config.filter);
    if filter != store.snapshot().filter {
        store.dispatch(Action::SetFilter(filter));
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = io::stdout();
    let mut session = Session::new(store, renderer, cli.output, stdout.lock());

    session.show(None)?;
    if interactive && cli.output == OutputMode::Text {
        session.notify(Message::info("Type `help` for commands."))?;
    }

    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        if interactive {
            session.write_prompt()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if let Flow::Quit = session.handle_line(&line)? {
            break;
        }
    }

    info!(dispatched = session.store.dispatched(), "session ended");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Session<W: Write> {
    store: Store,
    renderer: Renderer,
    output: OutputMode,
    /// Task whose edit field currently has focus. Lines go to its title while set.
    focused: Option<TaskId>,
    out: W,
}

impl<W: Write> Session<W> {
    fn new(store: Store, renderer: Renderer, output: OutputMode, out: W) -> Self {
        Self {
            store,
            renderer,
            output,
            focused: None,
            out,
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if let Some(id) = self.focused.take() {
            let effects = self.store.dispatch_all(parse_edit_line(id, line));
            let effect = self.execute(effects);
            self.show(effect)?;
            return Ok(Flow::Continue);
        }

        match parse_line(line) {
            Ok(HostCommand::Dispatch(actions)) => {
                let effects = self.store.dispatch_all(actions);
                let effect = self.execute(effects);
                self.show(effect)?;
            }
            Ok(HostCommand::Show) => self.show(None)?,
            Ok(HostCommand::State) => self.dump_state()?,
            Ok(HostCommand::Help) => match self.output {
                OutputMode::Text => writeln!(self.out, "{}", self.renderer.render_help(&HELP))?,
                OutputMode::Json => eprintln!("{}", self.renderer.render_help(&HELP)),
            },
            Ok(HostCommand::Quit) => return Ok(Flow::Quit),
            Ok(HostCommand::Nothing) => {}
            Err(e) => {
                debug!(error = %e, "rejected input");
                self.notify(Message::warning(e.to_string()))?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Runs the effects the store handed back and returns the last one for the frame.
    ///
    /// Only one field can hold focus, so the latest request wins. A request for a task that is
    /// gone or no longer editing by the time it runs is dropped.
    fn execute(&mut self, effects: Vec<Effect>) -> Option<Effect> {
        let mut last = None;
        for effect in effects {
            match effect {
                Effect::FocusEditField { id } => {
                    let editing = self
                        .store
                        .snapshot()
                        .task(id)
                        .is_some_and(|task| task.editing);
                    if editing {
                        self.focused = Some(id);
                    } else {
                        debug!(%id, "focus request dropped");
                    }
                }
            }
            last = Some(effect);
        }
        last
    }

    fn show(&mut self, effect: Option<Effect>) -> Result<()> {
        match self.output {
            OutputMode::Text => {
                writeln!(
                    self.out,
                    "{}",
                    self.renderer.render_todos(self.store.snapshot())
                )?;
                if let Some(id) = self.focused {
                    self.notify(Message::info(format!(
                        "Editing #{}: type a new title, or press Enter to keep it",
                        id
                    )))?;
                }
            }
            OutputMode::Json => {
                let frame = Frame::new(self.store.snapshot(), effect, self.focused);
                writeln!(self.out, "{}", serde_json::to_string(&frame)?)?;
            }
        }
        Ok(())
    }

    /// Pretty JSON for people, one compact line when stdout is a frame stream.
    fn dump_state(&mut self) -> Result<()> {
        let snapshot = self.store.snapshot();
        let json = match self.output {
            OutputMode::Text => serde_json::to_string_pretty(snapshot)?,
            OutputMode::Json => serde_json::to_string(snapshot)?,
        };
        writeln!(self.out, "{}", json)?;
        Ok(())
    }

    /// Host feedback. In JSON mode it goes to stderr so stdout stays one frame per line.
    fn notify(&mut self, message: Message) -> Result<()> {
        match self.output {
            OutputMode::Text => {
                writeln!(self.out, "{}", self.renderer.render_messages(&[message]))?;
            }
            OutputMode::Json => eprintln!("{}", message.content),
        }
        Ok(())
    }

    fn write_prompt(&mut self) -> Result<()> {
        write!(self.out, "{} ", self.renderer.prompt(self.focused))?;
        self.out.flush()?;
        Ok(())
    }
}
