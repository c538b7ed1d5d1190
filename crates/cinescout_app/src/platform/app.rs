use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use cinescout_core::{update, AppState, Msg};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui;

const INPUT_POLL: Duration = Duration::from_millis(25);
const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    super::logging::initialize(config.log_destination);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), &config)?;

    let _ = msg_tx.send(Msg::Started);

    // Background tick to keep the loop draining even without input.
    {
        let msg_tx = msg_tx.clone();
        thread::spawn(move || {
            while msg_tx.send(Msg::Tick).is_ok() {
                thread::sleep(TICK_INTERVAL);
            }
        });
    }

    terminal::enable_raw_mode().context("enable raw terminal mode")?;
    let result = event_loop(&msg_tx, &msg_rx, &runner);
    terminal::disable_raw_mode().context("disable raw terminal mode")?;
    result
}

fn event_loop(
    msg_tx: &mpsc::Sender<Msg>,
    msg_rx: &mpsc::Receiver<Msg>,
    runner: &EffectRunner,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut input = String::new();
    let mut stdout = io::stdout();

    loop {
        if event::poll(INPUT_POLL).context("poll terminal events")? {
            if let Event::Key(key) = event::read().context("read terminal event")? {
                match map_key(key, &mut input) {
                    KeyAction::Quit => break,
                    KeyAction::Edited => {
                        let _ = msg_tx.send(Msg::QueryEdited(input.clone()));
                    }
                    KeyAction::None => {}
                }
            }
        }

        let mut needs_redraw = false;
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.enqueue(effects);
            if state.consume_dirty() {
                needs_redraw = true;
            }
        }
        if needs_redraw {
            ui::render::draw(&mut stdout, &state.view()).context("draw view")?;
        }
    }

    Ok(())
}

enum KeyAction {
    Quit,
    Edited,
    None,
}

fn map_key(key: KeyEvent, input: &mut String) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Backspace => {
            if input.pop().is_some() {
                KeyAction::Edited
            } else {
                KeyAction::None
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.push(ch);
            KeyAction::Edited
        }
        _ => KeyAction::None,
    }
}
