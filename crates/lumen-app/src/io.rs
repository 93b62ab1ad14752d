use std::io::BufRead;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, bail};
use kanal::Sender;
use lumen_config::viewer::ViewerConfig;
use lumen_types::{AppEvent, Point, Rect, Selection};

#[derive(Debug)]
pub enum ScriptStep {
    Event(AppEvent),
    /// Pause the script, letting in-flight translations settle
    Wait(Duration),
}

/// Parse one line of the viewer script.
///
/// ```text
/// load
/// select <x> <y> <width> <height> <text...>
/// clear
/// click <x> <y>
/// brightness <percent>
/// wait <milliseconds>
/// quit
/// ```
///
/// Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, viewer: &ViewerConfig) -> anyhow::Result<Option<ScriptStep>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim_start();

    let event = match command {
        "wait" => {
            let ms = rest
                .parse::<u64>()
                .with_context(|| format!("Invalid wait '{}'", rest))?;
            return Ok(Some(ScriptStep::Wait(Duration::from_millis(ms))));
        }
        "load" => AppEvent::ViewerLoaded,
        "quit" => AppEvent::Quit,
        "clear" => AppEvent::SelectionChanged(selection(String::new(), Rect::default(), viewer)),
        "click" => {
            let [x, y] = numbers::<2>(rest)?;
            AppEvent::PointerClick(Point::new(x, y))
        }
        "brightness" => {
            let percent = rest
                .parse::<u8>()
                .with_context(|| format!("Invalid brightness '{}'", rest))?;
            AppEvent::BrightnessInput(percent)
        }
        "select" => {
            let mut remaining = rest;
            let mut rect = [0.0; 4];
            for slot in rect.iter_mut() {
                let (part, tail) = remaining
                    .split_once(char::is_whitespace)
                    .unwrap_or((remaining, ""));
                if part.is_empty() {
                    bail!("select needs x, y, width and height");
                }
                *slot = parse_number(part)?;
                remaining = tail.trim_start();
            }
            let text = remaining.to_string();
            let [x, y, width, height] = rect;
            AppEvent::SelectionChanged(selection(text, Rect::new(x, y, width, height), viewer))
        }
        other => bail!("Unknown command '{}'", other),
    };

    Ok(Some(ScriptStep::Event(event)))
}

fn selection(text: String, range: Rect, viewer: &ViewerConfig) -> Selection {
    Selection::new(text, range).with_surface(Rect::new(
        viewer.surface_left,
        viewer.surface_top,
        viewer.viewport_width - viewer.surface_left,
        viewer.viewport_height - viewer.surface_top,
    ))
}

fn numbers<const N: usize>(input: &str) -> anyhow::Result<[f64; N]> {
    let mut values = [0.0; N];
    let mut parts = input.split_whitespace();
    for slot in values.iter_mut() {
        *slot = parse_number(parts.next().context("Missing coordinate")?)?;
    }
    if parts.next().is_some() {
        bail!("Too many coordinates");
    }
    Ok(values)
}

fn parse_number(part: &str) -> anyhow::Result<f64> {
    part.parse::<f64>()
        .with_context(|| format!("Invalid number '{}'", part))
}

/// Feed script lines from `reader` into the app as events.
///
/// Runs on a plain thread: blocking reads on stdin cannot be cancelled and
/// must not hold up runtime shutdown. End of input is reported as `Quit`.
pub fn spawn_script_reader<R>(
    reader: R,
    viewer: ViewerConfig,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for (number, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read script input: {}", e);
                    break;
                }
            };

            match parse_line(&line, &viewer) {
                Ok(Some(ScriptStep::Event(event))) => {
                    if event_tx.send(event).is_err() {
                        return;
                    }
                }
                Ok(Some(ScriptStep::Wait(delay))) => thread::sleep(delay),
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping line {}: {:#}", number + 1, e),
            }
        }

        tracing::info!("Script input finished");
        let _ = event_tx.send(AppEvent::Quit);
    })
}
