//! Event loop hosting a toggle group in the terminal.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::{Stream, StreamExt};
use log::{debug, error, info, warn};
use multibutton::{KeyCombo, MultiButtonStyle, Rgb, ToggleGroup};
use thiserror::Error;

use crate::config::DemoConfig;
use crate::layout::{ButtonRect, hit_test, layout_row};
use crate::render::draw;
use crate::store::{StateStore, StoreError};
use crate::terminal::TerminalGuard;

const ROW_X: u16 = 2;
const ROW_Y: u16 = 1;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Group(#[from] multibutton::MultiButtonError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("no state path given and no platform data directory available")]
    NoStatePath,
}

fn default_style() -> MultiButtonStyle {
    MultiButtonStyle::new()
        .background(Rgb::new(48, 48, 56))
        .background_end(Rgb::new(64, 48, 56))
        .active_background(Rgb::new(0, 110, 200))
        .text(Rgb::new(235, 235, 235))
}

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Redraw,
    Quit,
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Apply one terminal event to the group.
fn handle_event(group: &mut ToggleGroup, rects: &[ButtonRect], event: Event) -> Flow {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if is_quit(&key) {
                return Flow::Quit;
            }
            if let Some(combo) = KeyCombo::from_crossterm(key) {
                group.on_key(&combo);
            }
            Flow::Continue
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = hit_test(rects, mouse.column, mouse.row) {
                group.on_click(index);
            }
            Flow::Continue
        }
        Event::Resize(width, height) => {
            debug!("Resize to {}x{}", width, height);
            Flow::Redraw
        }
        _ => Flow::Continue,
    }
}

/// The hosting view: builds the group, restores it, runs until quit, saves.
pub struct DemoApp {
    config: DemoConfig,
    store: StateStore,
}

impl DemoApp {
    pub fn new(config: DemoConfig, store: StateStore) -> Self {
        Self { config, store }
    }

    /// Build the group and apply any saved selection.
    pub fn build_group(&self) -> Result<ToggleGroup, DemoError> {
        let mut group =
            ToggleGroup::new(self.config.labels.iter().cloned())?.with_style(default_style());

        if self.config.reset {
            info!("Reset requested, discarding saved selection");
            self.store.clear()?;
            return Ok(group);
        }

        match self.store.load() {
            Ok(Some(state)) => {
                group.restore_state(state);
                info!("Restored selection: {}", group.active().label());
            }
            Ok(None) => debug!("No saved selection at {}", self.store.path().display()),
            Err(e) => warn!("Ignoring unreadable saved selection: {}", e),
        }
        group.clear_dirty();
        Ok(group)
    }

    /// Capture the group's selection and persist it.
    pub fn save(&self, group: &ToggleGroup) -> Result<(), DemoError> {
        self.store.save(&group.capture_state())?;
        info!("Saved selection: {}", group.active().label());
        Ok(())
    }

    /// Run until the user quits. The selection is saved on every exit path.
    pub async fn run(self) -> Result<(), DemoError> {
        let mut group = self.build_group()?;
        let status = attach_status(&mut group);
        let result = self.present(&mut group, &status).await;
        self.teardown(group, result)
    }

    /// Own the terminal for the lifetime of the loop.
    async fn present(
        &self,
        group: &mut ToggleGroup,
        status: &RefCell<Option<String>>,
    ) -> Result<(), DemoError> {
        let rects = layout_row(group.labels(), ROW_X, ROW_Y);
        let mut terminal = TerminalGuard::new()?;
        event_loop(group, &rects, terminal.stdout(), EventStream::new(), status).await
    }

    /// Save the selection, then report the loop's outcome.
    fn teardown(&self, mut group: ToggleGroup, result: Result<(), DemoError>) -> Result<(), DemoError> {
        group.clear_listener();
        let saved = self.save(&group);
        match (result, saved) {
            (Ok(()), saved) => saved,
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(save_err)) => {
                error!("Failed to save selection: {}", save_err);
                Err(e)
            }
        }
    }
}

/// Install a listener that records the last change as `"previous -> current"`.
pub fn attach_status(group: &mut ToggleGroup) -> Rc<RefCell<Option<String>>> {
    let status = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&status);
    group.set_listener(move |checked, unchecked| {
        info!("Checked {:?}, unchecked {:?}", checked.label(), unchecked.label());
        *sink.borrow_mut() = Some(format!("{} -> {}", unchecked.label(), checked.label()));
    });
    status
}

/// Draw, then apply events until quit, the stream ends, or an error.
async fn event_loop<W, S>(
    group: &mut ToggleGroup,
    rects: &[ButtonRect],
    out: &mut W,
    mut events: S,
    status: &RefCell<Option<String>>,
) -> Result<(), DemoError>
where
    W: Write,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    draw(out, group, rects, status.borrow().as_deref())?;

    while let Some(event) = events.next().await {
        match handle_event(group, rects, event?) {
            Flow::Quit => break,
            Flow::Redraw => {}
            Flow::Continue if group.is_dirty() => {}
            Flow::Continue => continue,
        }
        draw(out, group, rects, status.borrow().as_deref())?;
        group.clear_dirty();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent};
    use futures::stream;
    use multibutton::SavedState;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app(dir: &tempfile::TempDir, labels: &[&str]) -> DemoApp {
        let config = DemoConfig {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            state_path: Some(dir.path().join("selection.bin")),
            ..DemoConfig::default()
        };
        let store = StateStore::new(dir.path().join("selection.bin"));
        DemoApp::new(config, store)
    }

    #[test]
    fn quit_keys() {
        let mut group = ToggleGroup::new(["A", "B"]).unwrap();
        assert_eq!(handle_event(&mut group, &[], key(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(handle_event(&mut group, &[], key(KeyCode::Esc)), Flow::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut group, &[], ctrl_c), Flow::Quit);
    }

    #[test]
    fn key_release_ignored() {
        let mut group = ToggleGroup::new(["A", "B"]).unwrap();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        handle_event(&mut group, &[], release);
        assert_eq!(group.active_index(), 0);
    }

    #[test]
    fn keys_and_clicks_select() {
        let mut group = ToggleGroup::new(["A", "B", "C"]).unwrap();
        let rects = layout_row(group.labels(), ROW_X, ROW_Y);

        handle_event(&mut group, &rects, key(KeyCode::Right));
        assert_eq!(group.active().label(), "B");

        let last = rects[2];
        handle_event(&mut group, &rects, click(last.x, last.y));
        assert_eq!(group.active().label(), "C");

        // Click in empty space
        handle_event(&mut group, &rects, click(0, 10));
        assert_eq!(group.active().label(), "C");
    }

    #[test]
    fn resize_requests_redraw() {
        let mut group = ToggleGroup::new(["A"]).unwrap();
        assert_eq!(handle_event(&mut group, &[], Event::Resize(80, 24)), Flow::Redraw);
    }

    #[test]
    fn selection_survives_rebuild() {
        let dir = tempfile::tempdir().unwrap();
        let first = app(&dir, &["A", "B", "C"]);
        let mut group = first.build_group().unwrap();
        group.select(1).unwrap();
        first.save(&group).unwrap();

        let second = app(&dir, &["A", "B", "C"]);
        let group = second.build_group().unwrap();
        assert_eq!(group.active().label(), "B");
        assert!(!group.is_dirty());
    }

    #[test]
    fn shrunk_labels_clamp() {
        let dir = tempfile::tempdir().unwrap();
        StateStore::new(dir.path().join("selection.bin"))
            .save(&SavedState::new(4))
            .unwrap();

        let group = app(&dir, &["A", "B"]).build_group().unwrap();
        assert_eq!(group.active().label(), "B");
    }

    #[test]
    fn reset_discards_saved_selection() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("selection.bin"));
        store.save(&SavedState::new(2)).unwrap();

        let config = DemoConfig {
            state_path: Some(store.path().to_path_buf()),
            reset: true,
            ..DemoConfig::default()
        };
        let group = DemoApp::new(config, store.clone()).build_group().unwrap();

        assert_eq!(group.active_index(), 0);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_state_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("selection.bin"), [0xff]).unwrap();

        let group = app(&dir, &["A", "B"]).build_group().unwrap();
        assert_eq!(group.active_index(), 0);
    }

    #[test]
    fn empty_labels_fail() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig {
            labels: Vec::new(),
            ..DemoConfig::default()
        };
        let app = DemoApp::new(config, StateStore::new(dir.path().join("s.bin")));
        assert!(matches!(
            app.build_group(),
            Err(DemoError::Group(multibutton::MultiButtonError::EmptyLabels))
        ));
    }

    #[test]
    fn status_shows_last_change() {
        let mut group = ToggleGroup::new(["A", "B", "C"]).unwrap();
        let status = attach_status(&mut group);
        assert_eq!(*status.borrow(), None);

        group.select(2).unwrap();
        assert_eq!(status.borrow().as_deref(), Some("A -> C"));

        group.select(2).unwrap();
        assert_eq!(status.borrow().as_deref(), Some("A -> C"));
    }

    #[test]
    fn status_untouched_by_restore() {
        let mut group = ToggleGroup::new(["A", "B", "C"]).unwrap();
        let status = attach_status(&mut group);

        group.restore_state(SavedState::new(1));
        assert_eq!(group.active().label(), "B");
        assert_eq!(*status.borrow(), None);
    }

    #[tokio::test]
    async fn event_loop_applies_events_until_quit() {
        let mut group = ToggleGroup::new(["A", "B", "C"]).unwrap();
        let status = attach_status(&mut group);
        let rects = layout_row(group.labels(), ROW_X, ROW_Y);
        let events = stream::iter::<Vec<io::Result<Event>>>(vec![
            Ok(key(KeyCode::Right)),
            Ok(key(KeyCode::Char('q'))),
            Ok(key(KeyCode::Right)),
        ]);
        let mut out = Vec::new();

        event_loop(&mut group, &rects, &mut out, events, &status)
            .await
            .unwrap();

        assert_eq!(group.active().label(), "B");
        assert_eq!(status.borrow().as_deref(), Some("A -> B"));
        assert!(!group.is_dirty());
        assert!(String::from_utf8_lossy(&out).contains("A -> B"));
    }

    #[tokio::test]
    async fn event_loop_stops_on_read_error() {
        let mut group = ToggleGroup::new(["A", "B", "C"]).unwrap();
        let status = attach_status(&mut group);
        let rects = layout_row(group.labels(), ROW_X, ROW_Y);
        let events = stream::iter::<Vec<io::Result<Event>>>(vec![
            Ok(key(KeyCode::End)),
            Err(io::Error::other("terminal gone")),
            Ok(key(KeyCode::Home)),
        ]);

        let result = event_loop(&mut group, &rects, &mut Vec::new(), events, &status).await;

        assert!(matches!(result, Err(DemoError::Io(_))));
        assert_eq!(group.active().label(), "C");
    }

    #[test]
    fn teardown_saves_after_loop_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir, &["A", "B", "C"]);
        let mut group = app.build_group().unwrap();
        let _status = attach_status(&mut group);
        group.select(2).unwrap();

        let result = app.teardown(group, Err(io::Error::other("terminal gone").into()));

        assert!(matches!(result, Err(DemoError::Io(_))));
        let saved = app.store.load().unwrap().unwrap();
        assert_eq!(saved.selected_position(), 2);
    }

    #[test]
    fn teardown_reports_save_failure_on_clean_exit() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the state file should be makes the write fail
        std::fs::create_dir(dir.path().join("selection.bin")).unwrap();
        let app = app(&dir, &["A", "B"]);
        let group = ToggleGroup::new(["A", "B"]).unwrap();

        let result = app.teardown(group, Ok(()));
        assert!(matches!(result, Err(DemoError::Store(_))));
    }
}
