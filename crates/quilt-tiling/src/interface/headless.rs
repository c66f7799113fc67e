//! In-memory host implementation.
//!
//! Tracks each window's state, rectangle and clip the way a compositor
//! would, and records every call so a caller can see exactly what a
//! commit pass emitted. Used by the `quilt` driver and by tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use quilt_common::errors::HostError;
use quilt_common::types::{Rectangle, WindowId, WindowState};

use super::{Result, TilingInterface};

/// A single call made through [`TilingInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    ChangeState(WindowId, WindowState),
    Clip(WindowId, Rectangle),
    NoClip(WindowId),
    SetRectangle {
        window: WindowId,
        previous: Rectangle,
        area: Rectangle,
    },
    SelectActive(WindowId),
}

/// What the host currently shows for one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowRecord {
    pub state: WindowState,
    pub rectangle: Rectangle,
    pub clip: Option<Rectangle>,
}

pub struct HeadlessInterface {
    output: Cell<Rectangle>,
    windows: RefCell<BTreeMap<WindowId, WindowRecord>>,
    calls: RefCell<Vec<HostCall>>,
    active: Cell<Option<WindowId>>,
    next_id: Cell<u64>,
}

impl HeadlessInterface {
    pub fn new(output: Rectangle) -> Self {
        Self {
            output: Cell::new(output),
            windows: RefCell::new(BTreeMap::new()),
            calls: RefCell::new(Vec::new()),
            active: Cell::new(None),
            next_id: Cell::new(1),
        }
    }

    /// Register a new restored window and return its handle.
    pub fn open_window(&self) -> WindowId {
        let id = WindowId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.windows.borrow_mut().insert(id, WindowRecord::default());
        id
    }

    pub fn close_window(&self, window: WindowId) {
        self.windows.borrow_mut().remove(&window);
        if self.active.get() == Some(window) {
            self.active.set(None);
        }
    }

    pub fn set_output(&self, output: Rectangle) {
        self.output.set(output);
    }

    pub fn window(&self, window: WindowId) -> Option<WindowRecord> {
        self.windows.borrow().get(&window).copied()
    }

    pub fn windows(&self) -> Vec<(WindowId, WindowRecord)> {
        self.windows
            .borrow()
            .iter()
            .map(|(id, record)| (*id, *record))
            .collect()
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active.get()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn update(&self, window: WindowId, f: impl FnOnce(&mut WindowRecord)) -> Result<()> {
        let mut windows = self.windows.borrow_mut();
        let record = windows
            .get_mut(&window)
            .ok_or(HostError::UnknownWindow(window))?;
        f(record);
        Ok(())
    }

    fn record(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl TilingInterface for HeadlessInterface {
    fn is_fullscreen(&self, window: WindowId) -> bool {
        self.get_state(window).is_fullscreen()
    }

    fn get_state(&self, window: WindowId) -> WindowState {
        self.window(window).map(|r| r.state).unwrap_or_default()
    }

    fn change_state(&self, window: WindowId, state: WindowState) -> Result<()> {
        self.record(HostCall::ChangeState(window, state));
        let output = self.output.get();
        self.update(window, |record| {
            record.state = state;
            if state.is_fullscreen() {
                record.rectangle = output;
            }
        })
    }

    fn clip(&self, window: WindowId, area: Rectangle) -> Result<()> {
        self.record(HostCall::Clip(window, area));
        self.update(window, |record| record.clip = Some(area))
    }

    fn noclip(&self, window: WindowId) -> Result<()> {
        self.record(HostCall::NoClip(window));
        self.update(window, |record| record.clip = None)
    }

    fn set_rectangle(&self, window: WindowId, previous: Rectangle, area: Rectangle) -> Result<()> {
        self.record(HostCall::SetRectangle {
            window,
            previous,
            area,
        });
        if area.size.width < 0 || area.size.height < 0 {
            return Err(HostError::InterfaceError(format!(
                "{window} cannot be sized {}x{}",
                area.size.width, area.size.height
            )));
        }
        self.update(window, |record| record.rectangle = area)
    }

    fn select_active_window(&self, window: WindowId) -> Result<()> {
        self.record(HostCall::SelectActive(window));
        if self.window(window).is_none() {
            return Err(HostError::UnknownWindow(window));
        }
        self.active.set(Some(window));
        Ok(())
    }
}
