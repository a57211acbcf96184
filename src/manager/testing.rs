use std::cell::RefCell;
use std::rc::Rc;

use super::WindowManager;
use crate::common::config::TilingSettings;
use crate::layout_engine::LayoutMode;
use crate::sys::geometry::{Offset, Rect, Size, SizeBounds};
use crate::sys::host::{HostWindow, WindowBar, WindowId, WindowKind};

pub fn wid(id: &str) -> WindowId { WindowId::new(id).unwrap() }

#[derive(Debug, Clone, PartialEq)]
pub struct TestWindow {
    pub id: Option<WindowId>,
    pub kind: WindowKind,
    pub open: bool,
    pub maximized: bool,
    pub snapped: bool,
    pub position: Offset,
    pub size: Size,
    pub bounds: SizeBounds,
    pub starting: (Offset, Size),
    pub geometry_writes: usize,
    pub removal_requested: bool,
    pub focus_requests: usize,
}

impl TestWindow {
    pub fn open(id: &str) -> Self {
        TestWindow {
            id: WindowId::new(id),
            kind: WindowKind::Permanent,
            open: true,
            maximized: false,
            snapped: false,
            position: Offset::ZERO,
            size: Size::new(20, 10),
            bounds: SizeBounds::new(Size::new(12, 6), None),
            starting: (Offset::ZERO, Size::new(20, 10)),
            geometry_writes: 0,
            removal_requested: false,
            focus_requests: 0,
        }
    }

    pub fn closed(id: &str) -> Self { TestWindow { open: false, ..Self::open(id) } }

    pub fn anonymous() -> Self { TestWindow { id: None, ..Self::open("") } }

    pub fn at(self, position: Offset, size: Size) -> Self {
        TestWindow {
            position,
            size,
            starting: (position, size),
            ..self
        }
    }

    pub fn temporary(self) -> Self { TestWindow { kind: WindowKind::Temporary, ..self } }

    pub fn maximized(self) -> Self { TestWindow { maximized: true, ..self } }
}

impl HostWindow for TestWindow {
    fn id(&self) -> Option<WindowId> { self.id.clone() }

    fn kind(&self) -> WindowKind { self.kind }

    fn is_open(&self) -> bool { self.open }

    fn set_open(&mut self, open: bool) { self.open = open; }

    fn is_maximized(&self) -> bool { self.maximized }

    fn set_maximized(&mut self, maximized: bool) { self.maximized = maximized; }

    fn position(&self) -> Offset { self.position }

    fn size(&self) -> Size { self.size }

    fn set_geometry(&mut self, position: Offset, size: Size) {
        self.position = position;
        self.size = size;
        self.starting = (position, size);
        self.geometry_writes += 1;
    }

    fn size_bounds(&self) -> SizeBounds { self.bounds }

    fn is_snapped(&self) -> bool { self.snapped }

    fn set_snapped(&mut self, snapped: bool) { self.snapped = snapped; }

    fn reset_geometry(&mut self) { (self.position, self.size) = self.starting; }

    fn request_removal(&mut self) { self.removal_requested = true; }

    fn focus(&mut self) { self.focus_requests += 1; }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarEvent {
    Added(WindowId),
    Removed(WindowId),
    State(WindowId, bool),
}

/// Window bar that records every call, readable after the manager took it.
#[derive(Default, Clone)]
pub struct RecordingBar {
    events: Rc<RefCell<Vec<BarEvent>>>,
}

impl RecordingBar {
    pub fn take(&self) -> Vec<BarEvent> { std::mem::take(&mut *self.events.borrow_mut()) }
}

impl WindowBar for RecordingBar {
    fn add_window_button(&mut self, id: &WindowId) {
        self.events.borrow_mut().push(BarEvent::Added(id.clone()));
    }

    fn remove_window_button(&mut self, id: &WindowId) {
        self.events.borrow_mut().push(BarEvent::Removed(id.clone()));
    }

    fn update_window_button_state(&mut self, id: &WindowId, open: bool) {
        self.events.borrow_mut().push(BarEvent::State(id.clone(), open));
    }
}

pub fn manager(mode: LayoutMode, container: Size) -> WindowManager<TestWindow> {
    let settings = TilingSettings {
        default_layout: mode,
        ..TilingSettings::default()
    };
    WindowManager::new(&settings, Rect::from_size(container))
}

/// A manager with one open window per id, registered in order.
pub fn manager_with(mode: LayoutMode, container: Size, ids: &[&str]) -> WindowManager<TestWindow> {
    let mut manager = manager(mode, container);
    for id in ids {
        manager.register(TestWindow::open(id)).unwrap();
    }
    manager
}

pub fn ids(names: &[&str]) -> Vec<WindowId> { names.iter().map(|n| wid(n)).collect() }
