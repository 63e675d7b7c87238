use crate::icon::Icon;

use strum::EnumIter;

pub type Window = u32;

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, EnumIter)]
pub enum WindowState {
    Modal,
    Sticky,
    MaximizedVert,
    MaximizedHorz,
    Shaded,
    SkipTaskbar,
    SkipPager,
    Hidden,
    Fullscreen,
    Above,
    Below,
    DemandsAttention,
}

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, EnumIter)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    DropdownMenu,
    PopupMenu,
    Tooltip,
    Notification,
    Combo,
    Dnd,
    Normal,
}

/// Windows a user would pick from a task switcher: everything except
/// docks and windows that ask to be skipped by taskbar or pager.
/// Windows advertising no hints at all are listable.
pub fn is_listable(
    types: &[WindowType],
    states: &[WindowState],
) -> bool {
    !types.contains(&WindowType::Dock)
        && !states.contains(&WindowState::SkipTaskbar)
        && !states.contains(&WindowState::SkipPager)
}

#[derive(Debug, Clone)]
pub struct WindowRecord {
    window: Window,
    name: String,
    types: Vec<WindowType>,
    states: Vec<WindowState>,
    icon: Option<Icon>,
}

impl WindowRecord {
    pub fn new(
        window: Window,
        name: impl Into<String>,
        types: Vec<WindowType>,
        states: Vec<WindowState>,
        icon: Option<Icon>,
    ) -> Self {
        Self {
            window,
            name: name.into(),
            types,
            states,
            icon,
        }
    }

    #[inline]
    pub fn window(&self) -> Window {
        self.window
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn types(&self) -> &[WindowType] {
        &self.types
    }

    #[inline]
    pub fn states(&self) -> &[WindowState] {
        &self.states
    }

    #[inline]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    #[inline]
    pub fn is_listable(&self) -> bool {
        is_listable(&self.types, &self.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dock_windows_are_never_listable() {
        assert!(!is_listable(&[WindowType::Dock], &[]));
        assert!(!is_listable(&[WindowType::Normal, WindowType::Dock], &[]));
        assert!(!is_listable(&[WindowType::Dock], &[
            WindowState::Fullscreen,
            WindowState::DemandsAttention,
        ]));
    }

    #[test]
    fn skip_taskbar_windows_are_never_listable() {
        assert!(!is_listable(&[], &[WindowState::SkipTaskbar]));
        assert!(!is_listable(&[WindowType::Normal], &[
            WindowState::Sticky,
            WindowState::SkipTaskbar,
        ]));
    }

    #[test]
    fn skip_pager_windows_are_never_listable() {
        assert!(!is_listable(&[], &[WindowState::SkipPager]));
        assert!(!is_listable(&[WindowType::Dialog], &[WindowState::SkipPager]));
    }

    #[test]
    fn hintless_windows_are_listable() {
        assert!(is_listable(&[], &[]));
    }

    #[test]
    fn unrelated_hints_do_not_affect_listability() {
        assert!(is_listable(&[WindowType::Normal], &[]));
        assert!(is_listable(&[WindowType::Dialog, WindowType::Utility], &[
            WindowState::Modal,
            WindowState::Above,
            WindowState::Hidden,
        ]));
    }

    #[test]
    fn record_delegates_to_hint_classification() {
        let dock = WindowRecord::new(0x1, "N/A", vec![WindowType::Dock], vec![], None);
        let terminal = WindowRecord::new(0x2, "Terminal", vec![WindowType::Normal], vec![], None);

        assert!(!dock.is_listable());
        assert!(terminal.is_listable());
    }
}
