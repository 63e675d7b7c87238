use crate::error::Error;
use crate::icon::Icon;
use crate::name;
use crate::window::Window;
use crate::window::WindowRecord;
use crate::window::WindowState;
use crate::window::WindowType;
use crate::Result;

use std::collections::HashMap;
use std::collections::HashSet;

use x11rb::connection::Connection;
use x11rb::errors::ReplyError;
use x11rb::protocol::xproto;
use x11rb::protocol::xproto::Atom;
use x11rb::protocol::xproto::ConnectionExt;
use x11rb::protocol::xproto::EventMask;
use x11rb::protocol::xproto::CLIENT_MESSAGE_EVENT;
use x11rb::rust_connection::RustConnection;

use strum::IntoEnumIterator;

// _NET_ACTIVE_WINDOW source indication: direct user action (pager).
const ACTIVATE_SOURCE_PAGER: u32 = 2;

x11rb::atom_manager! {
    pub Atoms: AtomsCookie {
        ATOM,
        CARDINAL,
        WINDOW,
        UTF8_STRING,

        // ICCCM client properties
        WM_NAME,

        // EWMH root properties
        _NET_CLIENT_LIST,
        _NET_ACTIVE_WINDOW,

        // EWMH application properties
        _NET_WM_NAME,
        _NET_WM_WINDOW_TYPE,
        _NET_WM_STATE,
        _NET_WM_ICON,

        // EWMH window states
        _NET_WM_STATE_MODAL,
        _NET_WM_STATE_STICKY,
        _NET_WM_STATE_MAXIMIZED_VERT,
        _NET_WM_STATE_MAXIMIZED_HORZ,
        _NET_WM_STATE_SHADED,
        _NET_WM_STATE_SKIP_TASKBAR,
        _NET_WM_STATE_SKIP_PAGER,
        _NET_WM_STATE_HIDDEN,
        _NET_WM_STATE_FULLSCREEN,
        _NET_WM_STATE_ABOVE,
        _NET_WM_STATE_BELOW,
        _NET_WM_STATE_DEMANDS_ATTENTION,

        // EWMH window types
        _NET_WM_WINDOW_TYPE_DESKTOP,
        _NET_WM_WINDOW_TYPE_DOCK,
        _NET_WM_WINDOW_TYPE_TOOLBAR,
        _NET_WM_WINDOW_TYPE_MENU,
        _NET_WM_WINDOW_TYPE_UTILITY,
        _NET_WM_WINDOW_TYPE_SPLASH,
        _NET_WM_WINDOW_TYPE_DIALOG,
        _NET_WM_WINDOW_TYPE_DROPDOWN_MENU,
        _NET_WM_WINDOW_TYPE_POPUP_MENU,
        _NET_WM_WINDOW_TYPE_TOOLTIP,
        _NET_WM_WINDOW_TYPE_NOTIFICATION,
        _NET_WM_WINDOW_TYPE_COMBO,
        _NET_WM_WINDOW_TYPE_DND,
        _NET_WM_WINDOW_TYPE_NORMAL,
    }
}

/// One connection to the X server, held for the duration of a single
/// listing or activation operation and closed on drop.
pub struct XSession {
    conn: RustConnection,
    atoms: Atoms,
    type_map: HashMap<Atom, WindowType>,
    state_map: HashMap<Atom, WindowState>,
    root: Window,
}

impl XSession {
    pub fn connect() -> Result<Self> {
        let (conn, screen_num) = RustConnection::connect(None)?;
        let root = conn.setup().roots[screen_num].root;

        let atoms = Atoms::new(&conn)
            .map_err(|err| Error::Handshake(ReplyError::from(err)))?
            .reply()
            .map_err(Error::Handshake)?;

        let type_map = WindowType::iter()
            .map(|type_| (type_atom(&atoms, type_), type_))
            .collect();

        let state_map = WindowState::iter()
            .map(|state| (state_atom(&atoms, state), state))
            .collect();

        debug!("connected to X server, root window {:#0x}", root);

        Ok(Self {
            conn,
            atoms,
            type_map,
            state_map,
            root,
        })
    }

    /// Build a record for every window on the window manager's client
    /// list, in the order the window manager reports them. Only the
    /// client-list query itself is fatal; name, hint, and icon queries
    /// are best-effort per window.
    pub fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        let clients = self.client_list()?;

        debug!("window manager reports {} managed clients", clients.len());

        let mut seen = HashSet::with_capacity(clients.len());

        Ok(clients
            .into_iter()
            .filter(|&window| seen.insert(window))
            .map(|window| {
                WindowRecord::new(
                    window,
                    self.resolve_name(window),
                    self.window_types(window),
                    self.window_states(window),
                    self.window_icon(window),
                )
            })
            .collect())
    }

    /// Ask the window manager to raise and focus a window. Fire-and-forget:
    /// the request is flushed but no acknowledgment exists to wait for.
    pub fn activate_window(
        &self,
        window: Window,
    ) -> Result<()> {
        let data = [
            ACTIVATE_SOURCE_PAGER,
            x11rb::CURRENT_TIME,
            x11rb::NONE,
            0,
            0,
        ];

        let event = xproto::ClientMessageEvent {
            response_type: CLIENT_MESSAGE_EVENT,
            format: 32,
            sequence: 0,
            window,
            type_: self.atoms._NET_ACTIVE_WINDOW,
            data: data.into(),
        };

        self.conn
            .send_event(
                false,
                self.root,
                EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
                &event,
            )
            .map_err(|source| Error::Activation {
                window,
                source,
            })?;

        self.conn.flush().map_err(|source| Error::Activation {
            window,
            source,
        })?;

        Ok(())
    }

    /// EWMH name first, ICCCM name second, sentinel last.
    pub fn resolve_name(
        &self,
        window: Window,
    ) -> String {
        name::select_name(self.net_wm_name(window), || self.wm_name(window))
    }

    fn client_list(&self) -> Result<Vec<Window>> {
        let reply = self
            .conn
            .get_property(
                false,
                self.root,
                self.atoms._NET_CLIENT_LIST,
                self.atoms.WINDOW,
                0,
                u32::MAX,
            )
            .map_err(|err| Error::Query(ReplyError::from(err)))?
            .reply()
            .map_err(Error::Query)?;

        Ok(reply
            .value32()
            .map_or(Vec::with_capacity(0), |clients| clients.collect()))
    }

    #[inline]
    fn net_wm_name(
        &self,
        window: Window,
    ) -> Option<String> {
        self.string_property(window, self.atoms._NET_WM_NAME, self.atoms.UTF8_STRING)
    }

    #[inline]
    fn wm_name(
        &self,
        window: Window,
    ) -> Option<String> {
        // Legacy names predate UTF8_STRING; accept whatever type is set.
        self.string_property(window, self.atoms.WM_NAME, x11rb::NONE)
    }

    fn string_property(
        &self,
        window: Window,
        property: Atom,
        type_: Atom,
    ) -> Option<String> {
        self.conn
            .get_property(false, window, property, type_, 0, u32::MAX)
            .ok()?
            .reply()
            .ok()
            .and_then(|reply| {
                let value = reply.value8()?.collect::<Vec<u8>>();
                String::from_utf8(value).ok()
            })
    }

    fn window_types(
        &self,
        window: Window,
    ) -> Vec<WindowType> {
        self.atom_list_property(window, self.atoms._NET_WM_WINDOW_TYPE)
            .into_iter()
            .filter_map(|atom| self.type_map.get(&atom).copied())
            .collect()
    }

    fn window_states(
        &self,
        window: Window,
    ) -> Vec<WindowState> {
        self.atom_list_property(window, self.atoms._NET_WM_STATE)
            .into_iter()
            .filter_map(|atom| self.state_map.get(&atom).copied())
            .collect()
    }

    fn atom_list_property(
        &self,
        window: Window,
        property: Atom,
    ) -> Vec<Atom> {
        self.conn
            .get_property(false, window, property, self.atoms.ATOM, 0, u32::MAX)
            .ok()
            .and_then(|cookie| cookie.reply().ok())
            .and_then(|reply| reply.value32().map(|value| value.collect()))
            .unwrap_or_else(|| Vec::with_capacity(0))
    }

    fn window_icon(
        &self,
        window: Window,
    ) -> Option<Icon> {
        self.conn
            .get_property(
                false,
                window,
                self.atoms._NET_WM_ICON,
                self.atoms.CARDINAL,
                0,
                u32::MAX,
            )
            .ok()?
            .reply()
            .ok()
            .and_then(|reply| {
                let data: Vec<u32> = reply.value32()?.collect();
                Icon::from_cardinals(&data)
            })
    }
}

fn type_atom(
    atoms: &Atoms,
    type_: WindowType,
) -> Atom {
    match type_ {
        WindowType::Desktop => atoms._NET_WM_WINDOW_TYPE_DESKTOP,
        WindowType::Dock => atoms._NET_WM_WINDOW_TYPE_DOCK,
        WindowType::Toolbar => atoms._NET_WM_WINDOW_TYPE_TOOLBAR,
        WindowType::Menu => atoms._NET_WM_WINDOW_TYPE_MENU,
        WindowType::Utility => atoms._NET_WM_WINDOW_TYPE_UTILITY,
        WindowType::Splash => atoms._NET_WM_WINDOW_TYPE_SPLASH,
        WindowType::Dialog => atoms._NET_WM_WINDOW_TYPE_DIALOG,
        WindowType::DropdownMenu => atoms._NET_WM_WINDOW_TYPE_DROPDOWN_MENU,
        WindowType::PopupMenu => atoms._NET_WM_WINDOW_TYPE_POPUP_MENU,
        WindowType::Tooltip => atoms._NET_WM_WINDOW_TYPE_TOOLTIP,
        WindowType::Notification => atoms._NET_WM_WINDOW_TYPE_NOTIFICATION,
        WindowType::Combo => atoms._NET_WM_WINDOW_TYPE_COMBO,
        WindowType::Dnd => atoms._NET_WM_WINDOW_TYPE_DND,
        WindowType::Normal => atoms._NET_WM_WINDOW_TYPE_NORMAL,
    }
}

fn state_atom(
    atoms: &Atoms,
    state: WindowState,
) -> Atom {
    match state {
        WindowState::Modal => atoms._NET_WM_STATE_MODAL,
        WindowState::Sticky => atoms._NET_WM_STATE_STICKY,
        WindowState::MaximizedVert => atoms._NET_WM_STATE_MAXIMIZED_VERT,
        WindowState::MaximizedHorz => atoms._NET_WM_STATE_MAXIMIZED_HORZ,
        WindowState::Shaded => atoms._NET_WM_STATE_SHADED,
        WindowState::SkipTaskbar => atoms._NET_WM_STATE_SKIP_TASKBAR,
        WindowState::SkipPager => atoms._NET_WM_STATE_SKIP_PAGER,
        WindowState::Hidden => atoms._NET_WM_STATE_HIDDEN,
        WindowState::Fullscreen => atoms._NET_WM_STATE_FULLSCREEN,
        WindowState::Above => atoms._NET_WM_STATE_ABOVE,
        WindowState::Below => atoms._NET_WM_STATE_BELOW,
        WindowState::DemandsAttention => atoms._NET_WM_STATE_DEMANDS_ATTENTION,
    }
}
