use crate::ident;
use crate::session::XSession;
use crate::window::WindowRecord;
use crate::Result;

/// One listable window, ready for presentation: formatted identifier
/// plus resolved display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    ident: String,
    name: String,
}

impl Entry {
    #[inline]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// List every user-relevant window the window manager currently manages,
/// in client-list order. Opens its own session and closes it before
/// returning.
pub fn enumerate() -> Result<Vec<Entry>> {
    let session = XSession::connect()?;
    let windows = session.list_windows()?;

    Ok(listable_entries(windows))
}

/// Raise and focus the window named by a formatted identifier. Opens its
/// own session and closes it before returning.
pub fn activate(ident: &str) -> Result<()> {
    let window = ident::parse_ident(ident)?;
    let session = XSession::connect()?;

    info!("activating window {:#0x}", window);

    session.activate_window(window)
}

fn listable_entries(windows: Vec<WindowRecord>) -> Vec<Entry> {
    windows
        .into_iter()
        .filter(WindowRecord::is_listable)
        .map(|record| Entry {
            ident: ident::format_ident(record.window()),
            name: record.name().to_owned(),
        })
        .collect()
}
