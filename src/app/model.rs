//! Application model types: `App` and `View`.
//!
//! The `App` struct holds the catalog and all the state the UI reads:
//! which screen has the keyboard, the browse selection, the transient
//! status message and the form/search buffers.

use crate::catalog::{Album, AlbumCard, Catalog, SortOrder};
use crate::form::{AlbumForm, FormOutcome};

/// Which screen currently owns the keyboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// The scrollable album list.
    Browse,
    /// The album entry form overlay.
    Form,
    /// The code search overlay.
    Search,
    /// A single album card, addressed by code so sorting or merging
    /// underneath it cannot point it at a different album.
    Detail(u16),
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    pub selected: usize,

    view: View,
    sort_order: Option<SortOrder>,
    status: Option<String>,

    form: Option<AlbumForm>,
    search_buffer: String,
    search_error: Option<String>,
}

impl App {
    /// Create a new `App` around the provided `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: 0,
            view: View::Browse,
            sort_order: None,
            status: None,
            form: None,
            search_buffer: String::new(),
            search_error: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The sort last applied to the catalog, if any.
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    /// The transient status message. Messages stay until the next action
    /// replaces them.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Set the status message shown in the bottom block.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Move selection down, wrapping past the last album.
    pub fn select_next(&mut self) {
        let len = self.catalog.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection up, wrapping past the first album.
    pub fn select_prev(&mut self) {
        let len = self.catalog.len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.catalog.len().saturating_sub(1);
    }

    /// Open the card of the album under the cursor. No-op on an empty list.
    pub fn open_detail_selected(&mut self) {
        if let Some(album) = self.catalog.all().get(self.selected) {
            self.view = View::Detail(album.code);
        }
    }

    pub fn close_detail(&mut self) {
        self.view = View::Browse;
    }

    /// Cards for every album, in catalog order.
    pub fn cards(&self) -> Vec<AlbumCard> {
        self.catalog.all().iter().map(Album::card).collect()
    }

    /// The card shown by the detail view, if one is open.
    pub fn detail_card(&self) -> Option<AlbumCard> {
        match self.view {
            View::Detail(code) => self.catalog.find_by_code(code).map(Album::card),
            _ => None,
        }
    }

    /// Open the entry form, seeded with the codes already in use.
    pub fn open_form(&mut self) {
        self.form = Some(AlbumForm::new(self.catalog.codes()));
        self.view = View::Form;
        self.status = None;
    }

    /// Discard the form and everything entered into it.
    pub fn cancel_form(&mut self) {
        self.form = None;
        self.view = View::Browse;
        self.set_status("Album entry cancelled; nothing was added.");
    }

    pub fn form(&self) -> Option<&AlbumForm> {
        self.form.as_ref()
    }

    pub fn form_input(&mut self, c: char) {
        if let Some(form) = self.form.as_mut() {
            form.push_char(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.backspace();
        }
    }

    /// Submit the current form field; commits the album once the form
    /// reports completion.
    pub fn form_submit(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        if let FormOutcome::Complete(album) = form.submit() {
            let name = album.name.clone();
            let code = album.code;
            match self.catalog.add(album) {
                Ok(()) => {
                    tracing::info!(code, name = %name, "album added");
                    self.set_status(format!("Album \"{name}\" added to the catalog."));
                    // Leave the cursor on the new entry.
                    self.selected = self.catalog.len() - 1;
                }
                Err(e) => {
                    tracing::warn!(code, error = %e, "album rejected");
                    self.set_status(format!("Could not add \"{name}\": {e}."));
                }
            }
            self.form = None;
            self.view = View::Browse;
        }
    }

    /// Open the code search overlay with an empty query.
    pub fn open_search(&mut self) {
        self.search_buffer.clear();
        self.search_error = None;
        self.view = View::Search;
        self.status = None;
    }

    pub fn cancel_search(&mut self) {
        self.search_buffer.clear();
        self.search_error = None;
        self.view = View::Browse;
    }

    pub fn search_buffer(&self) -> &str {
        &self.search_buffer
    }

    pub fn search_error(&self) -> Option<&str> {
        self.search_error.as_deref()
    }

    pub fn search_input(&mut self, c: char) {
        self.search_error = None;
        self.search_buffer.push(c);
    }

    pub fn search_backspace(&mut self) {
        self.search_error = None;
        self.search_buffer.pop();
    }

    /// Look up the entered code. A hit opens its card, a miss reports in
    /// the status line and returns to the list. An empty query just closes
    /// the overlay.
    pub fn search_submit(&mut self) {
        let query = self.search_buffer.trim().to_string();
        if query.is_empty() {
            self.cancel_search();
            return;
        }

        match query.parse::<u16>() {
            Ok(code) => {
                self.search_buffer.clear();
                self.search_error = None;
                match self.catalog.find_by_code(code) {
                    Some(album) => {
                        self.set_status(format!(
                            "Album found: {} - {}",
                            album.name, album.artist
                        ));
                        // Park the browse cursor on the hit as well.
                        if let Some(pos) =
                            self.catalog.all().iter().position(|a| a.code == code)
                        {
                            self.selected = pos;
                        }
                        self.view = View::Detail(code);
                    }
                    None => {
                        tracing::debug!(code, "search miss");
                        self.set_status(format!("No album with code {code}."));
                        self.view = View::Browse;
                    }
                }
            }
            Err(_) => {
                self.search_error = Some(format!("\"{query}\" is not a numeric code."));
                self.search_buffer.clear();
            }
        }
    }

    /// Sort the catalog without touching the status line.
    pub fn apply_sort(&mut self, order: SortOrder) {
        self.catalog.sort_by_total_duration(order);
        self.sort_order = Some(order);
    }

    /// Flip between ascending and descending total-duration order. The
    /// first toggle on an unsorted catalog sorts ascending.
    pub fn toggle_sort(&mut self) {
        let order = self
            .sort_order
            .map(SortOrder::toggled)
            .unwrap_or(SortOrder::Ascending);
        self.apply_sort(order);
        tracing::debug!(order = order.label(), "catalog sorted");
        self.set_status(format!("Sorted by total duration, {}.", order.label()));
    }
}
