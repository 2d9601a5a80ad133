//! Connection manager: the only writer of the board state.
//!
//! The manager owns the write half of the push-stream connection together with
//! every piece of mirrored state. Inbound frames are decoded and applied one at
//! a time, each followed by the view recomputation it triggers, so no message
//! is ever partially applied. User actions (search, sort, favourite toggle)
//! enter through the same type.
use crate::favourites::FavouritesController;
use crate::model::{PriceStore, SymbolCatalog};
use crate::projector::{SortCommand, ViewProjector};
use crate::render::{self, BoardRow};
use chrono::Utc;
use log::{debug, info};
use price_common::{BoardError, Inbound, Symbol};

/// Outbound half of the push-stream connection.
pub trait Transport {
    /// Send one text frame.
    fn send_text(&mut self, text: String) -> Result<(), BoardError>;

    /// Close the connection; no frame is sent afterwards.
    fn close(&mut self) -> Result<(), BoardError>;
}

/// What an inbound frame did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Catalog and favourites replaced.
    Init,
    /// Price and diff maps replaced.
    Prices,
    /// Favourites replaced.
    FavouritesUpdated,
    /// Unknown envelope type, nothing changed.
    Ignored(String),
}

/// Board state bound to one push-stream connection.
pub struct ConnectionManager<T: Transport> {
    transport: T,
    open: bool,
    catalog: SymbolCatalog,
    prices: PriceStore,
    favourites: FavouritesController,
    view: ViewProjector,
}

impl<T: Transport> ConnectionManager<T> {
    /// Bind empty board state to an opened connection.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            open: true,
            catalog: SymbolCatalog::new(),
            prices: PriceStore::new(),
            favourites: FavouritesController::new(),
            view: ViewProjector::new(),
        }
    }

    /// Decode and apply one inbound text frame.
    ///
    /// A frame that fails to decode is reported as `BoardError::Decode` and
    /// leaves the state exactly as it was.
    pub fn handle_frame(&mut self, frame: &str) -> Result<FrameOutcome, BoardError> {
        let inbound = Inbound::decode(frame)?;
        Ok(self.apply(inbound))
    }

    /// Apply a decoded envelope and recompute the view it affects.
    pub fn apply(&mut self, inbound: Inbound) -> FrameOutcome {
        debug!("Applying {} envelope", inbound.kind());
        match inbound {
            Inbound::Init(init) => {
                info!(
                    "init: {} symbols, {} favourites",
                    init.all_symbols.len(),
                    init.favourites.len()
                );
                self.catalog.replace_all(init);
                self.favourites.confirm();
                self.view.favourites_changed(&self.catalog, &self.prices);
                FrameOutcome::Init
            }
            Inbound::Prices(prices) => {
                debug!("prices: {} quotes, {} diffs", prices.prices.len(), prices.diffs.len());
                self.prices.replace(prices, Utc::now());
                FrameOutcome::Prices
            }
            Inbound::FavouritesUpdated(favourites) => {
                info!("favouritesUpdated: {:?}", favourites);
                self.catalog.replace_favourites(favourites);
                self.favourites.confirm();
                self.view.favourites_changed(&self.catalog, &self.prices);
                FrameOutcome::FavouritesUpdated
            }
            Inbound::Unknown(kind) => {
                debug!("Ignoring envelope of type {:?}", kind);
                FrameOutcome::Ignored(kind)
            }
        }
    }

    /// Ask the server to toggle `symbol` in the favourites.
    ///
    /// Sends exactly one `setFavourites` with the full next list. Local
    /// favourites stay as they are until the server echoes the change.
    pub fn toggle_favourite(&mut self, symbol: &Symbol) -> Result<(), BoardError> {
        if !self.open {
            return Err(BoardError::ConnectionClosed);
        }
        let command = self.favourites.toggle(&self.catalog, symbol);
        let frame = command.encode()?;
        info!("Sending {}", frame);
        self.transport.send_text(frame)
    }

    /// The user typed in the search box.
    pub fn search(&mut self, term: &str) {
        self.view.set_search_term(term, &self.catalog, &self.prices);
    }

    /// The user clicked a sort arrow.
    pub fn sort(&mut self, command: SortCommand) {
        self.view.sort(command, &self.catalog, &self.prices);
    }

    /// Close the connection on teardown. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<(), BoardError> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.transport.close()
    }

    /// The transport went away on its own; state is kept but frozen.
    pub fn connection_lost(&mut self) {
        self.open = false;
    }

    /// Whether outbound commands can still be sent.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Rows to display, in order and capped.
    pub fn rows(&self) -> Vec<BoardRow> {
        render::rows(self.view.visible(), &self.catalog, &self.prices, &self.favourites)
    }

    /// Full text rendering of the board.
    pub fn render(&self) -> String {
        render::board_text(
            self.view.search_term(),
            &self.rows(),
            self.view.full_len(),
            self.prices.updated_at(),
        )
    }

    /// Mirrored catalog.
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// Mirrored prices.
    pub fn prices(&self) -> &PriceStore {
        &self.prices
    }

    /// Pending favourite toggles.
    pub fn favourites(&self) -> &FavouritesController {
        &self.favourites
    }

    /// Current view.
    pub fn view(&self) -> &ViewProjector {
        &self.view
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
