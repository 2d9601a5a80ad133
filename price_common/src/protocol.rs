//! Push-stream protocol shared by the board and the price server.
//!
//! Every frame is a JSON text envelope `{ "type": ..., "data": ... }`.
//! Inbound (server -> board):
//! - `init` — full symbol universe plus the confirmed favourites.
//! - `prices` — full price and diff maps, replacing the previous ones.
//! - `favouritesUpdated` — the confirmed favourites after a change.
//!
//! Outbound (board -> server) there is a single command, `setFavourites`,
//! carrying the whole desired favourites list rather than a delta.
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::BoardError;
use crate::symbol::Symbol;

/// Envelope type of the initial snapshot.
pub const INIT: &str = "init";
/// Envelope type of a full price/diff replacement.
pub const PRICES: &str = "prices";
/// Envelope type of the server's favourites echo.
pub const FAVOURITES_UPDATED: &str = "favouritesUpdated";
/// Envelope type of the outbound favourites command.
pub const SET_FAVOURITES: &str = "setFavourites";

/// Direction of the last price move of a symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiffState {
    /// Price went up.
    Up,
    /// Price went down.
    Down,
    /// Price did not move.
    Same,
}

/// A USD quote as it appears on the wire: `{"USD": 30250.12}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UsdPrice {
    /// Price in US dollars; `None` when the record carries no `USD` field.
    #[serde(rename = "USD", default)]
    pub usd: Option<f64>,
}

/// Payload of an `init` envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitData {
    /// Every symbol the server knows about, in server order.
    pub all_symbols: Vec<Symbol>,
    /// Confirmed favourites, in server order.
    pub favourites: Vec<Symbol>,
}

/// Payload of a `prices` envelope.
///
/// A missing map is read as empty, i.e. every symbol reverts to unknown.
/// Entries that do not parse (an unknown diff label, a non-numeric price) are
/// dropped one by one, so the symbol renders with defaults while the rest of
/// the envelope still applies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricesData {
    /// Latest USD price per symbol.
    #[serde(default, deserialize_with = "entries_that_parse")]
    pub prices: HashMap<Symbol, UsdPrice>,
    /// Latest move direction per symbol.
    #[serde(default, deserialize_with = "entries_that_parse")]
    pub diffs: HashMap<Symbol, DiffState>,
}

/// Read a symbol-keyed map, keeping only the values that parse as `V`.
///
/// The map itself must still be a JSON object.
fn entries_that_parse<'de, D, V>(deserializer: D) -> Result<HashMap<Symbol, V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    let raw = HashMap::<Symbol, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(symbol, value)| serde_json::from_value(value).ok().map(|v| (symbol, v)))
        .collect())
}

/// A decoded inbound envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// Initial snapshot of the catalog.
    Init(InitData),
    /// Full replacement of prices and diffs.
    Prices(PricesData),
    /// Server-confirmed favourites.
    FavouritesUpdated(Vec<Symbol>),
    /// Any other envelope type; carried only for logging.
    Unknown(String),
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

impl Inbound {
    /// Decode a text frame.
    ///
    /// Unknown envelope types decode to `Inbound::Unknown`. Invalid JSON, or a
    /// known type whose `data` has the wrong shape, is a `BoardError::Decode`.
    pub fn decode(frame: &str) -> Result<Inbound, BoardError> {
        let raw: RawEnvelope =
            serde_json::from_str(frame).map_err(|e| BoardError::Decode(e.to_string()))?;
        let kind = raw.kind.unwrap_or_default();
        let inbound = match kind.as_str() {
            INIT => Inbound::Init(payload(&kind, raw.data)?),
            PRICES => Inbound::Prices(payload(&kind, raw.data)?),
            FAVOURITES_UPDATED => Inbound::FavouritesUpdated(payload(&kind, raw.data)?),
            _ => Inbound::Unknown(kind),
        };
        Ok(inbound)
    }

    /// Envelope type name, as on the wire.
    pub fn kind(&self) -> &str {
        match self {
            Inbound::Init(_) => INIT,
            Inbound::Prices(_) => PRICES,
            Inbound::FavouritesUpdated(_) => FAVOURITES_UPDATED,
            Inbound::Unknown(kind) => kind,
        }
    }
}

fn payload<T: DeserializeOwned>(
    kind: &str,
    data: serde_json::Value,
) -> Result<T, BoardError> {
    serde_json::from_value(data).map_err(|e| BoardError::Decode(format!("{} payload: {}", kind, e)))
}

/// Command sent from the board to the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Outbound {
    /// Replace the favourites with exactly this list.
    #[serde(rename = "setFavourites")]
    SetFavourites(Vec<Symbol>),
}

impl Outbound {
    /// Encode the command to a JSON text frame.
    pub fn encode(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }
}
