// tests/board_scenarios.rs
use price_board::connection::{ConnectionManager, FrameOutcome, Transport};
use price_board::icon::{Icon, IconColor};
use price_board::projector::{SortCommand, SortDirection, SortField};
use price_board::render::NO_DATA;
use price_common::{BoardError, Symbol};

#[derive(Default)]
struct MockSocket {
    sent: Vec<String>,
    closed: bool,
}

impl Transport for MockSocket {
    fn send_text(&mut self, text: String) -> Result<(), BoardError> {
        self.sent.push(text);
        Ok(())
    }

    fn close(&mut self) -> Result<(), BoardError> {
        self.closed = true;
        Ok(())
    }
}

fn board() -> ConnectionManager<MockSocket> {
    ConnectionManager::new(MockSocket::default())
}

fn visible(board: &ConnectionManager<MockSocket>) -> Vec<String> {
    board
        .view()
        .visible()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn shows_no_data_before_init() {
    let board = board();
    assert!(board.render().contains(NO_DATA));
}

#[test]
fn init_lists_symbols() {
    let mut board = board();
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC","ETH"],"favourites":["BTC"]}}"#)
        .unwrap();
    assert_eq!(visible(&board), vec!["BTC", "ETH"]);
    let text = board.render();
    assert!(text.contains("BTC"));
    assert!(text.contains("ETH"));
    assert!(!text.contains(NO_DATA));
}

#[test]
fn prices_render_with_six_decimals_and_icons() {
    let mut board = board();
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC","ETH"],"favourites":["BTC"]}}"#)
        .unwrap();
    let outcome = board
        .handle_frame(r#"{"type":"prices","data":{"prices":{"BTC":{"USD":30250.123456}},"diffs":{"BTC":"up"}}}"#)
        .unwrap();
    assert_eq!(outcome, FrameOutcome::Prices);

    let rows = board.rows();
    assert_eq!(rows[0].symbol, Symbol::from("BTC"));
    assert_eq!(rows[0].price_text(), "$30250.123456");
    assert_eq!(rows[0].change.icon, Icon::ArrowUp);
    assert_eq!(rows[0].change.color, IconColor::Green);
    assert!(rows[0].favourite);

    assert_eq!(rows[1].symbol, Symbol::from("ETH"));
    assert_eq!(rows[1].price_text(), "$0");
    assert_eq!(rows[1].change.icon, Icon::Minus);
    assert_eq!(rows[1].change.color, IconColor::Grey);

    assert!(board.render().contains("$30250.123456"));
    assert!(board.prices().updated_at().is_some());
}

#[test]
fn later_prices_replace_instead_of_merging() {
    let mut board = board();
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC","ETH"],"favourites":[]}}"#)
        .unwrap();
    board
        .handle_frame(r#"{"type":"prices","data":{"prices":{"BTC":{"USD":1.5},"ETH":{"USD":2.5}},"diffs":{"BTC":"down","ETH":"up"}}}"#)
        .unwrap();
    board
        .handle_frame(r#"{"type":"prices","data":{"prices":{"BTC":{"USD":1.25}},"diffs":{"BTC":"same"}}}"#)
        .unwrap();

    let rows = board.rows();
    let eth = rows.iter().find(|r| r.symbol.as_str() == "ETH").unwrap();
    assert_eq!(eth.price_text(), "$0");
    assert_eq!(eth.change.icon, Icon::Minus);
    assert_eq!(eth.change.color, IconColor::Grey);
    let btc = rows.iter().find(|r| r.symbol.as_str() == "BTC").unwrap();
    assert_eq!(btc.price_text(), "$1.250000");
}

#[test]
fn search_filters_case_insensitively() {
    let mut board = board();
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC","ETH","DOGE"],"favourites":[]}}"#)
        .unwrap();
    board.search("doge");
    assert_eq!(visible(&board), vec!["DOGE"]);
    assert!(!board.render().contains("BTC"));
}

#[test]
fn star_click_sends_full_list_and_waits_for_echo() {
    let mut board = board();
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC"],"favourites":[]}}"#)
        .unwrap();
    board.toggle_favourite(&Symbol::from("BTC")).unwrap();

    assert_eq!(
        board.transport().sent,
        vec![r#"{"type":"setFavourites","data":["BTC"]}"#.to_string()]
    );
    assert!(!board.catalog().is_favourite("BTC"));
    assert!(board.rows()[0].pending);
    assert!(!board.rows()[0].favourite);

    board
        .handle_frame(r#"{"type":"favouritesUpdated","data":["BTC"]}"#)
        .unwrap();
    assert!(board.rows()[0].favourite);
    assert!(!board.rows()[0].pending);
}

#[test]
fn removing_a_favourite_sends_the_rest() {
    let mut board = board();
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC","ETH","SOL"],"favourites":["SOL","BTC","ETH"]}}"#)
        .unwrap();
    board.toggle_favourite(&Symbol::from("BTC")).unwrap();
    assert_eq!(
        board.transport().sent,
        vec![r#"{"type":"setFavourites","data":["SOL","ETH"]}"#.to_string()]
    );
    assert_eq!(visible(&board), vec!["SOL", "BTC", "ETH"]);
}

#[test]
fn price_sort_puts_unknown_prices_at_zero() {
    let mut board = board();
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC","ETH","DOGE"],"favourites":["BTC"]}}"#)
        .unwrap();
    board
        .handle_frame(r#"{"type":"prices","data":{"prices":{"BTC":{"USD":30000},"ETH":{"USD":2000}},"diffs":{}}}"#)
        .unwrap();
    board.sort(SortCommand::new(SortField::Price, SortDirection::Asc));
    assert_eq!(visible(&board), vec!["BTC", "DOGE", "ETH"]);
}

#[test]
fn sort_clears_search_and_echo_restores_it() {
    let mut board = board();
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC","ETH","DOGE"],"favourites":[]}}"#)
        .unwrap();
    board.search("o");
    assert_eq!(visible(&board), vec!["DOGE"]);

    board.sort(SortCommand::new(SortField::Name, SortDirection::Desc));
    assert_eq!(visible(&board), vec!["ETH", "DOGE", "BTC"]);

    board
        .handle_frame(r#"{"type":"favouritesUpdated","data":["ETH"]}"#)
        .unwrap();
    assert_eq!(visible(&board), vec!["DOGE"]);
}

#[test]
fn bad_frame_is_reported_and_the_next_one_still_applies() {
    let mut board = board();
    assert!(matches!(board.handle_frame("]]"), Err(BoardError::Decode(_))));
    board
        .handle_frame(r#"{"type":"init","data":{"allSymbols":["BTC"],"favourites":[]}}"#)
        .unwrap();
    assert_eq!(visible(&board), vec!["BTC"]);
}

#[test]
fn teardown_closes_the_transport() {
    let mut board = board();
    board.close().unwrap();
    assert!(board.transport().closed);
    assert!(!board.is_open());
}
