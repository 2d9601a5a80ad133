// tests/ws_link.rs
use price_board::connection::{ConnectionManager, FrameOutcome};
use price_board::link::{LinkEvent, WsLink};
use price_common::Symbol;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;
use tungstenite::Message;

const WAIT: Duration = Duration::from_secs(5);

fn next_frame(link: &WsLink) -> String {
    match link.events.recv_timeout(WAIT).unwrap() {
        LinkEvent::Frame(frame) => frame,
        other => panic!("expected a frame, got {:?}", other),
    }
}

#[test]
fn loopback_round_trip_and_server_close() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut ws = tungstenite::accept(stream).unwrap();
        ws.send(Message::text(
            r#"{"type":"init","data":{"allSymbols":["BTC","ETH"],"favourites":[]}}"#,
        ))
        .unwrap();

        let command = loop {
            match ws.read().unwrap() {
                Message::Text(text) => break text,
                _ => continue,
            }
        };
        ws.send(Message::text(r#"{"type":"favouritesUpdated","data":["BTC"]}"#))
            .unwrap();
        ws.close(None).unwrap();
        while ws.read().is_ok() {}
        command
    });

    let link = WsLink::connect(&format!("ws://{}", addr), Duration::from_millis(20)).unwrap();
    let mut board = ConnectionManager::new(link.sender.clone());

    let outcome = board.handle_frame(&next_frame(&link)).unwrap();
    assert_eq!(outcome, FrameOutcome::Init);

    board.toggle_favourite(&Symbol::from("BTC")).unwrap();
    let outcome = board.handle_frame(&next_frame(&link)).unwrap();
    assert_eq!(outcome, FrameOutcome::FavouritesUpdated);
    assert!(board.catalog().is_favourite("BTC"));

    let closed = link.events.recv_timeout(WAIT).unwrap();
    assert!(matches!(closed, LinkEvent::Closed(_)), "got {:?}", closed);

    assert_eq!(
        server.join().unwrap(),
        r#"{"type":"setFavourites","data":["BTC"]}"#
    );
}

#[test]
fn rejects_secure_endpoints() {
    assert!(WsLink::connect("wss://localhost:3000", Duration::from_millis(20)).is_err());
}
