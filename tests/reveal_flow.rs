//! Drives the card the way the browser does: every request goes through
//! `handle_request`, and every delay is honoured by posting the beacon the
//! previous response carried.

use sweetheart_card::{handle_request, init};

#[derive(Debug, PartialEq)]
struct Beacon {
    timer: String,
    track: String,
    delay_ms: u64,
}

fn field<'a>(html: &'a str, prefix: &str, end: char) -> Option<&'a str> {
    let start = html.find(prefix)? + prefix.len();
    let rest = &html[start..];
    Some(&rest[..rest.find(end)?])
}

/// Every beacon in a fragment, in document order.
fn beacons(html: &str) -> Vec<Beacon> {
    html.split(r#"hx-post="/api/card/tick""#)
        .skip(1)
        .map(|chunk| Beacon {
            timer: field(chunk, r#""timer":""#, '"').unwrap().to_string(),
            track: field(chunk, r#""track":""#, '"').unwrap().to_string(),
            delay_ms: field(chunk, "load delay:", 'm').unwrap().parse().unwrap(),
        })
        .collect()
}

fn only_beacon(html: &str, track: &str) -> Beacon {
    let mut found: Vec<Beacon> = beacons(html).into_iter().filter(|b| b.track == track).collect();
    assert_eq!(found.len(), 1, "expected one {track} beacon in {html}");
    found.remove(0)
}

fn tick(beacon: &Beacon) -> String {
    handle_request(
        "POST",
        "/api/card/tick",
        "",
        &format!("timer={}&track={}", beacon.timer, beacon.track),
    )
}

fn open_card() -> String {
    assert_eq!(init("", 11), "ok");
    let cover = handle_request("POST", "/api/card/open", "", "");
    assert!(cover.contains("cardHost.playAudio"));
    let intro = only_beacon(&cover, "intro");
    assert_eq!(intro.delay_ms, 1000);
    tick(&intro)
}

#[test]
fn opening_reveals_every_section() {
    let page = open_card();
    for id in ["twenty", "candle", "greeting", "photos", "video", "wishes", "question"] {
        assert!(page.contains(&format!(r#"<section id="{id}""#)), "missing {id}");
    }
    assert!(beacons(&page).is_empty());
}

#[test]
fn narrative_then_confirmation_then_celebration() {
    open_card();

    let mut html = handle_request("POST", "/api/question/begin", "", "");
    let mut delays = Vec::new();
    let mut shown = Vec::new();
    while let Some(b) = beacons(&html).into_iter().find(|b| b.track == "narrative") {
        shown.push(html.matches("narrative-line").count());
        delays.push(b.delay_ms);
        // Yes is not offered mid-narrative.
        let early = handle_request("POST", "/api/question/yes", "", "");
        assert!(early.contains("narrative-line"));
        html = tick(&b);
    }
    assert_eq!(shown, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(delays, vec![2000, 2500, 3000, 2500, 3500, 2000, 1500, 3000]);
    assert!(html.contains("Will you be my girlfriend, again and forever?"));

    let alert = handle_request("POST", "/api/question/no", "", "");
    assert!(alert.contains("alert("));
    assert!(handle_request("GET", "/api/question", "", "").contains("/api/question/no"));

    handle_request("POST", "/api/question/yes", "", "");
    handle_request("POST", "/api/question/yes", "", "");
    handle_request("POST", "/api/question/yes", "", "");
    let promise = handle_request("POST", "/api/question/yes", "", "");
    assert!(promise.contains("Oke, aku pegang janjimu ya..."));
    assert!(!promise.contains("/api/question/yes"));

    let hold = only_beacon(&promise, "confirmation");
    assert_eq!(hold.delay_ms, 2000);
    let salting = tick(&hold);
    assert!(salting.contains("yeaaaayyyy (salting)"));

    let hold = only_beacon(&salting, "confirmation");
    assert_eq!(hold.delay_ms, 2500);
    let last = tick(&hold);
    assert!(last.contains("SO NOW I CAN CALL U MY DARLING"));
    assert_eq!(last.matches("confetti-piece").count(), 150);
    assert!(beacons(&last).is_empty());

    // Replaying the old beacon is harmless.
    let replay = tick(&hold);
    assert!(replay.contains("SO NOW I CAN CALL U MY DARLING"));
    assert!(!replay.contains("confetti-piece"));
    assert!(!handle_request("GET", "/api/question", "", "").contains("confetti-piece"));
    assert!(beacons(&replay).is_empty());
}

#[test]
fn editing_a_wish_cancels_the_envelope() {
    open_card();

    let sending = handle_request("POST", "/api/wish/submit", "", "text=Semoga+kita+selalu+bersama");
    assert!(sending.contains("animate-envelope-send"));
    let envelope = only_beacon(&sending, "wish");
    assert_eq!(envelope.delay_ms, 2800);

    let editing = handle_request("POST", "/api/wish/edit", "", "");
    assert!(editing.contains("Semoga kita selalu bersama"));
    assert!(beacons(&editing).is_empty());

    // The envelope beacon from before the edit must not deliver anything.
    let after = tick(&envelope);
    assert!(after.contains("/api/wish/submit"));
    assert!(!after.contains("readonly"));

    let sending = handle_request("POST", "/api/wish/submit", "", "text=Selamanya");
    let delivered = tick(&only_beacon(&sending, "wish"));
    assert!(delivered.contains("Selamanya"));
    assert!(delivered.contains("/api/wish/edit"));
}

#[test]
fn candle_and_share_round_trip() {
    open_card();

    let blown = handle_request("POST", "/api/candle/blow", "", "");
    assert!(blown.contains("Horeee!"));
    assert!(!blown.contains("/api/candle/blow"));

    let copied = handle_request("POST", "/api/share/result", "", "outcome=copied");
    assert!(copied.contains("Link Disalin!"));
    let revert = only_beacon(&copied, "share");
    assert_eq!(revert.delay_ms, 2000);
    assert!(tick(&revert).contains("Bagikan Ucapan Ini"));
}

#[test]
fn teardown_silences_pending_beacons() {
    assert_eq!(init("", 3), "ok");
    let cover = handle_request("POST", "/api/card/open", "", "");
    let intro = only_beacon(&cover, "intro");
    assert!(handle_request("POST", "/api/card/teardown", "", "").is_empty());
    let page = tick(&intro);
    assert!(!page.contains("<main"));
}

#[test]
fn card_can_be_opened_again_after_teardown() {
    assert_eq!(init("", 4), "ok");
    let cover = handle_request("POST", "/api/card/open", "", "");
    let stale = only_beacon(&cover, "intro");
    handle_request("POST", "/api/card/teardown", "", "");

    let page = handle_request("GET", "/api/card/page", "", "");
    assert!(page.contains(r#"hx-post="/api/card/open""#));
    assert!(!page.contains("pointer-events-none"));

    let cover = handle_request("POST", "/api/card/open", "", "");
    let intro = only_beacon(&cover, "intro");
    assert_ne!(intro.timer, stale.timer);
    assert!(!tick(&stale).contains("<main"));
    assert!(tick(&intro).contains("<main"));
}

#[test]
fn beacons_from_before_a_reset_are_ignored() {
    assert_eq!(init("", 6), "ok");
    let cover = handle_request("POST", "/api/card/open", "", "");
    let old = only_beacon(&cover, "intro");
    handle_request("POST", "/api/card/reset", "", "");
    let cover = handle_request("POST", "/api/card/open", "", "");
    let fresh = only_beacon(&cover, "intro");
    assert_ne!(old.timer, fresh.timer);
    assert!(!tick(&old).contains("<main"));
}
