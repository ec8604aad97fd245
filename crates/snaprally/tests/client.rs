//! End-to-end tests for the client core over one shared device store.
//!
//! These walk the flows a real evening produces: the host creates an
//! event, a guest joins and reacts through a stories view, everyone
//! relaunches the app at some point, ranks move, people log out.

use std::sync::Mutex;

use snaprally::prelude::*;

/// A [`Notifier`] that records what it was asked to show.
#[derive(Default)]
struct Recorder(Mutex<Vec<Notification>>);

impl Recorder {
    fn titles(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|n| n.title.clone()).collect()
    }
}

impl Notifier for Recorder {
    async fn request_permission(&self) -> Result<bool, NotifyError> {
        Ok(true)
    }
    async fn deliver(&self, n: &Notification) -> Result<(), NotifyError> {
        self.0.lock().unwrap().push(n.clone());
        Ok(())
    }
}

fn eid(id: &str) -> EventId {
    EventId::from(id)
}

#[tokio::test]
async fn test_host_creates_event_and_joins_it() {
    let store = MemoryStore::new();
    let client = RallyClient::new(store);

    let event = client
        .create_event(eid("evt1"), PlayerId::from("owner1"), "Lisa's 30th")
        .await
        .unwrap();
    assert_eq!(event.event_code.len(), 6);

    // The host plays too.
    client
        .join_event(eid("evt1"), PlayerId::from("owner1"), "Lisa")
        .await
        .unwrap();

    assert_eq!(client.my_events().await.len(), 1);
    assert_eq!(
        client.resume(&eid("evt1")).await.unwrap().player_name,
        "Lisa"
    );
}

#[tokio::test]
async fn test_guest_session_survives_relaunch() {
    let store = MemoryStore::new();

    // First launch: join via code.
    RallyClient::new(store.clone())
        .join_event(eid("evt1"), PlayerId::from("p7"), "Marco")
        .await
        .unwrap();

    // Relaunch: a brand-new client over the same device storage.
    let relaunched = RallyClient::new(store);
    let session = relaunched.resume(&eid("evt1")).await.unwrap();
    assert_eq!(session.player_id, PlayerId::from("p7"));
}

#[tokio::test]
async fn test_stories_view_reaction_flow() {
    let store = MemoryStore::new();
    let mut client = RallyClient::new(store.clone());
    client.load_reactions().await;

    let photo = PhotoId::from("ph1");
    // Counts as the backend last reported them.
    let mut counts = ReactionCounts {
        heart: 2,
        fire: 0,
        hundred: 0,
    };

    // Tap heart: add — displayed count bumps immediately.
    let outcome = client.react(&photo, ReactionKind::Heart, &mut counts).await;
    assert!(outcome.added);
    assert_eq!(counts.heart, 3);

    // Tap heart again: remove.
    let outcome = client.react(&photo, ReactionKind::Heart, &mut counts).await;
    assert!(!outcome.added);
    assert_eq!(counts.heart, 2);

    // Fire is independent of heart.
    let outcome = client.react(&photo, ReactionKind::Fire, &mut counts).await;
    assert!(outcome.added);
    assert_eq!(counts.fire, 1);

    // Relaunch: the device still knows fire is ours and heart is not.
    let mut relaunched = RallyClient::new(store);
    relaunched.load_reactions().await;
    assert!(relaunched.has_reacted(&photo, ReactionKind::Fire));
    assert!(!relaunched.has_reacted(&photo, ReactionKind::Heart));
}

#[tokio::test]
async fn test_rank_improvements_notify_drops_stay_quiet() {
    let mut client = RallyClient::new(MemoryStore::new());
    let recorder = Recorder::default();

    client.observe_rank(&recorder, 5).await.unwrap(); // baseline
    client.observe_rank(&recorder, 5).await.unwrap(); // unchanged
    client.observe_rank(&recorder, 3).await.unwrap(); // improved!
    client.observe_rank(&recorder, 6).await.unwrap(); // dropped — quiet
    client.observe_rank(&recorder, 2).await.unwrap(); // improved again

    let titles = recorder.titles();
    assert_eq!(titles.len(), 2);
    assert!(titles.iter().all(|t| t.contains("You moved up")));
}

#[tokio::test]
async fn test_logout_wipes_sessions_but_keeps_owned_events() {
    let store = MemoryStore::new();
    let client = RallyClient::new(store);

    client
        .create_event(eid("evt1"), PlayerId::from("owner1"), "Game night")
        .await
        .unwrap();
    client
        .join_event(eid("evt1"), PlayerId::from("owner1"), "Lisa")
        .await
        .unwrap();
    client
        .join_event(eid("evt2"), PlayerId::from("p2"), "Lisa")
        .await
        .unwrap();

    client.logout().await.unwrap();

    // Sessions are gone; the record of having hosted evt1 is not.
    assert!(client.active_sessions().await.is_empty());
    assert_eq!(client.my_events().await.len(), 1);
}

#[tokio::test]
async fn test_file_store_backs_a_full_flow() {
    // Same flow as above, but on the durable backend — this is the
    // configuration a desktop embedding would actually run.
    let dir = std::env::temp_dir().join(format!(
        "snaprally-client-test-{}",
        std::process::id()
    ));
    let store = FileStore::open(&dir).await.unwrap();

    let mut client = RallyClient::new(store.clone());
    client
        .join_event(eid("evt1"), PlayerId::from("p1"), "Alice")
        .await
        .unwrap();
    let mut counts = ReactionCounts::default();
    client
        .react(&PhotoId::from("ph1"), ReactionKind::Hundred, &mut counts)
        .await;

    let mut relaunched = RallyClient::new(store);
    relaunched.load_reactions().await;
    assert!(relaunched.resume(&eid("evt1")).await.is_some());
    assert!(relaunched.has_reacted(&PhotoId::from("ph1"), ReactionKind::Hundred));

    let _ = tokio::fs::remove_dir_all(&dir).await;
}
