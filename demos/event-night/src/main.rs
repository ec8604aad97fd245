//! A scripted "event night" against the Snaprally client core.
//!
//! Runs the real flows — create, join, react, climb the leaderboard —
//! over a file-backed store, so running it twice shows the device
//! remembering you. `RUST_LOG=debug` to watch the core's tracing.

use snaprally::prelude::*;

// ---------------------------------------------------------------------------
// Terminal notifier
// ---------------------------------------------------------------------------

/// Delivers notifications to stdout instead of an OS banner.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    async fn request_permission(&self) -> Result<bool, NotifyError> {
        Ok(true)
    }

    async fn deliver(&self, n: &Notification) -> Result<(), NotifyError> {
        println!("  🔔 {} — {}", n.title, n.body);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// The evening
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = std::env::temp_dir().join("snaprally-event-night");
    let store = FileStore::open(&dir).await?;
    let mut client = RallyClient::new(store);
    let notifier = TerminalNotifier;

    let event_id = EventId::from("evt-demo");

    // Returning user? The device remembers for 7 days.
    match client.resume(&event_id).await {
        Some(session) => {
            println!("welcome back, {}!", session.player_name);
        }
        None => {
            println!("first time here — hosting a new event");
            let event = client
                .create_event(event_id.clone(), PlayerId::from("owner-lisa"), "Lisa's 30th")
                .await?;
            println!("created \"{}\" — join code {}", event.title, event.event_code);

            client
                .join_event(event_id.clone(), PlayerId::from("owner-lisa"), "Lisa")
                .await?;
            println!("joined as Lisa");
        }
    }

    // A couple of photos come in from the feed; react to them.
    client.load_reactions().await;
    let photo = PhotoId::from("photo-golden-hour");
    let mut counts = ReactionCounts {
        heart: 4,
        fire: 1,
        hundred: 0,
    };

    for kind in ReactionKind::ALL {
        let outcome = client.react(&photo, kind, &mut counts).await;
        println!(
            "tapped {} → {} (displayed count now {})",
            kind.emoji(),
            if outcome.added { "added" } else { "removed" },
            counts.count(kind),
        );
    }

    // Leaderboard refreshes land; improvements get announced.
    println!("leaderboard refresh: #5, #5, #3, #2");
    for rank in [5, 5, 3, 2] {
        client.observe_rank(&notifier, rank).await?;
    }

    // What the device knows now.
    println!("events hosted here: {}", client.my_events().await.len());
    for session in client.active_sessions().await {
        println!(
            "  can resume into {} as {} until {}",
            session.event_id, session.player_name, session.expires_at
        );
    }

    println!("run again to see the session survive (state in {})", dir.display());
    Ok(())
}

// =========================================================================
// Tests
// =========================================================================
