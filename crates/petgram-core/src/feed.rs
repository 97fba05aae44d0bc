//! Post feed state holder.
//!
//! Fetches through the injected [`PostsGateway`] and absorbs any gateway
//! failure into a built-in sample dataset - the only error-recovery policy
//! in the core. Local posts are prepended and discarded by the next load.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tokio::sync::watch;

use crate::domain::{FeedState, Media, Post};
use crate::ports::PostsGateway;

/// Author identity for the sample dataset and locally created posts.
pub const DEMO_AUTHOR: &str = "milo_dev";

/// Tuning knobs for [`FeedStore`].
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Replace the feed with the sample dataset when the gateway fails.
    /// When disabled the previous feed is kept and the failure is only
    /// logged, so a transient outage never blanks the screen.
    pub fallback_on_error: bool,
    /// Author assigned to locally created posts.
    pub local_author: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            fallback_on_error: true,
            local_author: DEMO_AUTHOR.to_string(),
        }
    }
}

/// Post feed state holder.
///
/// Single logical owner of [`FeedState`]; snapshots are replaced atomically
/// on load start/finish and on add.
pub struct FeedStore {
    gateway: Arc<dyn PostsGateway>,
    config: FeedConfig,
    state: watch::Sender<FeedState>,
    next_id: AtomicU32,
}

impl FeedStore {
    pub fn new(gateway: Arc<dyn PostsGateway>, config: FeedConfig) -> Self {
        let (state, _) = watch::channel(FeedState::default());
        Self {
            gateway,
            config,
            state,
            next_id: AtomicU32::new(1),
        }
    }

    /// Subscribe to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Fetch the feed from the gateway, replacing the current snapshot.
    ///
    /// Records map 1:1 into posts, preserving order and id; the id counter
    /// advances to `max(id) + 1`. Failures are never surfaced as a
    /// user-visible error. The loading flag clears on every exit path, and a
    /// call while a load is already in flight is rejected.
    pub async fn load(&self) {
        if self.state.borrow().is_loading {
            tracing::warn!("feed load rejected: load already in flight");
            return;
        }
        self.state.send_modify(|s| s.is_loading = true);

        match self.gateway.fetch_posts().await {
            Ok(records) => {
                let posts: Vec<Post> = records
                    .into_iter()
                    .map(|r| Post {
                        id: r.id,
                        author: r.author,
                        media: Media::Remote(r.image_url),
                        caption: r.caption,
                    })
                    .collect();
                let max_id = posts.iter().map(|p| p.id).max().unwrap_or(0);
                self.next_id.store(max_id + 1, Ordering::Relaxed);
                tracing::debug!(count = posts.len(), "feed loaded from gateway");
                self.state.send_modify(|s| {
                    s.posts = posts;
                    s.is_loading = false;
                });
            }
            Err(e) if self.config.fallback_on_error => {
                tracing::warn!(error = %e, "gateway fetch failed, loading sample dataset");
                let posts = sample_posts();
                let max_id = posts.iter().map(|p| p.id).max().unwrap_or(0);
                self.next_id.store(max_id + 1, Ordering::Relaxed);
                self.state.send_modify(|s| {
                    s.posts = posts;
                    s.is_loading = false;
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "gateway fetch failed, keeping current feed");
                self.state.send_modify(|s| s.is_loading = false);
            }
        }
    }

    /// Prepend a locally captured post and return its id.
    ///
    /// Purely local: the gateway is not involved, and the next `load`
    /// discards the post.
    pub fn add_local_post(&self, image: Vec<u8>, caption: impl Into<String>) -> u32 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = Post {
            id,
            author: self.config.local_author.clone(),
            media: Media::Local(image),
            caption: caption.into(),
        };
        tracing::debug!(id, "local post added");
        self.state.send_modify(|s| s.posts.insert(0, post));
        id
    }
}

/// Built-in dataset substituted when the gateway is unreachable.
fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            author: DEMO_AUTHOR.to_string(),
            media: Media::Remote("https://picsum.photos/id/237/600/400".to_string()),
            caption: "First photo on the feed!".to_string(),
        },
        Post {
            id: 2,
            author: DEMO_AUTHOR.to_string(),
            media: Media::Remote("https://picsum.photos/id/659/600/400".to_string()),
            caption: "Exploring new places.".to_string(),
        },
        Post {
            id: 3,
            author: DEMO_AUTHOR.to_string(),
            media: Media::Remote("https://picsum.photos/id/1025/600/400".to_string()),
            caption: "Best day at the park.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, AtomicUsize};
    use std::time::Duration;

    use super::*;
    use crate::error::GatewayError;
    use crate::ports::PostRecord;

    /// In-test gateway with a scriptable failure switch, mirroring a fake
    /// repository.
    struct StubGateway {
        records: Vec<PostRecord>,
        fail: AtomicBool,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl StubGateway {
        fn with_records(records: Vec<PostRecord>) -> Arc<Self> {
            Arc::new(Self {
                records,
                fail: AtomicBool::new(false),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            let stub = Self::with_records(Vec::new());
            stub.set_fail(true);
            stub
        }

        fn set_fail(&self, fail: bool) {
            self.fail.store(fail, Ordering::Relaxed);
        }
    }

    #[async_trait::async_trait]
    impl PostsGateway for StubGateway {
        async fn fetch_posts(&self) -> Result<Vec<PostRecord>, GatewayError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            tokio::time::sleep(self.delay).await;
            if self.fail.load(Ordering::Relaxed) {
                return Err(GatewayError::Transport("simulated network error".to_string()));
            }
            Ok(self.records.clone())
        }
    }

    fn record(id: u32, author: &str) -> PostRecord {
        PostRecord {
            id,
            author: author.to_string(),
            image_url: format!("https://example.com/{id}.jpg"),
            caption: format!("caption {id}"),
        }
    }

    fn store(gateway: Arc<StubGateway>) -> FeedStore {
        FeedStore::new(gateway, FeedConfig::default())
    }

    #[tokio::test]
    async fn load_preserves_gateway_order_and_ids() {
        let feed = store(StubGateway::with_records(vec![
            record(1, "ana"),
            record(2, "bob"),
            record(3, "cat"),
        ]));

        feed.load().await;

        let state = feed.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.posts.len(), 3);
        assert_eq!(
            state.posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(state.posts[0].author, "ana");
        assert_eq!(
            state.posts[0].media,
            Media::Remote("https://example.com/1.jpg".to_string())
        );
    }

    #[tokio::test]
    async fn local_post_after_load_takes_next_id_and_front_slot() {
        let feed = store(StubGateway::with_records(vec![
            record(1, "ana"),
            record(2, "bob"),
            record(3, "cat"),
        ]));
        feed.load().await;

        let id = feed.add_local_post(vec![0xFF, 0xD8], "x");

        assert_eq!(id, 4);
        let state = feed.snapshot();
        assert_eq!(state.posts.len(), 4);
        assert_eq!(state.posts[0].id, 4);
        assert_eq!(state.posts[0].author, DEMO_AUTHOR);
        assert_eq!(state.posts[0].media, Media::Local(vec![0xFF, 0xD8]));
    }

    #[tokio::test]
    async fn gateway_failure_substitutes_sample_dataset() {
        let feed = store(StubGateway::failing());

        feed.load().await;

        let state = feed.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.posts.len(), 3);
        assert_eq!(state.posts[0].author, DEMO_AUTHOR);
        // Counter resets past the sample ids.
        assert_eq!(feed.add_local_post(vec![1], "after outage"), 4);
    }

    #[tokio::test]
    async fn fallback_disabled_keeps_previous_feed() {
        let gateway = StubGateway::with_records(vec![record(1, "ana"), record(2, "bob")]);
        let feed = FeedStore::new(
            gateway.clone(),
            FeedConfig {
                fallback_on_error: false,
                ..FeedConfig::default()
            },
        );
        feed.load().await;
        assert_eq!(feed.snapshot().posts.len(), 2);

        gateway.set_fail(true);
        feed.load().await;

        let state = feed.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.posts[0].author, "ana");
    }

    #[tokio::test]
    async fn loaded_feed_has_unique_ids() {
        let feed = store(StubGateway::with_records(
            (1..=5).map(|i| record(i, "ana")).collect(),
        ));

        feed.load().await;

        let ids: Vec<u32> = feed.snapshot().posts.iter().map(|p| p.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[tokio::test]
    async fn reload_discards_local_posts() {
        let feed = store(StubGateway::with_records(vec![record(1, "ana")]));
        feed.load().await;
        feed.add_local_post(vec![1, 2, 3], "mine");
        assert_eq!(feed.snapshot().posts.len(), 2);

        feed.load().await;

        let state = feed.snapshot();
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].author, "ana");
    }

    #[tokio::test]
    async fn empty_feed_assigns_first_local_id() {
        let feed = store(StubGateway::with_records(Vec::new()));
        feed.load().await;

        assert_eq!(feed.add_local_post(vec![0], "first"), 1);
    }

    #[tokio::test]
    async fn in_flight_load_is_rejected() {
        let gateway = Arc::new(StubGateway {
            records: vec![record(1, "ana")],
            fail: AtomicBool::new(false),
            delay: Duration::from_millis(50),
            calls: AtomicUsize::new(0),
        });
        let feed = Arc::new(store(gateway.clone()));

        let first = {
            let feed = feed.clone();
            tokio::spawn(async move { feed.load().await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(feed.snapshot().is_loading);

        // Returns immediately without a second fetch.
        feed.load().await;
        first.await.unwrap();

        assert_eq!(gateway.calls.load(Ordering::Relaxed), 1);
        assert_eq!(feed.snapshot().posts.len(), 1);
    }
}
