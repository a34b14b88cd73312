use std::{future::Future, sync::Arc};

use tokio::{sync::watch, task::JoinHandle};

use crate::{ViewStateReceiver, cancel::CancelToken, error::user_message};

/// What a screen currently renders. Every screen entry starts in `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn from_result(result: album_browser_client::Result<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Error(user_message(&error)),
        }
    }
}

/// One in-flight fetch bound to one screen entry.
///
/// The fetch runs on its own task and commits into a watch channel. Dropping the
/// `Load` (or calling [`Load::dismount`]) cancels the token and aborts the task, so a
/// response that arrives afterwards is never committed.
#[derive(Debug)]
pub struct Load<T> {
    screen: &'static str,
    state: Arc<watch::Sender<ViewState<T>>>,
    token: CancelToken,
    task: JoinHandle<()>,
}

impl<T> Load<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(screen: &'static str, fetch: F) -> Self
    where
        F: Future<Output = album_browser_client::Result<T>> + Send + 'static,
    {
        let (state, _) = watch::channel(ViewState::Loading);
        let state = Arc::new(state);
        let token = CancelToken::new();

        let task = tokio::spawn(commit_when_live(
            screen,
            token.clone(),
            state.clone(),
            fetch,
        ));

        Self {
            screen,
            state,
            token,
            task,
        }
    }

    pub fn subscribe(&self) -> ViewStateReceiver<T> {
        self.state.subscribe()
    }

    pub fn current(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&ViewState<T>) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Waits until the fetch has committed. Never resolves once dismounted.
    pub async fn settled(&self) -> ViewState<T> {
        let mut rx = self.state.subscribe();
        match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.current(),
        }
    }
}

impl<T> Load<T> {
    pub fn is_dismounted(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn dismount(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Dismounting {} screen", self.screen);
        }
        self.token.cancel();
        self.task.abort();
    }
}

impl<T> Drop for Load<T> {
    fn drop(&mut self) {
        self.dismount();
    }
}

pub(crate) async fn commit_when_live<T, F>(
    screen: &'static str,
    token: CancelToken,
    state: Arc<watch::Sender<ViewState<T>>>,
    fetch: F,
) where
    F: Future<Output = album_browser_client::Result<T>>,
{
    let result = tokio::select! {
        _ = token.cancelled() => {
            tracing::debug!("Fetch for {screen} screen cancelled");
            return;
        }
        result = fetch => result,
    };

    if token.is_cancelled() {
        tracing::debug!("Discarding late response for dismounted {screen} screen");
        return;
    }

    if let Err(error) = &result {
        tracing::error!("Error loading {screen} screen: {error}");
    }

    state.send_replace(ViewState::from_result(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use album_browser_client::{Error, StatusCode};
    use album_browser_models::AlbumId;
    use std::time::Duration;
    use tokio::sync::Notify;

    #[test]
    fn accessors_follow_the_active_variant() {
        let loading: ViewState<u32> = ViewState::default();
        assert!(loading.is_loading());
        assert_eq!(loading.ready(), None);

        let ready = ViewState::Ready(3);
        assert!(ready.is_ready());
        assert_eq!(ready.ready(), Some(&3));

        let error: ViewState<u32> = ViewState::Error("boom".to_string());
        assert!(error.is_error());
        assert_eq!(error.error(), Some("boom"));
    }

    #[test]
    fn not_found_collapses_to_not_found_message() {
        let state: ViewState<u32> = ViewState::from_result(Err(Error::NotFound { id: AlbumId(42) }));

        assert_eq!(state, ViewState::Error("Not found".to_string()));
    }

    #[test]
    fn http_error_message_carries_status() {
        let state: ViewState<u32> = ViewState::from_result(Err(Error::Http {
            url: "http://localhost/albums".to_string(),
            status: StatusCode::BAD_GATEWAY,
        }));

        assert_eq!(
            state,
            ViewState::Error("Server responded with status 502".to_string())
        );
    }

    #[tokio::test]
    async fn commits_successful_fetch() {
        let load = Load::spawn("test", async { Ok(vec![1, 2, 3]) });

        assert_eq!(load.settled().await, ViewState::Ready(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn starts_in_loading() {
        let gate = Arc::new(Notify::new());
        let load = {
            let gate = gate.clone();
            Load::spawn("test", async move {
                gate.notified().await;
                Ok(1)
            })
        };

        assert!(load.current().is_loading());
        gate.notify_one();
        assert_eq!(load.settled().await, ViewState::Ready(1));
    }

    #[tokio::test]
    async fn cancelled_token_blocks_commit() {
        let (state, rx) = watch::channel(ViewState::Loading);
        let state = Arc::new(state);
        let token = CancelToken::new();
        token.cancel();

        commit_when_live("test", token, state.clone(), async { Ok(5) }).await;

        assert!(rx.borrow().is_loading());
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn dismount_discards_late_response() {
        let gate = Arc::new(Notify::new());
        let load = {
            let gate = gate.clone();
            Load::spawn("test", async move {
                gate.notified().await;
                Ok("late")
            })
        };
        let rx = load.subscribe();
        tokio::task::yield_now().await;

        load.dismount();
        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(load.is_dismounted());
        assert!(rx.borrow().is_loading());
        assert!(!rx.has_changed().unwrap());
    }
}
