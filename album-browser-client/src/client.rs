use std::time::Duration;

use album_browser_models::{Album, AlbumId};
use async_trait::async_trait;
use snafu::prelude::*;
use url::Url;

use crate::{
    Result,
    catalog_models::album::{parse_album, parse_album_list},
    error::{HttpSnafu, InvalidUrlSnafu, NetworkSnafu, NotFoundSnafu},
};

pub const DEFAULT_BASE_URL: &str = "https://music.juanfrausto.com/api/";

/// Read access to the remote album catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET {base}/albums`, in server order.
    async fn list_albums(&self) -> Result<Vec<Album>>;

    /// `GET {base}/albums/{id}`. A 404 is reported as [`crate::Error::NotFound`].
    async fn album(&self, id: AlbumId) -> Result<Album>;
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// `timeout` of `None` lets a hung request wait forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().context(NetworkSnafu {
            url: base_url.as_str(),
        })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).context(InvalidUrlSnafu)
    }

    async fn get(&self, url: &Url) -> Result<reqwest::Response> {
        tracing::debug!("GET {url}");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .context(NetworkSnafu { url: url.as_str() })?;
        tracing::debug!("GET {url} -> {}", response.status());
        Ok(response)
    }
}

#[async_trait]
impl CatalogApi for Client {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        let url = self.endpoint("albums")?;
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return HttpSnafu {
                url: url.as_str(),
                status,
            }
            .fail();
        }

        let body = response
            .bytes()
            .await
            .context(NetworkSnafu { url: url.as_str() })?;

        parse_album_list(&body)
    }

    async fn album(&self, id: AlbumId) -> Result<Album> {
        let url = self.endpoint(&format!("albums/{id}"))?;
        let response = self.get(&url).await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return NotFoundSnafu { id }.fail();
        }
        if !status.is_success() {
            return HttpSnafu {
                url: url.as_str(),
                status,
            }
            .fail();
        }

        let body = response
            .bytes()
            .await
            .context(NetworkSnafu { url: url.as_str() })?;

        let album = parse_album(&body)?;
        if album.id != id {
            tracing::warn!("Requested album {id} but the service answered with album {}", album.id);
        }

        Ok(album)
    }
}

/// Relative joins drop the last path segment unless the base ends in `/`.
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url).context(InvalidUrlSnafu)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    fn catalog_router() -> Router {
        Router::new()
            .route(
                "/api/albums",
                get(|| async {
                    Json(json!([
                        {"id": 1, "title": "A", "artist": "X", "image": "u1"},
                        {"id": "2", "title": "B", "artist": "Y", "image": "u2", "description": "second"}
                    ]))
                }),
            )
            .route(
                "/api/albums/{id}",
                get(|Path(id): Path<u32>| async move {
                    match id {
                        1 => Ok(Json(json!({"id": 1, "title": "A", "artist": "X", "image": "u1"}))),
                        500 => Err(StatusCode::INTERNAL_SERVER_ERROR),
                        _ => Err(StatusCode::NOT_FOUND),
                    }
                }),
            )
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = normalize_base_url("http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");

        let url = normalize_base_url(DEFAULT_BASE_URL).unwrap();
        assert_eq!(url.join("albums/3").unwrap().as_str(), "https://music.juanfrausto.com/api/albums/3");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            Client::new("not a url", None),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn lists_albums_in_server_order() {
        let base = serve(catalog_router()).await;
        let client = Client::new(&base, None).unwrap();

        let albums = client.list_albums().await.unwrap();

        assert_eq!(
            albums,
            vec![
                Album::new(1, "A", "X", "u1", None),
                Album::new(2, "B", "Y", "u2", Some("second".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn fetches_single_album() {
        let base = serve(catalog_router()).await;
        let client = Client::new(&base, None).unwrap();

        let album = client.album(AlbumId(1)).await.unwrap();

        assert_eq!(album, Album::new(1, "A", "X", "u1", None));
    }

    #[tokio::test]
    async fn missing_album_is_not_found() {
        let base = serve(catalog_router()).await;
        let client = Client::new(&base, None).unwrap();

        let error = client.album(AlbumId(42)).await.unwrap_err();

        assert!(matches!(error, Error::NotFound { id: AlbumId(42) }));
        assert_eq!(error.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn server_error_is_http_error() {
        let base = serve(catalog_router()).await;
        let client = Client::new(&base, None).unwrap();

        let error = client.album(AlbumId(500)).await.unwrap_err();

        assert!(matches!(
            error,
            Error::Http { status, .. } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn missing_list_endpoint_is_http_error_not_not_found() {
        let base = serve(Router::new()).await;
        let client = Client::new(&base, None).unwrap();

        let error = client.list_albums().await.unwrap_err();

        assert!(matches!(
            error,
            Error::Http { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let router = Router::new().route("/api/albums", get(|| async { "<html>oops</html>" }));
        let base = serve(router).await;
        let client = Client::new(&base, None).unwrap();

        let error = client.list_albums().await.unwrap_err();

        assert!(matches!(error, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn unreachable_service_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new(&format!("http://{addr}/api"), None).unwrap();
        let error = client.list_albums().await.unwrap_err();

        assert!(matches!(error, Error::Network { .. }));
    }

    #[tokio::test]
    async fn elapsed_timeout_is_network_error() {
        let router = Router::new().route(
            "/api/albums",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!([]))
            }),
        );
        let base = serve(router).await;
        let client = Client::new(&base, Some(Duration::from_millis(100))).unwrap();

        let error = client.list_albums().await.unwrap_err();

        assert!(matches!(error, Error::Network { .. }));
    }
}
