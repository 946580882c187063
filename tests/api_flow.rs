//! Integration tests for the token chain and download paths, driven
//! against a local mock server through the endpoint configuration.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use twitter_videodl::config::{Config, EndpointsConfig};
use twitter_videodl::download::{download_direct, DownloadOutcome};
use twitter_videodl::{Playback, TweetRef, TwitterApi};

const BEARER_TOKEN: &str = "Bearer AAAAAAAAAtest%3Dtoken";
const GUEST_TOKEN: &str = "1468923867531223471";

/// Endpoint configuration pointed at the mock server.
fn test_endpoints(server: &MockServer) -> EndpointsConfig {
    EndpointsConfig {
        player_url: format!("{}/i/videos/tweet/", server.uri()),
        api_url: format!("{}/1.1/videos/tweet/config/", server.uri()),
        media_url: server.uri(),
        guest_token_url: format!("{}/1.1/guest/activate.json", server.uri()),
    }
}

fn test_config(server: &MockServer) -> Config {
    Config {
        endpoints: test_endpoints(server),
        ..Default::default()
    }
}

/// Mount the player page and script bundle for the given tweet ID.
async fn mount_player(server: &MockServer, tweet_id: &str) {
    let html = format!(
        r#"<!DOCTYPE html><html><head><script src="{}/web-video-player/bundle.abc123.js"></script></head><body></body></html>"#,
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path(format!("/i/videos/tweet/{}", tweet_id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;

    let script = format!(
        r#"!function(){{var r={{authorization:"{}",other:"x"}};return r}}();"#,
        BEARER_TOKEN
    );
    Mock::given(method("GET"))
        .and(path("/web-video-player/bundle.abc123.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string(script))
        .mount(server)
        .await;
}

#[tokio::test]
async fn scraper_extracts_bearer_token() {
    let server = MockServer::start().await;
    mount_player(&server, "12345").await;

    let api = TwitterApi::new(test_endpoints(&server), "test-agent").unwrap();
    let tweet = TweetRef::parse("https://twitter.com/user/status/12345").unwrap();

    let token = api.fetch_bearer_token(&tweet).await.unwrap();
    assert_eq!(token, BEARER_TOKEN);
}

#[tokio::test]
async fn scraper_fails_on_page_without_script() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/i/videos/tweet/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>nope</body></html>"))
        .mount(&server)
        .await;

    let api = TwitterApi::new(test_endpoints(&server), "test-agent").unwrap();
    let tweet = TweetRef::parse("https://twitter.com/user/status/12345").unwrap();

    let err = api.fetch_bearer_token(&tweet).await.unwrap_err();
    assert!(matches!(err, twitter_videodl::Error::Parse(_)));
}

#[tokio::test]
async fn exchanger_returns_guest_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/guest/activate.json"))
        .and(header("authorization", BEARER_TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(r#"{{"guest_token":"{}"}}"#, GUEST_TOKEN)),
        )
        .mount(&server)
        .await;

    let api = TwitterApi::new(test_endpoints(&server), "test-agent").unwrap();
    let token = api.activate_guest_token(BEARER_TOKEN).await.unwrap();
    assert_eq!(token, GUEST_TOKEN);
}

#[tokio::test]
async fn exchanger_fails_on_missing_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/guest/activate.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"something_else":1}"#))
        .mount(&server)
        .await;

    let api = TwitterApi::new(test_endpoints(&server), "test-agent").unwrap();
    let err = api.activate_guest_token(BEARER_TOKEN).await.unwrap_err();
    assert!(matches!(err, twitter_videodl::Error::Parse(_)));
}

#[tokio::test]
async fn resolver_returns_playback_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/guest/activate.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(r#"{{"guest_token":"{}"}}"#, GUEST_TOKEN)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.1/videos/tweet/config/12345.json"))
        .and(header("authorization", BEARER_TOKEN))
        .and(header("x-guest-token", GUEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"track":{"contentId":"12345","playbackUrl":"https://video.twimg.com/clip.mp4","viewCount":7}}"#,
        ))
        .mount(&server)
        .await;

    let api = TwitterApi::new(test_endpoints(&server), "test-agent").unwrap();
    let tweet = TweetRef::parse("https://twitter.com/user/status/12345").unwrap();

    let playback_url = api.resolve_playback_url(&tweet, BEARER_TOKEN).await.unwrap();
    assert_eq!(playback_url, "https://video.twimg.com/clip.mp4");
    assert!(matches!(
        Playback::classify(&playback_url),
        Playback::Direct { .. }
    ));
}

#[tokio::test]
async fn resolver_fails_on_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/guest/activate.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(r#"{{"guest_token":"{}"}}"#, GUEST_TOKEN)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.1/videos/tweet/config/12345.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = TwitterApi::new(test_endpoints(&server), "test-agent").unwrap();
    let tweet = TweetRef::parse("https://twitter.com/user/status/12345").unwrap();

    let err = api.resolve_playback_url(&tweet, BEARER_TOKEN).await.unwrap_err();
    assert!(matches!(err, twitter_videodl::Error::Network(_)));
}

#[tokio::test]
async fn direct_download_writes_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clip.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fake mp4 bytes".to_vec()))
        .mount(&server)
        .await;

    let output_dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server);
    config.options.output_directory = Some(output_dir.path().to_path_buf());

    let api = TwitterApi::new(config.endpoints.clone(), "test-agent").unwrap();
    let tweet = TweetRef::parse("https://twitter.com/user/status/12345").unwrap();
    let url = format!("{}/clip.mp4", server.uri());

    let outcome = download_direct(&api, &config, &tweet, &url, "mp4").await.unwrap();

    let expected = output_dir.path().join("12345.mp4");
    assert_eq!(outcome, DownloadOutcome::Downloaded(expected.clone()));
    assert_eq!(std::fs::read(expected).unwrap(), b"fake mp4 bytes");
}

#[tokio::test]
async fn direct_download_skips_existing_file() {
    // No mocks mounted: any network request would fail the test.
    let server = MockServer::start().await;

    let output_dir = tempfile::tempdir().unwrap();
    let existing = output_dir.path().join("12345.mp4");
    std::fs::write(&existing, b"already here").unwrap();

    let mut config = test_config(&server);
    config.options.output_directory = Some(output_dir.path().to_path_buf());

    let api = TwitterApi::new(config.endpoints.clone(), "test-agent").unwrap();
    let tweet = TweetRef::parse("https://twitter.com/user/status/12345").unwrap();
    let url = format!("{}/clip.mp4", server.uri());

    let outcome = download_direct(&api, &config, &tweet, &url, "mp4").await.unwrap();

    assert_eq!(outcome, DownloadOutcome::Skipped(existing.clone()));
    assert_eq!(std::fs::read(existing).unwrap(), b"already here");
}

#[tokio::test]
async fn manifest_fetch_returns_raw_text() {
    let server = MockServer::start().await;
    let manifest = "#EXTM3U\n/ext_tw_video/123/pu/pl/320x180.m3u8\n/ext_tw_video/123/pu/pl/1280x720.m3u8\n";
    Mock::given(method("GET"))
        .and(path("/ext_tw_video/123/pu/pl/master.m3u8"))
        .respond_with(ResponseTemplate::new(200).set_body_string(manifest))
        .mount(&server)
        .await;

    let api = TwitterApi::new(test_endpoints(&server), "test-agent").unwrap();
    let url = format!("{}/ext_tw_video/123/pu/pl/master.m3u8", server.uri());

    let content = api.fetch_manifest(&url).await.unwrap();
    assert_eq!(content, manifest);
}
