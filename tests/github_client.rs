use chrono::NaiveDate;
use ghprofile::github::{ClientConfig, GitHubClient};
use ghprofile::{date_window_ending, ProfileError};
use httpmock::prelude::*;
use serde_json::json;

fn client(server: &MockServer) -> GitHubClient {
    GitHubClient::new(&ClientConfig {
        api_url: server.base_url(),
        ..ClientConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn fetch_profile_joins_both_requests() {
    let server = MockServer::start_async().await;

    let repos = server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/repos");
            then.status(200).json_body(json!([
                { "name": "spoon-knife", "html_url": "https://github.com/octocat/spoon-knife",
                  "description": "fork me", "stargazers_count": 12, "forks_count": 30 }
            ]));
        })
        .await;
    let events = server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/events/public");
            then.status(200).json_body(json!([
                { "type": "PushEvent", "created_at": "2024-03-15T08:00:00Z",
                  "payload": { "commits": [{}, {}] } },
                "garbage",
                { "type": "CreateEvent", "created_at": "2024-03-15T09:00:00Z" }
            ]));
        })
        .await;

    let window = date_window_ending(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 2).unwrap();
    let report = client(&server).fetch_profile("octocat", &window).await.unwrap();

    repos.assert_async().await;
    events.assert_async().await;
    assert_eq!(report.username, "octocat");
    assert_eq!(report.repositories.len(), 1);
    assert_eq!(report.repositories[0].forks_count, 30);
    assert_eq!(report.daily_commits.len(), 2);
    assert_eq!(report.daily_commits[0].count, 0);
    assert_eq!(report.daily_commits[1].count, 2);
    assert_eq!(report.total_commits(), 2);
}

#[tokio::test]
async fn not_found_status_maps_to_user_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/nobody/repos");
            then.status(404).json_body(json!({ "message": "Not Found" }));
        })
        .await;

    let err = client(&server).fetch_repos("nobody").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn other_failures_keep_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/events/public");
            then.status(503).body("unavailable");
        })
        .await;

    match client(&server).fetch_events("octocat").await {
        Err(ProfileError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_repo_list_is_a_serde_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/repos");
            then.status(200).body("<html>");
        })
        .await;

    let err = client(&server).fetch_repos("octocat").await.unwrap_err();
    assert!(matches!(err, ProfileError::Serde(_)));
}
