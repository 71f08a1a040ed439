use std::env;
use std::time::Duration;

use cuecloud::{Client, Config, CueStatus, CuesFilter};
use cuecloud_core::{Context, OsEnv, Result};
use cuecloud_http_send_reqwest::ReqwestHttpSend;
use log::warn;
use serde_json::Value;

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();
    if env::var("CUECLOUD_TEST").is_err() || env::var("CUECLOUD_TEST").unwrap() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(
            ReqwestHttpSend::with_timeout(Duration::from_secs(30)).expect("client must build"),
        )
        .with_env(OsEnv);
    let mut config = Config::from_env(&ctx);
    if let Ok(url) = env::var("CUECLOUD_BASE_URL") {
        config = config.with_base_url(url);
    }

    Some(Client::new(ctx, config).expect("CUECLOUD_ACCESS_KEY and CUECLOUD_ACCESS_PASSWORD must set"))
}

fn status_code(resp: &str) -> Option<i64> {
    serde_json::from_str::<Value>(resp).ok()?["StatusCode"].as_i64()
}

#[tokio::test]
async fn test_validate_user() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("CUECLOUD_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client.validate_user().await?;
    assert_eq!(status_code(&resp), Some(200), "unexpected response: {resp}");
    Ok(())
}

#[tokio::test]
async fn test_get_keywords() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("CUECLOUD_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client.get_keywords().await?;
    assert_eq!(status_code(&resp), Some(200), "unexpected response: {resp}");
    Ok(())
}

#[tokio::test]
async fn test_list_active_cues() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("CUECLOUD_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client
        .get_cues(CuesFilter {
            status: Some(CueStatus::Active),
            ..Default::default()
        })
        .await?;
    let v: Value = serde_json::from_str(&resp).expect("response must be json");
    assert!(v["Data"]["NumTotalResults"].is_number(), "unexpected response: {resp}");
    Ok(())
}
