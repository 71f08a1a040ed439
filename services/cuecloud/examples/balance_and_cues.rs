use cuecloud::{Client, Config, CueStatus, CuesFilter};
use cuecloud_core::{Context, OsEnv};
use cuecloud_http_send_reqwest::ReqwestHttpSend;
use std::time::Duration;

/// Prints the balance and the active cues of the account configured through
/// `CUECLOUD_ACCESS_KEY` and `CUECLOUD_ACCESS_PASSWORD`.
///
/// Set `CUECLOUD_BASE_URL` to talk to another deployment.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::with_timeout(Duration::from_secs(30))?)
        .with_env(OsEnv);

    let mut config = Config::from_env(&ctx);
    if let Some(url) = ctx.env_var("CUECLOUD_BASE_URL") {
        config = config.with_base_url(url);
    }

    let client = match Client::new(ctx, config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    println!("{}", client.get_balance().await?);
    println!(
        "{}",
        client
            .get_cues(CuesFilter {
                cue_id: Some(String::new()),
                group_id: Some(0),
                status: Some(CueStatus::Active),
                ..Default::default()
            })
            .await?
    );

    Ok(())
}
