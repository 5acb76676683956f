use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config,
    discogs::{Discogs, HttpJsonClient, RateLimiter, collection},
    error::{Error, Res},
    info,
    management::StylesManager,
    success, utils, warning,
};

pub async fn list_styles() -> Res<()> {
    match StylesManager::load().await {
        Ok(styles) if !styles.is_empty() => {
            for style in styles.styles() {
                println!("{}", style);
            }
            info!("{} styles stored.", styles.styles().len());
        }
        _ => warning!("No stored styles. Run toprated styles update."),
    }

    Ok(())
}

/// Rebuilds the style list from the styles used in the user's collection.
pub async fn update_styles() -> Res<()> {
    let client = HttpJsonClient::new(config::client_config()?)?;
    let mut api = Discogs::new(client, RateLimiter::new(config::request_interval()?));

    let pb = ProgressBar::new_spinner();
    pb.set_message("Looking up account...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .map_err(|e| Error::configuration(e.to_string()))?
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = async {
        let username = collection::get_username(&mut api).await?;
        collection::get_collection(&mut api, &username, &pb).await
    }
    .await;
    pb.finish_and_clear();
    let items = result?;

    let styles = StylesManager::new(utils::collection_styles(&items));
    styles.persist().await?;

    success!(
        "Stored {} styles from {} collection items in {}.",
        styles.styles().len(),
        items.len(),
        StylesManager::styles_path().display()
    );
    Ok(())
}
