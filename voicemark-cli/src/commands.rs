use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use indicatif::ProgressBar;

use voicemark_core::generate::{
    parse_keywords, ContentGenerator, ContentRequest, Platform, PostLength,
};
use voicemark_core::store::ProfileStore;

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// What the post should be about
    pub topic: String,

    /// Comma-separated keywords to work into the post
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Post length: short, medium, or long
    #[arg(long, default_value = "medium")]
    pub length: String,

    /// Target platform (linkedin, twitter, facebook, instagram, blog, email)
    #[arg(long, default_value = "linkedin")]
    pub platform: String,

    /// Leave hashtags out of the post
    #[arg(long)]
    pub no_hashtags: bool,

    /// Leave the closing call to action out of the post
    #[arg(long)]
    pub no_call_to_action: bool,
}

pub fn build_request(args: &GenerateArgs) -> Result<ContentRequest> {
    let topic = args.topic.trim();
    if topic.is_empty() {
        bail!("Topic must not be empty");
    }

    let platform = Platform::from_str(&args.platform).map_err(|_| {
        let known = Platform::all()
            .iter()
            .map(|platform| platform.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!(
            "Unknown platform '{}' (expected one of: {known})",
            args.platform
        )
    })?;

    Ok(ContentRequest {
        topic: topic.to_string(),
        keywords: parse_keywords(&args.keywords),
        post_length: PostLength::parse(&args.length),
        platform,
        include_hashtags: !args.no_hashtags,
        include_call_to_action: !args.no_call_to_action,
    })
}

pub async fn generate(generator: &ContentGenerator, request: &ContentRequest) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Writing {} content...", request.platform));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let content = generator.generate(request).await;

    spinner.finish_and_clear();
    println!("{content}");
}

pub fn show_profile(store: &dyn ProfileStore) -> Result<()> {
    match store.get()? {
        Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
        None => println!("No profile saved. Run `voicemark profile edit` to create one."),
    }
    Ok(())
}

pub fn clear_profile(store: &dyn ProfileStore) -> Result<()> {
    store.delete()?;
    println!("Profile cleared.");
    Ok(())
}
