use std::path::PathBuf;

use prodshot::data_url::DataUrl;
use prodshot::output::save_image;
use prodshot::types::run::{BackgroundSpec, ImageCount, QualityTier, RunConfiguration};
use prodshot::Client;

fn output_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PRODSHOT_OUTPUT_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from("output")
}

#[tokio::main]
async fn main() -> prodshot::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(product_path) = args.next() else {
        eprintln!("usage: generate_product_images <product-image> [background description]");
        std::process::exit(2);
    };
    let background = args
        .next()
        .unwrap_or_else(|| prodshot::presets::BACKGROUND_PRESETS[0].value.to_string());

    let client = Client::from_env()?;
    let product = DataUrl::from_file(&product_path).await?;

    let runner = client.runs().runner();
    let mut state = runner.subscribe();
    let progress = tokio::spawn(async move {
        while state.changed().await.is_ok() {
            let snapshot = state.borrow_and_update().clone();
            println!(
                "{:?} {}%",
                snapshot.phase, snapshot.progress_percent
            );
            if !snapshot.is_running() {
                break;
            }
        }
    });

    let results = runner
        .run(RunConfiguration {
            product_image: product.to_string(),
            background: BackgroundSpec::Text(background),
            image_count: ImageCount::Two,
            quality: QualityTier::Standard,
        })
        .await?;
    let _ = progress.await;

    let dir = output_dir();
    std::fs::create_dir_all(&dir)?;
    for (index, result) in results.iter().enumerate() {
        let image = DataUrl::parse(result)?;
        let path = save_image(&dir, index, &image).await?;
        println!("saved {}", path.display());
    }

    Ok(())
}
