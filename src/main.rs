use anyhow::Result;

use ap_question_extract::utils::logging;
use ap_question_extract::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::load();
    let app = App::initialize(config).await?;
    app.run().await?;

    Ok(())
}
