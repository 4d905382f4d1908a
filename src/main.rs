use std::io::{self, Write};

use anyhow::Result;

use gog_languages_gen::api_client::CatalogClient;
use gog_languages_gen::codegen;
use gog_languages_gen::config;
use gog_languages_gen::logging;

fn main() -> Result<()> {
    logging::init_tracing();

    let client = CatalogClient::new(&config::endpoint_url());
    let records = client.fetch_languages()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    codegen::write_entries(&mut out, &records)?;
    out.flush()?;

    Ok(())
}
