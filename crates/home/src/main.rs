use anyhow::Context;

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = storefront_home::Config::from_env().context("failed to read configuration")?;
    let page = storefront_home::render_home(&config).context("failed to build landing page")?;

    let json = serde_json::to_string_pretty(&page).context("failed to serialize landing page")?;
    println!("{json}");
    Ok(())
}
