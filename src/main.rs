fn main() -> anyhow::Result<()> {
    storefront_session::cli::run()
}
