use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    /// the tablename of the products table
    pub products_table: String,
    /// the tablename of the stocks table
    pub stocks_table: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let products_table =
            std::env::var("PRODUCTS_TABLE_NAME").context("PRODUCTS_TABLE_NAME must be provided")?;
        let stocks_table =
            std::env::var("STOCKS_TABLE_NAME").context("STOCKS_TABLE_NAME must be provided")?;

        Ok(Config {
            products_table,
            stocks_table,
        })
    }
}
