//! Auction configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::AuctionEngine;
use crate::ports::{to_base58, Address, Clock, PaymentRail, TokenLedger};
use crate::state::AuctionParameters;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "FAIR_AUCTION_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "fair-auction.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionConfig {
    /// Project token mint (base58)
    pub project_token: String,

    /// Payment asset mint (base58)
    pub payment_asset: String,

    /// Treasury receiving contributions (base58)
    pub treasury: String,

    /// Owner allowed to burn unsold tokens and run emergency withdrawals (base58)
    pub owner: String,

    /// Engine custody account on the project-token ledger (base58)
    pub custody: String,

    /// Sale opens strictly after this Unix timestamp
    pub start_time: i64,

    /// Sale closes strictly after this Unix timestamp
    pub end_time: i64,

    /// Project-token supply reserved for the sale (smallest units)
    pub max_project_tokens_to_distribute: u64,

    /// Raise level at which the full supply is distributed
    pub min_raise_for_max_distribution: u64,

    /// Hard cap on total contributions
    pub max_raise_amount: u64,

    /// Hard cap on a single wallet's contributions
    pub cap_per_wallet: u64,
}

impl AuctionConfig {
    /// Load configuration from the TOML file named by `FAIR_AUCTION_CONFIG`
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let expanded_path = shellexpand::tilde(path);
        let config_str = std::fs::read_to_string(expanded_path.as_ref())
            .context(format!("Failed to read config file: {}", path))?;

        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        toml::from_str(config_str).context("Failed to parse config TOML")
    }

    /// Devnet defaults: one-day window, 2 payment units hard cap
    pub fn default_devnet() -> Self {
        Self {
            project_token: "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA".to_string(),
            payment_asset: "So11111111111111111111111111111111111111112".to_string(),
            treasury: "4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi".to_string(),
            owner: "8qbHbw2BbbTHBW1sbeqakYXVKRQM8Ne7pLK7m6CVfeR".to_string(),
            custody: "CktRuQ2mttgRGkXJtyksdKHjUdc2C4TgDzyB98oEzy8".to_string(),
            start_time: 1_700_000_000,
            end_time: 1_700_086_400,
            max_project_tokens_to_distribute: 19_999_999_999_999,
            min_raise_for_max_distribution: 1_000_000_000_000_000_000,
            max_raise_amount: 2_000_000_000_000_000_000,
            cap_per_wallet: 2_000_000_000_000_000_000,
        }
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_devnet();
        let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;

        std::fs::write(path, toml_str).context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }

    /// Decode addresses and validate the sale parameters
    pub fn to_parameters(&self) -> Result<AuctionParameters> {
        let params = AuctionParameters {
            project_token: decode_address("project_token", &self.project_token)?,
            payment_asset: decode_address("payment_asset", &self.payment_asset)?,
            start_time: self.start_time,
            end_time: self.end_time,
            treasury: decode_address("treasury", &self.treasury)?,
            max_project_tokens_to_distribute: u128::from(self.max_project_tokens_to_distribute),
            min_raise_for_max_distribution: u128::from(self.min_raise_for_max_distribution),
            max_raise_amount: u128::from(self.max_raise_amount),
            cap_per_wallet: u128::from(self.cap_per_wallet),
        };

        params.validate().context("Invalid auction parameters")?;
        Ok(params)
    }

    pub fn owner_address(&self) -> Result<Address> {
        decode_address("owner", &self.owner)
    }

    pub fn custody_address(&self) -> Result<Address> {
        decode_address("custody", &self.custody)
    }

    /// Build an engine over the given collaborators
    ///
    /// The ledger must already be bound to the configured custody account.
    pub fn build_engine<R, L, C>(
        &self,
        rail: R,
        ledger: L,
        clock: C,
    ) -> Result<AuctionEngine<R, L, C>>
    where
        R: PaymentRail,
        L: TokenLedger,
        C: Clock,
    {
        let params = self.to_parameters()?;
        let owner = self.owner_address()?;

        let custody = self.custody_address()?;
        if *ledger.custody() != custody {
            anyhow::bail!(
                "Ledger custody {} does not match configured custody {}",
                to_base58(ledger.custody()),
                self.custody
            );
        }

        AuctionEngine::new(params, owner, rail, ledger, clock)
            .context("Failed to create auction engine")
    }
}

fn decode_address(field: &str, value: &str) -> Result<Address> {
    let bytes = bs58::decode(value)
        .into_vec()
        .context(format!("Invalid base58 in {}", field))?;

    Address::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("{} must decode to 32 bytes, got {}", field, bytes.len()))
}
