//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tokendrop_domain::traits::ClaimReceipt;
use tokendrop_domain::ClaimStatus;
use tokendrop_engine::ClaimState;

/// Output formatter.
#[derive(Debug, Clone)]
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the full storefront state.
    pub fn format_state(&self, state: &ClaimState, ceiling: u64) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&state_json(state, ceiling))?),
            OutputFormat::Table => Ok(self.format_state_table(state, ceiling)),
            OutputFormat::Quiet => Ok(state.status.as_str().to_string()),
        }
    }

    /// Format the price of the current quantity.
    pub fn format_quote(&self, state: &ClaimState, ceiling: u64) -> Result<String> {
        let price = price_text(state);

        match self.format {
            OutputFormat::Json => {
                let quote = serde_json::json!({
                    "quantity": state.quantity,
                    "max_quantity": state.max_quantity(ceiling),
                    "total": state.price_to_mint.as_ref().map(|p| p.total.to_string()),
                    "amount": state.price_to_mint.as_ref().map(|p| p.amount.clone()),
                    "symbol": state.price_to_mint.as_ref().and_then(|p| p.symbol.clone()),
                });
                Ok(serde_json::to_string_pretty(&quote)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Quantity", "Max", "Price"]);
                builder.push_record([
                    state.quantity.to_string(),
                    state.max_quantity(ceiling).to_string(),
                    price,
                ]);
                Ok(self.build_table(builder))
            }
            OutputFormat::Quiet => Ok(price),
        }
    }

    /// One line per state change, for `watch`.
    pub fn format_state_line(&self, state: &ClaimState, ceiling: u64) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&state_json(state, ceiling))?),
            OutputFormat::Quiet => Ok(state.status.as_str().to_string()),
            OutputFormat::Table => {
                let label = if state.button_text.is_empty() {
                    "-"
                } else {
                    state.button_text.as_str()
                };
                Ok(format!(
                    "{} {} (quantity {} of {}, remaining {})",
                    self.status_badge(&state.status),
                    label,
                    state.quantity,
                    state.max_quantity(ceiling),
                    state.supply.remaining_display.as_deref().unwrap_or("?"),
                ))
            }
        }
    }

    /// Format a claim receipt.
    pub fn format_receipt(&self, receipt: &ClaimReceipt) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "transaction_id": receipt.transaction_id,
                "quantity": receipt.quantity,
            }))?),
            OutputFormat::Quiet => Ok(receipt.transaction_id.clone()),
            OutputFormat::Table => Ok(self.success(&format!(
                "Claimed {} token(s) (transaction: {})",
                receipt.quantity, receipt.transaction_id
            ))),
        }
    }

    fn format_state_table(&self, state: &ClaimState, ceiling: u64) -> String {
        let dash = || "-".to_string();

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record([
            "Contract".to_string(),
            state.contract_name.clone().unwrap_or_else(dash),
        ]);
        builder.push_record(["Status".to_string(), self.status_badge(&state.status)]);
        builder.push_record([
            "Button".to_string(),
            if state.button_text.is_empty() {
                dash()
            } else {
                state.button_text.clone()
            },
        ]);
        builder.push_record(["Quantity".to_string(), state.quantity.to_string()]);
        builder.push_record([
            "Max claimable".to_string(),
            format!("{} (limit {})", state.max_claimable, state.max_quantity(ceiling)),
        ]);
        builder.push_record(["Price".to_string(), price_text(state)]);
        builder.push_record([
            "Supply".to_string(),
            state.supply_headline.clone().unwrap_or_else(dash),
        ]);
        builder.push_record(["Claimed".to_string(), state.supply.claimed_text()]);
        builder.push_record([
            "Total".to_string(),
            state.supply.total.map(|t| t.to_string()).unwrap_or_else(dash),
        ]);
        builder.push_record(["Balance".to_string(), state.balance.clone().unwrap_or_else(dash)]);
        builder.push_record(["Banner".to_string(), banner(state).unwrap_or_else(dash)]);

        self.build_table(builder)
    }

    fn build_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn status_badge(&self, status: &ClaimStatus) -> String {
        let color = match status {
            ClaimStatus::Ready { .. } => "green",
            ClaimStatus::SoldOut => "red",
            ClaimStatus::Ineligible => "yellow",
            ClaimStatus::Loading | ClaimStatus::Idle => "blue",
        };
        self.colorize(status.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn price_text(state: &ClaimState) -> String {
    match &state.price_to_mint {
        Some(price) if price.total.is_zero() => "free".to_string(),
        Some(price) => price.to_string(),
        None => "-".to_string(),
    }
}

fn banner(state: &ClaimState) -> Option<String> {
    if state.window.presale_not_started {
        Some("The presale has not started yet.".to_string())
    } else if state.window.presale_starting_soon {
        Some("Presale is starting soon.".to_string())
    } else {
        None
    }
}

fn state_json(state: &ClaimState, ceiling: u64) -> serde_json::Value {
    serde_json::json!({
        "contract_name": state.contract_name,
        "status": state.status.as_str(),
        "button_text": state.button_text,
        "quantity": state.quantity,
        "max_claimable": state.max_claimable.to_string(),
        "max_quantity": state.max_quantity(ceiling),
        "allowlist_override": format!("{:?}", state.allowlist_override),
        "price_to_mint": state.price_to_mint.as_ref().map(|p| serde_json::json!({
            "total": p.total.to_string(),
            "amount": p.amount,
            "symbol": p.symbol,
        })),
        "supply": {
            "headline": state.supply_headline,
            "remaining": state.supply.remaining_display,
            "total_available": state.supply.total_available.to_string(),
            "claimed": state.supply.claimed.to_string(),
            "total": state.supply.total.map(|t| t.to_string()),
        },
        "eligibility": {
            "is_sold_out": state.eligibility.is_sold_out,
            "can_claim": state.eligibility.can_claim,
            "is_loading": state.eligibility.is_loading,
            "button_loading": state.eligibility.button_loading,
        },
        "page": {
            "show_loading": state.page.show_loading,
            "show_claim_grid": state.page.show_claim_grid,
            "presale_not_started": state.page.presale_not_started,
            "presale_starting_soon": state.page.presale_starting_soon,
        },
        "balance": state.balance,
    })
}
