//! Portfolio module - snapshot models, the aggregator, services, and traits.

mod aggregator;
mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

#[cfg(test)]
mod aggregator_tests;

pub use aggregator::aggregate;
pub use portfolio_model::{
    AmountPair, Commodities, EmergencyFund, EmergencyPair, Equity, Holding, NonEquity, Portfolio,
    PortfolioInput,
};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
