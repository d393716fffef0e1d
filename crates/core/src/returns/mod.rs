//! Monthly returns module - models, services, and traits.

mod returns_model;
mod returns_service;
mod returns_traits;


pub use returns_model::{
    CategoryReturns, MonthlyReturn, NewMonthlyReturn, ReturnsSummary, SummaryByCategory,
};
pub use returns_service::ReturnsService;
pub use returns_traits::{ReturnsRepositoryTrait, ReturnsServiceTrait};
