//! Declarative view components for every storefront route.
//!
//! Each view is a plain function returning a [`crate::page::Page`] tree.
//! No view carries decision logic of its own: the routing layer is the
//! only place in this crate with branching behavior.

mod about;
mod address_form;
mod addresses;
mod cart;
mod category;
mod checkout;
mod home;
mod log_in;
mod my_account;
mod not_found;
mod order_detail;
mod orders;
mod product;
mod profile;
mod search;
mod settings;
mod sign_up;
mod success;

pub use about::about;
pub use address_form::address_form;
pub use addresses::addresses;
pub use cart::cart;
pub use category::category;
pub use checkout::checkout;
pub use home::home;
pub use log_in::log_in;
pub use my_account::my_account;
pub use not_found::not_found;
pub use order_detail::order_detail;
pub use orders::orders;
pub use product::product;
pub use profile::profile;
pub use search::search;
pub use settings::settings;
pub use sign_up::sign_up;
pub use success::success;
