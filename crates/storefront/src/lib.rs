//! Tiffin Storefront - Customer-facing ordering services.
//!
//! Everything a signed-in customer can do: look themselves up in the user
//! directory, browse the menu, fill a cart, check out, and follow their
//! orders. All services are generic over the managed-store port and take a
//! [`VerifiedIdentity`](tiffin_core::VerifiedIdentity) where the caller
//! matters; raw provider tokens never reach this crate.
//!
//! # Modules
//!
//! - [`auth`] - Caller resolution against the user directory
//! - [`directory`] - User records: first sign-in, profile, provider sync
//! - [`catalog`] - Category and menu-item reads
//! - [`cart`] - Client-session cart aggregate over a storage port
//! - [`orders`] - Checkout and the customer side of the order lifecycle

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod directory;
pub mod orders;
