//! # Forkify
//!
//! Client-side core of a recipe discovery application: search recipes, open
//! one, rescale its servings, collect its ingredients on a shopping list and
//! bookmark favourites across sessions.

pub mod config;
pub mod controller;
pub mod errors;
pub mod likes;
pub mod provider;
pub mod recipe;
pub mod search;
pub mod shopping_list;
pub mod storage;
pub mod unit_converter;
