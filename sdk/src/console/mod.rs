//! Headless list-and-mutate screens.
//!
//! A [`Screen`](screen::Screen) binds one page of a [`Resource`](resource::Resource)
//! to the create, update, delete and activate flows of the admin console and owns
//! the transient state around them: selection, open modals and the targeted row.
//! Every successful mutation is followed by a reload, notifications go through a
//! [`Notifier`](notifier::Notifier).

pub mod columns;
pub mod detail;
pub mod notifier;
pub mod resource;
pub mod screen;
