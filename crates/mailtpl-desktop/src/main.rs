//! mailtpl desktop application
//!
//! Edits the auth mailer subjects and email template bodies stored in the
//! local auth config database.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mailtpl=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting mailtpl desktop...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Email Templates")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
