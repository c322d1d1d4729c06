// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Throwaway `MariaDB` containers for backend validation.

use std::thread::sleep;
use std::time::Duration;

use color_eyre::{eyre::Context, Result};
use duct::cmd;

use crate::ExpressionExt;

const IMAGE: &str = "mariadb:11";
const READY_ATTEMPTS: u32 = 30;

/// Connection settings for a disposable container.
#[derive(Debug, Clone, Copy)]
pub struct ContainerSettings {
    pub name: &'static str,
    pub database: &'static str,
    pub user: &'static str,
    pub password: &'static str,
    /// Host port mapped to 3306.
    pub port: u16,
}

impl ContainerSettings {
    #[must_use]
    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@127.0.0.1:{}/{}",
            self.user, self.password, self.port, self.database
        )
    }
}

/// A running container. Stopped and removed on drop, so every exit path
/// (including test failures and `?` returns) cleans up.
#[derive(Debug)]
pub struct MariadbContainer {
    settings: ContainerSettings,
}

impl MariadbContainer {
    /// Starts a fresh container and blocks until it accepts queries.
    ///
    /// Any container left behind under the same name by an earlier run is
    /// removed first.
    pub fn start(settings: ContainerSettings) -> Result<Self> {
        tracing::info!("Checking Docker availability");
        cmd!("docker", "--version")
            .run_with_trace()
            .wrap_err("Docker is not available. Please install Docker.")?;

        remove(settings.name);

        tracing::info!("Starting MariaDB container: {}", settings.name);
        cmd!(
            "docker",
            "run",
            "--name",
            settings.name,
            "-e",
            format!("MARIADB_DATABASE={}", settings.database),
            "-e",
            format!("MARIADB_USER={}", settings.user),
            "-e",
            format!("MARIADB_PASSWORD={}", settings.password),
            "-e",
            "MARIADB_ROOT_PASSWORD=root_password",
            "-p",
            format!("{}:3306", settings.port),
            "-d",
            IMAGE
        )
        .run_with_trace()
        .wrap_err("Failed to start MariaDB container")?;

        let container = Self { settings };
        container.wait_until_ready()?;
        Ok(container)
    }

    #[must_use]
    pub const fn settings(&self) -> &ContainerSettings {
        &self.settings
    }

    fn wait_until_ready(&self) -> Result<()> {
        tracing::info!("Waiting for MariaDB to be ready...");
        for attempt in 1..=READY_ATTEMPTS {
            sleep(Duration::from_secs(1));
            tracing::debug!("Connection attempt {attempt}/{READY_ATTEMPTS}");

            let probe = cmd!(
                "docker",
                "exec",
                self.settings.name,
                "mariadb",
                "-u",
                self.settings.user,
                format!("-p{}", self.settings.password),
                "-e",
                "SELECT 1"
            )
            .stdout_null()
            .stderr_null()
            .run();

            if probe.is_ok() {
                tracing::info!("MariaDB is ready");
                return Ok(());
            }
        }

        Err(color_eyre::eyre::eyre!(
            "MariaDB did not become ready within {READY_ATTEMPTS} seconds"
        ))
    }
}

impl Drop for MariadbContainer {
    fn drop(&mut self) {
        tracing::info!("Stopping MariaDB container: {}", self.settings.name);
        remove(self.settings.name);
    }
}

fn remove(name: &str) {
    // Both commands fail harmlessly when the container does not exist.
    let _ = cmd!("docker", "stop", name).stdout_null().stderr_null().run();
    let _ = cmd!("docker", "rm", name).stdout_null().stderr_null().run();
}
