//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: session state machine
//! - [`Driver`]: Platform-specific I/O

use crate::{App, AppAction, Driver};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and app.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop until the app asks to quit.
    ///
    /// Returns the final app state.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        self.driver.render(&self.app)?;

        let result = self.event_loop().await;
        self.driver.stop();
        result.map(|()| self.app)
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        loop {
            let actions = self.driver.poll_event(&mut self.app).await?;
            if self.process_actions(actions)? {
                return Ok(());
            }
        }
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if the application should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Notify(notification) => {
                    tracing::info!(%notification, "notification shown");
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
