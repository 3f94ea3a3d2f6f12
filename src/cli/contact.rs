use anyhow::Result;
use clap::Args;
use tracing::{info, warn};

use crate::config::Config;
use crate::contact::{open_in_browser, wait_for_launcher, ContactForm};

/// Build the contact form submission URL
#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Your name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Your email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Subject (research, speaking, consulting, other)
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Message body
    #[arg(long, default_value = "")]
    pub message: String,

    /// Also open the URL in the default browser
    #[arg(long)]
    pub open: bool,
}

impl ContactCommand {
    pub fn form(&self) -> ContactForm {
        ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    pub async fn execute(&self, config: &Config) -> Result<()> {
        let url = self.form().submission_url(&config.form)?;
        println!("{}", url);

        if self.open {
            info!("Opening contact form in browser");
            let launched = match open_in_browser(&url) {
                Ok(child) => wait_for_launcher(child).await,
                Err(e) => Err(e),
            };
            if let Err(e) = launched {
                warn!("{}", e);
                return Err(e.into());
            }
        }
        Ok(())
    }
}
